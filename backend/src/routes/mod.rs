//! Route definitions for the Agri Advisory Platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState, MlState};

/// Advisory server routes.
///
/// When the generative-model credential is absent, only
/// `/generate_advisory` is swapped for a fixed 500 handler; the other
/// generation endpoints still run and produce degraded placeholder text.
pub fn advisory_routes(has_genai_credential: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/summarize_weather", post(handlers::summarize_weather))
        .route("/crop_care_advice", post(handlers::crop_care_advice))
        .route("/get_educational_videos", post(handlers::get_educational_videos))
        .route("/available_crops", get(handlers::get_available_crops))
        .route("/growth_stages/:crop_name", get(handlers::get_growth_stages))
        .route("/chatbot", post(handlers::chatbot));

    if has_genai_credential {
        router.route("/generate_advisory", post(handlers::generate_advisory))
    } else {
        router.route("/generate_advisory", post(handlers::missing_genai_key))
    }
}

/// ML inference server routes
pub fn ml_routes() -> Router<MlState> {
    Router::new().route("/predict", post(handlers::predict))
}
