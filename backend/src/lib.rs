//! Agri Advisory Platform - Backend
//!
//! Two services for smallholder farmers: an advisory server that turns
//! farm and weather context into natural-language guidance through an
//! external generative text model, and an ML inference server that maps
//! environmental readings to a recommended crop.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use external::GenAiClient;
use services::InferenceService;

/// Advisory server state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub genai: GenAiClient,
}

/// ML inference server state shared across handlers
#[derive(Clone)]
pub struct MlState {
    pub inference: Arc<InferenceService>,
}

/// Create the advisory application router with all routes and middleware
pub fn create_advisory_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let has_credential = state.genai.has_credential();

    Router::new()
        .route("/", get(advisory_root))
        .route("/health", get(handlers::health_check))
        .merge(routes::advisory_routes(has_credential))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Create the ML inference application router
pub fn create_ml_app(state: MlState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(ml_root))
        .route("/health", get(handlers::health_check))
        .merge(routes::ml_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn advisory_root() -> &'static str {
    "Agri Advisory API v1.0"
}

/// Root endpoint
async fn ml_root() -> &'static str {
    "Agri Advisory ML Inference API v1.0"
}
