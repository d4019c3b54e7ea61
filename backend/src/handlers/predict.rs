//! HTTP handler for crop label prediction (ML inference server)

use axum::{extract::State, Json};
use shared::{PredictRequest, PredictResponse};

use crate::error::AppResult;
use crate::MlState;

/// `POST /predict`: map a (temperature, humidity, rainfall) feature
/// vector to a crop label
pub async fn predict(
    State(state): State<MlState>,
    body: Option<Json<PredictRequest>>,
) -> AppResult<Json<PredictResponse>> {
    let Json(req) = body.unwrap_or_default();
    let prediction = state
        .inference
        .predict(req.temperature, req.humidity, req.rainfall)?;
    Ok(Json(PredictResponse { prediction }))
}
