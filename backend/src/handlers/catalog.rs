//! HTTP handlers for the static crop and growth-stage catalogs

use axum::{extract::Path, Json};
use serde::Serialize;
use shared::{available_crops, growth_stages, CropOption, GrowthStage};

#[derive(Serialize)]
pub struct CropsResponse {
    pub success: bool,
    pub crops: Vec<CropOption>,
}

#[derive(Serialize)]
pub struct GrowthStagesResponse {
    pub success: bool,
    pub stages: Vec<GrowthStage>,
}

/// `GET /available_crops`
pub async fn get_available_crops() -> Json<CropsResponse> {
    Json(CropsResponse {
        success: true,
        crops: available_crops(),
    })
}

/// `GET /growth_stages/:crop_name`
pub async fn get_growth_stages(Path(crop_name): Path<String>) -> Json<GrowthStagesResponse> {
    Json(GrowthStagesResponse {
        success: true,
        stages: growth_stages(&crop_name),
    })
}
