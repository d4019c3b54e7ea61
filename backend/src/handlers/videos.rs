//! HTTP handler for educational video recommendations
//!
//! Always answers 200: the extraction chain guarantees 1-4 records no
//! matter what the generative model returned.

use axum::{extract::State, Json};
use shared::{
    EducationalVideosRequest, EducationalVideosResponse, GeneratedFor, GenerationConditions,
    Language,
};

use crate::error::AppResult;
use crate::services::extract_recommendations;
use crate::services::prompt::educational_videos_prompt;
use crate::AppState;

/// `POST /get_educational_videos`
pub async fn get_educational_videos(
    State(state): State<AppState>,
    body: Option<Json<EducationalVideosRequest>>,
) -> AppResult<Json<EducationalVideosResponse>> {
    let Json(req) = body.unwrap_or_default();
    let language = Language::resolve(req.language.as_deref());

    let prompt = educational_videos_prompt(
        language,
        &req.crop_name,
        &req.growth_stage,
        req.temperature,
        req.humidity,
        req.rainfall,
    );
    let generated = state.genai.generate(&prompt).await;
    let videos = extract_recommendations(&generated, &req.crop_name, &req.growth_stage);

    Ok(Json(EducationalVideosResponse {
        success: true,
        videos,
        generated_for: GeneratedFor {
            crop: req.crop_name,
            growth_stage: req.growth_stage,
            conditions: GenerationConditions {
                temperature: req.temperature,
                humidity: req.humidity,
                rainfall: req.rainfall,
            },
        },
    }))
}
