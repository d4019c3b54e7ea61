//! HTTP handlers for weather summaries and crop advisories

use axum::{extract::State, Json};
use shared::{
    AdvisoryResponse, CropCareAdvice, CropCareRequest, CropCareResponse,
    GenerateAdvisoryRequest, Language, WeatherSummaryRequest, WeatherSummaryResponse,
};

use crate::error::{AppError, AppResult};
use crate::services::prompt::{
    self, advisory_image_url, advisory_prompt, crop_care_prompt, weather_summary_prompt,
};
use crate::AppState;

/// Mode value that turns `/generate_advisory` into a weather-summary call
const WEATHER_SUMMARY_MODE: &str = "weather_summary";

/// `POST /summarize_weather`: short weather summary for farmers
pub async fn summarize_weather(
    State(state): State<AppState>,
    body: Option<Json<WeatherSummaryRequest>>,
) -> AppResult<Json<WeatherSummaryResponse>> {
    let Json(req) = body.unwrap_or_default();
    let language = Language::resolve(req.language.as_deref());

    let ctx = prompt::WeatherPromptContext {
        city: req.city,
        state: req.state,
        country: req.country,
        lat: req.lat,
        lon: req.lon,
        temperature: req.temperature,
        humidity: req.humidity,
        rainfall: req.rainfall,
        wind_speed: req.wind_speed,
        pressure: req.pressure,
        uv_index: req.uv_index,
    };

    let text = state.genai.generate(&weather_summary_prompt(language, &ctx)).await;
    Ok(Json(WeatherSummaryResponse { text }))
}

/// `POST /generate_advisory`: crop advisory, or a weather summary when
/// `mode == "weather_summary"`
pub async fn generate_advisory(
    State(state): State<AppState>,
    body: Option<Json<GenerateAdvisoryRequest>>,
) -> AppResult<Json<AdvisoryResponse>> {
    let Json(req) = body.unwrap_or_default();
    let language = Language::resolve(req.language.as_deref());

    if req.mode.as_deref() == Some(WEATHER_SUMMARY_MODE) {
        let ctx = prompt::WeatherPromptContext {
            city: req.location.city,
            state: req.location.state,
            country: req.location.country,
            lat: req.location.lat,
            lon: req.location.lon,
            temperature: req.temperature,
            humidity: req.humidity,
            rainfall: req.rainfall.unwrap_or(0.0),
            wind_speed: req.wind_speed,
            pressure: req.pressure,
            uv_index: req.uv_index,
        };
        let text = state.genai.generate(&weather_summary_prompt(language, &ctx)).await;
        return Ok(Json(AdvisoryResponse {
            advisory_text: text,
            advisory_image_url: None,
        }));
    }

    let (Some(temperature), Some(humidity), Some(rainfall)) =
        (req.temperature, req.humidity, req.rainfall)
    else {
        return Err(AppError::Validation(
            "Missing temperature, humidity, or rainfall".to_string(),
        ));
    };

    let crop = req.crop_name.as_deref().unwrap_or("crop");
    let prompt = advisory_prompt(
        language,
        crop,
        temperature,
        humidity,
        rainfall,
        req.pollution_level,
    );
    let advisory_text = state.genai.generate(&prompt).await;

    Ok(Json(AdvisoryResponse {
        advisory_text,
        advisory_image_url: Some(advisory_image_url(crop)),
    }))
}

/// Fixed handler mounted on `/generate_advisory` when the generative-model
/// credential is absent at startup. The rest of the service stays reachable.
pub async fn missing_genai_key() -> AppError {
    AppError::Configuration("GOOGLE_GENAI_API_KEY".to_string())
}

/// `POST /crop_care_advice`: stage-specific care advice
pub async fn crop_care_advice(
    State(state): State<AppState>,
    body: Option<Json<CropCareRequest>>,
) -> AppResult<Json<CropCareResponse>> {
    let Json(req) = body.unwrap_or_default();

    let (Some(crop_name), Some(temperature), Some(humidity), Some(rainfall)) =
        (req.crop_name, req.temperature, req.humidity, req.rainfall)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    let language = Language::resolve(req.language.as_deref());
    let prompt = crop_care_prompt(
        language,
        &crop_name,
        &req.growth_stage,
        temperature,
        humidity,
        rainfall,
        req.mq2,
    );
    let ai_recommendations = state.genai.generate(&prompt).await;

    let advice = CropCareAdvice {
        immediate_actions: vec![
            format!("Monitor {} growth in {} stage", crop_name, req.growth_stage),
            "Check soil moisture levels".to_string(),
            "Observe for pest signs".to_string(),
        ],
        crop: crop_name,
        growth_stage: req.growth_stage,
        ai_recommendations,
    };

    Ok(Json(CropCareResponse {
        success: true,
        advice,
    }))
}
