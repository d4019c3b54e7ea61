//! Request and response payloads for the advisory and inference endpoints
//!
//! Inbound payloads mirror the loosely-typed JSON the mobile clients send:
//! every field the endpoint does not strictly require is optional or
//! defaulted, and validation happens once in the handler before any
//! business logic runs.

use serde::{Deserialize, Serialize};

use crate::models::recommendation::VideoRecommendation;

fn default_pollution_level() -> f64 {
    1.0
}

fn default_growth_stage() -> String {
    "vegetative".to_string()
}

fn default_crop_general() -> String {
    "general".to_string()
}

/// Location block accepted by the weather-summary paths
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationInfo {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// `POST /summarize_weather` request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherSummaryRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    #[serde(default)]
    pub rainfall: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    #[serde(rename = "uvIndex")]
    pub uv_index: Option<f64>,
    pub language: Option<String>,
}

/// `POST /summarize_weather` response
#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherSummaryResponse {
    pub text: String,
}

/// `POST /generate_advisory` request
///
/// Doubles as a weather-summary call when `mode == "weather_summary"`,
/// in which case location comes from the nested `location` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateAdvisoryRequest {
    pub mode: Option<String>,
    #[serde(default)]
    pub location: LocationInfo,
    pub crop_name: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    #[serde(default = "default_pollution_level")]
    pub pollution_level: f64,
    #[serde(rename = "windSpeed")]
    pub wind_speed: Option<f64>,
    pub pressure: Option<f64>,
    #[serde(rename = "uvIndex")]
    pub uv_index: Option<f64>,
    pub language: Option<String>,
}

/// `POST /generate_advisory` response
#[derive(Debug, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    pub advisory_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory_image_url: Option<String>,
}

/// `POST /crop_care_advice` request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CropCareRequest {
    pub crop_name: Option<String>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    #[serde(default)]
    pub mq2: f64,
    #[serde(default = "default_growth_stage")]
    pub growth_stage: String,
    pub language: Option<String>,
}

/// Structured crop-care advice block
#[derive(Debug, Serialize, Deserialize)]
pub struct CropCareAdvice {
    pub crop: String,
    #[serde(rename = "growthStage")]
    pub growth_stage: String,
    #[serde(rename = "immediateActions")]
    pub immediate_actions: Vec<String>,
    #[serde(rename = "aiRecommendations")]
    pub ai_recommendations: String,
}

/// `POST /crop_care_advice` response
#[derive(Debug, Serialize, Deserialize)]
pub struct CropCareResponse {
    pub success: bool,
    pub advice: CropCareAdvice,
}

/// `POST /get_educational_videos` request
#[derive(Debug, Clone, Deserialize)]
pub struct EducationalVideosRequest {
    #[serde(default = "default_crop_general")]
    pub crop_name: String,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
    #[serde(default = "default_growth_stage")]
    pub growth_stage: String,
    pub language: Option<String>,
}

impl Default for EducationalVideosRequest {
    fn default() -> Self {
        Self {
            crop_name: default_crop_general(),
            temperature: None,
            humidity: None,
            rainfall: None,
            growth_stage: default_growth_stage(),
            language: None,
        }
    }
}

/// Environmental readings echoed back with video recommendations
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationConditions {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
}

/// Context block echoed back with video recommendations
#[derive(Debug, Serialize, Deserialize)]
pub struct GeneratedFor {
    pub crop: String,
    pub growth_stage: String,
    pub conditions: GenerationConditions,
}

/// `POST /get_educational_videos` response
#[derive(Debug, Serialize, Deserialize)]
pub struct EducationalVideosResponse {
    pub success: bool,
    pub videos: Vec<VideoRecommendation>,
    pub generated_for: GeneratedFor,
}

/// `POST /chatbot` request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatbotRequest {
    #[serde(default)]
    pub message: String,
    pub user_id: Option<String>,
}

/// `POST /chatbot` response
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatbotResponse {
    pub reply: String,
}

/// `POST /predict` request (ML inference server)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictRequest {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub rainfall: Option<f64>,
}

/// `POST /predict` response
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: String,
}
