//! HTTP handlers for the Agri Advisory Platform

pub mod advisory;
pub mod catalog;
pub mod chatbot;
pub mod health;
pub mod predict;
pub mod videos;

pub use advisory::{crop_care_advice, generate_advisory, missing_genai_key, summarize_weather};
pub use catalog::{get_available_crops, get_growth_stages};
pub use chatbot::chatbot;
pub use health::health_check;
pub use predict::predict;
pub use videos::get_educational_videos;
