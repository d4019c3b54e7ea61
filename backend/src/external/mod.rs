//! External API integrations

pub mod genai;

pub use genai::GenAiClient;
