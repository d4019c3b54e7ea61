//! Configuration management for the Agri Advisory Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Advisory server configuration
    pub server: ServerConfig,

    /// ML inference server configuration
    pub ml_server: MlServerConfig,

    /// Generative text model configuration
    pub genai: GenAiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MlServerConfig {
    /// Inference server port
    pub port: u16,

    /// Path to the trained classifier artifact
    pub model_path: String,

    /// Path to the label encoder artifact
    pub encoder_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenAiConfig {
    /// API endpoint for the generative text model
    pub api_endpoint: String,

    /// API credential. The advisory server still starts without it, but
    /// /generate_advisory answers every call with a fixed 500.
    pub api_key: Option<String>,

    /// Model identifier sent with every generation request
    pub model: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 5003)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("ml_server.port", 5001)?
            .set_default("ml_server.model_path", "crop_rec_model.json")?
            .set_default("ml_server.encoder_path", "label_encoder.json")?
            .set_default(
                "genai.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("genai.model", "gemini-2.0-flash-exp")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut config: Config = config.try_deserialize()?;

        // Legacy variable used by existing deployments
        if config.genai.api_key.is_none() {
            config.genai.api_key = std::env::var("GOOGLE_GENAI_API_KEY").ok();
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5003,
            host: "0.0.0.0".to_string(),
        }
    }
}
