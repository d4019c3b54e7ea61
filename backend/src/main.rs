//! Agri Advisory Platform - Advisory Server
//!
//! Serves weather summaries, crop advisories, care advice, educational
//! video recommendations, and the farmer chatbot.

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agri_advisory_backend::{config::Config, create_advisory_app, external::GenAiClient, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advisory_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Agri Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    if config.genai.api_key.is_none() {
        tracing::warn!(
            "GOOGLE_GENAI_API_KEY not set; /generate_advisory will answer with a fixed 500"
        );
    }

    let genai = GenAiClient::new(&config.genai);
    let state = AppState {
        config: Arc::new(config.clone()),
        genai,
    };

    let app = create_advisory_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
