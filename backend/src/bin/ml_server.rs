//! Agri Advisory Platform - ML Inference Server
//!
//! Loads the trained classifier and label-encoder artifacts at startup and
//! serves crop label predictions. Missing or corrupt artifacts are fatal:
//! the server refuses to come up rather than serve partially.

use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agri_advisory_backend::{
    config::Config, create_ml_app, services::InferenceService, MlState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ml_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Agri Advisory ML Inference Server");
    tracing::info!("Environment: {}", config.environment);

    let inference = InferenceService::load(
        Path::new(&config.ml_server.model_path),
        Path::new(&config.ml_server.encoder_path),
    )
    .context("failed to load classifier artifacts")?;

    tracing::info!(labels = inference.labels().len(), "classifier artifacts loaded");

    let state = MlState {
        inference: Arc::new(inference),
    };

    let app = create_ml_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.ml_server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
