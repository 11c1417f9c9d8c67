//! Idhaa Server
//!
//! HTTP surface for the broadcast generation pipeline. Wires the gateway
//! provider, generator, and gatekeeper together and maps pipeline failures
//! to status codes.

#![warn(missing_docs)]

pub mod config;
pub mod handlers;

use config::ServerConfig;
use handlers::{create_router, AppState};
use idhaa_extractor::Generator;
use idhaa_gatekeeper::Gatekeeper;
use idhaa_llm::GatewayProvider;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Completion provider setup error
    #[error("Provider error: {0}")]
    Provider(String),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the broadcast HTTP server
///
/// Loads configuration, initializes the gateway provider and generator,
/// and starts the axum server.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Idhaa server");
    info!("Bind address: {}", config.bind_addr());
    info!("Gateway endpoint: {}", config.gateway.endpoint);
    info!("Model: {}", config.gateway.model);

    // Create the completion provider
    let provider = GatewayProvider::new(
        &config.gateway.endpoint,
        &config.gateway.model,
        &config.gateway.api_key,
    )
    .map_err(|e| ServerError::Provider(e.to_string()))?;

    // Create the generator
    let generator = Generator::new(
        provider,
        Gatekeeper::default_config(),
        config.generator.clone(),
    )
    .with_model_name(&config.gateway.model);

    // Create application state
    let state = AppState {
        generator: Arc::new(generator),
    };

    // Create router
    let app = create_router(state);

    // Bind and serve
    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}
