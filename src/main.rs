//! Planilla Engine HTTP server.
//!
//! Environment:
//! - `PLANILLA_BIND_ADDRESS` (default `127.0.0.1:3000`)
//! - `PLANILLA_CONFIG_DIR` (default `./config/planilla`)
//! - `RUST_LOG` for log filtering

use std::env;
use std::error::Error;

use planilla_engine::api::{AppState, create_router};
use planilla_engine::config::ConfigLoader;
use planilla_engine::error::EngineError;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_CONFIG_DIR: &str = "./config/planilla";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_line_number(true)
        .init();

    let bind_address =
        env::var("PLANILLA_BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    let config_dir =
        env::var("PLANILLA_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());

    let state = match ConfigLoader::load(&config_dir) {
        Ok(config) => {
            info!(config_dir = %config_dir, "Loaded session contribution rates");
            AppState::new(config)
        }
        Err(EngineError::ConfigNotFound { path }) => {
            warn!(path = %path, "No session rates; requests must supply `rates`");
            AppState::without_session_rates()
        }
        Err(err) => return Err(err.into()),
    };

    let listener = tokio::net::TcpListener::bind(bind_address.as_str()).await?;
    info!(address = %bind_address, "Planilla engine listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
