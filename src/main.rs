use std::env;

use anyhow::Context;
use ni_engine::api::{AppState, run_server};
use ni_engine::config::ConfigLoader;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ni_engine=info".into()),
        )
        .init();

    let config_dir = env::var("NI_CONFIG_DIR").unwrap_or_else(|_| "./config/ni".to_string());
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse()
        .context("PORT must be a port number")?;

    let config = ConfigLoader::load(&config_dir)
        .with_context(|| format!("failed to load NI configuration from {}", config_dir))?;
    info!(
        scheme = %config.scheme().name,
        tax_years = config.rates().len(),
        "Loaded NI configuration"
    );

    run_server(AppState::new(config), &host, port).await
}
