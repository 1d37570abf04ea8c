use finance_mock_api::{create_router_with, initialize_backend, ServerConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::default();
    let app_state = initialize_backend()?;
    let app = create_router_with(app_state, &config)?;

    info!("Starting mock API on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}, serving {}", config.bind_addr, config.static_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
