use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use portfolio_contact::{
    application::builder::ApplicationBuilder, create_router, telemetry::init_tracing, Config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    init_tracing(config.log_format);

    info!("Starting contact service");

    config.validate()?;
    info!("Configuration loaded and validated");

    let state = ApplicationBuilder::new(config.clone())
        .with_database()
        .await?
        .build()?;

    let app = create_router(state);

    info!("Listening on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
