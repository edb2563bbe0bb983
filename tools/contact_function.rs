//! Serverless entry point: one JSON event on stdin, one JSON response on stdout.

use anyhow::Context;
use clap::Parser;
use std::io::Read;

use portfolio_contact::{
    api::serverless::{handle_event, FunctionEvent},
    application::builder::ApplicationBuilder,
    telemetry::init_tracing,
    Config,
};

#[derive(Parser)]
struct Cli {
    /// Skip migrations regardless of RUN_MIGRATIONS
    #[arg(long)]
    no_migrations: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if cli.no_migrations {
        config.run_migrations = false;
    }
    init_tracing(config.log_format);
    config.validate().map_err(anyhow::Error::msg)?;

    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read event from stdin")?;
    let event: FunctionEvent = serde_json::from_str(&raw).context("invalid function event")?;

    let builder = ApplicationBuilder::new(config)
        .with_database()
        .await
        .map_err(|e| anyhow::anyhow!("database setup failed: {}", e))?;
    let api = builder
        .build_api()
        .map_err(|e| anyhow::anyhow!("application setup failed: {}", e))?;

    let response = handle_event(&api, event).await;
    println!("{}", serde_json::to_string(&response)?);

    Ok(())
}
