use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use next_review::{router, AppState, Config, FastrandSource, GitHubClient, Orchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("next_review=info".parse()?))
        .init();

    // Exits with a usage error if a required credential or identifier is missing.
    let config = Config::parse();

    info!(
        owner = %config.owner,
        repo = %config.repo,
        branch = %config.branch,
        "Starting next-review server"
    );

    let client = GitHubClient::new(&config);
    let orchestrator = Orchestrator::new(client, &config, FastrandSource);
    let state = Arc::new(AppState { orchestrator });
    let app = router(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    info!(port = config.port, "Server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
