use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use appscout::provider::ItunesClient;
use appscout::{AppState, Config, build_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("load configuration")?;
    let http_client = build_http_client()?;
    let app_store = Arc::new(ItunesClient::new(http_client, config.endpoints.clone()));
    let state = AppState::new(app_store);

    let app = build_router(state);

    let addr = config.addr();
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {}", addr))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

fn build_http_client() -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent("appscout/0.1")
        .build()
        .context("build http client")?;

    Ok(client)
}
