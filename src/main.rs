use anyhow::Result;
use blogfront::{app_state::AppState, config::Config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    info!(cms_origin = %config.cms_origin(), bind_addr = %config.bind_addr(), "starting blog front-end");

    let bind_addr = config.bind_addr().to_string();
    let state = AppState::new(config);
    let app = server::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
