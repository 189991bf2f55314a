use std::net::SocketAddr;

use anyhow::Context;

use taskboard::{
    auth::bootstrap::init_providers, config::AppConfig, db::connection, logging::init_tracing,
    routes::app, services::ServiceContext, state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging);

    let db = connection::connect(&cfg.database).await?;
    let services = ServiceContext::new(&db);
    let providers = init_providers(&cfg.auth, &services).await?;

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .context("invalid host/port")?;
    let state = AppState::new(cfg, db, providers);

    tracing::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;
    Ok(())
}
