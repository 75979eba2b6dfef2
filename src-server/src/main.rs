use anyhow::Context;
use livrocaixa_server::{config::Config, logging, main_lib};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    logging::init(config.log_format);

    let state = main_lib::build_state(&config).map_err(|e| {
        tracing::error!("{:#}", e);
        e
    })?;
    let app = main_lib::app(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    tracing::info!("Listening on http://{}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
