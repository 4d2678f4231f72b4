use clap::Parser;
use reservation_proxy::{ProxyConfig, ProxyError};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ProxyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::parse();
    tracing::info!(
        bind = %config.bind_addr,
        duration_secs = config.duration_secs,
        "starting reservation proxy"
    );

    let server = config.builder().build_in_memory().await?;
    server
        .run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await
}
