use anyhow::Context;
use tracing::error;
use tracing_subscriber::EnvFilter;
use visabot::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config =
        BotConfig::from_executable().context("failed to locate the executable directory")?;

    visabot::daemon::run(config, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    })
    .await?;

    Ok(())
}
