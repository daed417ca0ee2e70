use relay_service::config::Config;
use relay_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    service_core::observability::init_tracing(
        &std::env::var("RUST_LOG").unwrap_or_else(|_| "info,relay_service=debug".into()),
    );

    let config = Config::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
