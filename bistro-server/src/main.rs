use anyhow::Context;
use bistro_server::{Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env, then configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Work dir and logging
    let _log_guard = setup_environment(&config).context("failed to prepare work directory")?;

    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Bistro server starting"
    );

    // 3. Database
    let state = ServerState::initialize(&config)
        .await
        .context("failed to initialize server state")?;

    // 4. HTTP
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
