use directory_server::{Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment: .env, config, work dir, logging
    let (config, _log_guard) = setup_environment()?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Directory server starting..."
    );

    // 2. Open the store and build the state
    let state = ServerState::initialize(&config).await?;

    // 3. Serve until ctrl-c
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
