use devdine::config::Config;
use devdine::http::{router, AppState};
use devdine::lifecycle::{setup_tracing, OrderSystem};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    setup_tracing();

    let config = Config::load()?;
    let system = OrderSystem::new(&config);
    let app = router(AppState::new(&system, &config));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("DevDine listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
