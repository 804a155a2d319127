use tokio::signal;
use tracing_subscriber::EnvFilter;

use tradebook::api::routes::{AppState, app_router};
use tradebook::config::Config;
use tradebook::persistence::create_pool_and_migrate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tradebook=info,tower_http=info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    tracing::info!(database_url = %config.database_url, "connecting to database");
    let db = create_pool_and_migrate(&config.database_url, config.max_connections).await?;

    let app_state = AppState {
        db: db.clone(),
        request_timeout: config.request_timeout,
    };

    let app = app_router(app_state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
