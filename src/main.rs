use checkpay_cart::cart::AppState;
use checkpay_cart::config::load_app_config;
use checkpay_cart::router::create_app_router;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Reference data every session is seeded from
    let catalog = config.load_catalog()?;
    let source = config
        .catalog_path
        .as_ref()
        .map_or_else(|| "built-in demo".to_string(), |p| p.display().to_string());
    tracing::info!(
        items = catalog.items.len(),
        saved_addresses = catalog.saved_addresses.len(),
        shipping_methods = catalog.shipping_rates.as_slice().len(),
        %source,
        "catalog loaded"
    );

    let state = Arc::new(AppState::new(catalog));
    let app = create_app_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
