use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};
use water_log::{read_log, router, storage::display_name, AppState, Config, Dashboard};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let mut dashboard = Dashboard::new(config.initial_interval);

    if let Some(path) = &config.log_path {
        match read_log(path).await {
            Ok(log) => {
                info!(path = %path.display(), days = log.series.len(), "preloaded log");
                dashboard.replace(log, display_name(path));
            }
            Err(err) => error!("failed to preload log: {err}"),
        }
    }

    let app = router(AppState::new(dashboard));
    let addr = config.addr();

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
