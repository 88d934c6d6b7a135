use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use users_server::config::Config;
use users_server::repository::{connect_pool, PgUserRepository};
use users_server::routes::create_routes;
use users_server::state::AppState;
use users_server::utils::StartupError;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("users_server=debug,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run(Config::from_env()).await {
        tracing::error!(error = ?e, "{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), StartupError> {
    tracing::info!(
        "Connecting to database at {}",
        config.redacted_database_url()
    );
    let pool = connect_pool(&config).await?;

    tracing::info!("Successfully connected to database");

    let app = create_routes(AppState::new(PgUserRepository::new(pool.clone())));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    pool.close().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
