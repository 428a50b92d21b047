// ABOUTME: HTTP server bootstrap
// ABOUTME: Opens the database, layers tracing and CORS, serves until Ctrl-C or SIGTERM

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use bikelinks_storage::DbState;
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::api;
use crate::config::Config;

/// Build the application with its middleware stack
pub fn build_app(db: DbState, cors_origin: Option<&str>) -> anyhow::Result<Router> {
    let mut app = api::create_router(db).layer(TraceLayer::new_for_http());

    if let Some(origin) = cors_origin {
        let origin = origin
            .parse::<HeaderValue>()
            .with_context(|| format!("Invalid CORS origin: {}", origin))?;

        let cors = CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
            ])
            .allow_headers(Any);

        app = app.layer(cors);
    }

    Ok(app)
}

pub async fn open_database(config: &Config) -> anyhow::Result<DbState> {
    DbState::init_with_path(&config.database_path, config.max_connections)
        .await
        .with_context(|| {
            format!(
                "Failed to open database at {}",
                config.database_path.display()
            )
        })
}

pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let db = open_database(config).await?;
    let app = build_app(db.clone(), config.cors_origin.as_deref())?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Bikelinks listening on http://{}", addr);
    if let Some(origin) = &config.cors_origin {
        info!("CORS enabled for origin: {}", origin);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
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

    info!("Shutdown signal received");
}
