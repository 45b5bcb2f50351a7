use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use getdev_notification::SmtpMailer;
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer, trace::TraceLayer};

use crate::routes::AppState;

/// Router with the full response middleware stack.
pub fn app(state: AppState) -> Router {
    let debug = state.config.server.debug;

    let app = crate::routes::router(state).layer(axum::middleware::from_fn(
        crate::middleware::cache_control_middleware,
    ));

    let app = if debug {
        app
    } else {
        app.layer(axum::middleware::map_response(
            crate::middleware::minify_html_middleware,
        ))
    };

    app.layer(CatchPanicLayer::custom(crate::error::panic_response))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(
    config: crate::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting getdev server...");

    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    if config.server.debug {
        tracing::warn!("Debug mode enabled, do not use in production");
    }

    let mailer = SmtpMailer::new(&config.mail)?;
    let state = AppState::new(config, Arc::new(mailer))?;

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
