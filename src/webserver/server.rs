/// Axum webserver implementation
///
/// Server lifecycle management including startup, shutdown, and graceful termination
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::{
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// This function blocks until the server is shut down
pub async fn start_server(state: AppState) -> Result<(), String> {
    let bind_address = state.config.webserver.bind_address();

    logger::debug(
        LogTag::Webserver,
        &format!("Starting webserver on {}", bind_address),
    );

    let addr = bind_address.as_str();
    let port = state.config.webserver.port;

    let listener = TcpListener::bind(addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => {
            format!(
                "Failed to bind to {}: Address already in use\n\
                 \n\
                 Another process is listening on this port. Stop it or pass --port.",
                addr
            )
        }
        std::io::ErrorKind::PermissionDenied => {
            format!(
                "Failed to bind to {}: Permission denied\n\
                 \n\
                 Port {} requires elevated privileges on this system.\n\
                 Consider using a port above 1024 or running with appropriate permissions.",
                addr, port
            )
        }
        _ => format!("Failed to bind to {}: {}", addr, e),
    })?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to read bound address: {}", e))?;

    let app = build_app(Arc::new(state));

    logger::info(
        LogTag::Webserver,
        &format!("Listening on http://{}", local_addr),
    );

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        logger::debug(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    logger::info(LogTag::Webserver, "Webserver stopped gracefully");

    Ok(())
}

/// Trigger webserver shutdown
///
/// Safe to call before the server starts waiting; the permit is stored.
pub fn shutdown() {
    logger::debug(LogTag::Webserver, "Triggering webserver shutdown...");
    SHUTDOWN_NOTIFY.notify_one();
}

/// Build the Axum application with all routes and middleware
pub fn build_app(state: Arc<AppState>) -> Router {
    let cors_enabled = state.config.webserver.cors_enabled;

    let app = routes::create_router(state).layer(CompressionLayer::new());

    if cors_enabled {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}
