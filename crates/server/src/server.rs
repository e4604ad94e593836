// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP server implementation.
//!
//! Builds the router, logs every request, and serves until the shutdown
//! future resolves.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, put};
use axum::Router;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/issues",
            get(routes::list_issues)
                .post(routes::create_issue)
                .fallback(routes::route_not_found),
        )
        .route(
            "/issues/:business_id",
            put(routes::resolve_issue).fallback(routes::route_not_found),
        )
        .route(
            "/charts/severity",
            get(routes::severity_chart).fallback(routes::route_not_found),
        )
        .route(
            "/charts/status",
            get(routes::status_chart).fallback(routes::route_not_found),
        )
        .route(
            "/charts/timeline",
            get(routes::timeline_chart).fallback(routes::route_not_found),
        )
        .route(
            "/charts/assignee",
            get(routes::assignee_chart).fallback(routes::route_not_found),
        );

    Router::new()
        .nest("/api", api)
        .fallback(routes::route_not_found)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Run the HTTP server on the given address until `shutdown` resolves.
pub async fn run<F>(
    addr: SocketAddr,
    state: AppState,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", listener.local_addr()?);

    serve(listener, state, shutdown).await?;
    Ok(())
}

/// Serve requests from an already bound listener.
pub(crate) async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for Ctrl-C: {}", e);
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
                warn!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    info!("Shutdown signal received, draining connections");
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} {} {}ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}
