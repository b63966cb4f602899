//! Server Implementation
//!
//! Router assembly and the HTTP server lifecycle

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router, middleware};
use http::{HeaderName, HeaderValue, Uri};
use tokio::sync::Notify;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};
use crate::utils::{AppError, ErrorCode};

const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Request ID generator (UUID v4)
#[derive(Clone, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// HTTP access log
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());

    response
}

async fn route_not_found(uri: Uri) -> AppError {
    AppError::with_message(ErrorCode::NotFound, format!("No route for {}", uri.path()))
}

async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::new(ErrorCode::TimeoutError)
    } else {
        AppError::internal(format!("Unhandled middleware error: {err}"))
    }
}

/// All routes, no middleware, no state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(api::health::router())
        .merge(api::customers::router())
        .merge(api::tables::router())
        .merge(api::orders::router())
        .merge(api::front_workers::router())
        .merge(api::back_workers::router())
        .merge(api::foods::router())
        .fallback(route_not_found)
}

/// Fully configured application: routes, state and middleware.
///
/// Used by the HTTP server and by oneshot requests in tests.
pub fn build_app(state: ServerState) -> Router {
    let request_timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_router()
        .with_state(state)
        // Timeout - expired requests answer 408 in the error envelope
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(request_timeout),
        )
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        // Request ID set first so the trace span and the response carry it
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, XRequestId))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server with existing state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl-C, then drain in-flight requests for at most
    /// `shutdown_timeout_ms`
    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let addr = format!("0.0.0.0:{}", self.config.http_port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        tracing::info!("Bistro server listening on {addr}");

        let stop = Arc::new(Notify::new());
        let serve = axum::serve(listener, build_app(state)).with_graceful_shutdown({
            let stop = stop.clone();
            async move { stop.notified().await }
        });
        let mut handle = tokio::spawn(serve.into_future());

        tokio::select! {
            joined = &mut handle => return flatten(joined),
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Shutdown signal received, draining connections...");
            }
        }

        // notify_one stores a permit if the shutdown future is not polled yet
        stop.notify_one();

        let budget = Duration::from_millis(self.config.shutdown_timeout_ms);
        match tokio::time::timeout(budget, handle).await {
            Ok(joined) => flatten(joined)?,
            Err(_) => tracing::warn!(
                timeout_ms = self.config.shutdown_timeout_ms,
                "Graceful shutdown timed out, dropping remaining connections"
            ),
        }

        tracing::info!("Server stopped");
        Ok(())
    }
}

fn flatten(
    joined: std::result::Result<std::io::Result<()>, tokio::task::JoinError>,
) -> Result<()> {
    match joined {
        Ok(result) => Ok(result?),
        Err(e) => Err(ServerError::Io(std::io::Error::other(e))),
    }
}
