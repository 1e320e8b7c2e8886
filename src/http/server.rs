//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create Axum Router with the rewrite handler
//! - Wire up middleware (tracing, timeout, request ID, CORS)
//! - Bind server to listener with graceful shutdown
//! - Fetch upstream CSS and run it through the rewrite pipeline
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use url::form_urlencoded;

use crate::config::{ProxyConfig, ResponseConfig};
use crate::css::{generate_css, parse_css, transform, FamilySpec};
use crate::error::ProxyError;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::http::upstream::FontApi;
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<FontApi>,
    pub response: ResponseConfig,
}

/// HTTP server for the font CSS proxy.
pub struct HttpServer {
    router: Router,
    config: ProxyConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let api = Arc::new(FontApi::new(&config.upstream, &config.timeouts));
        let state = AppState {
            api,
            response: config.response.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ProxyConfig, state: AppState) -> Router {
        // The upstream ignores the request path, so serve any path the
        // client picked for the proxy.
        let router = Router::new()
            .route("/{*path}", any(css_handler))
            .route("/", any(css_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http());

        if config.response.cors_allow_all {
            router.layer(SetResponseHeaderLayer::if_not_present(
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                HeaderValue::from_static("*"),
            ))
        } else {
            router
        }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.config.upstream.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ProxyConfig {
        &self.config
    }
}

/// Main rewrite handler.
///
/// Parses the requested family specs, fetches the upstream CSS once, and
/// returns the transformed document. Non-success upstream responses pass
/// through verbatim without invoking the rewrite pipeline.
async fn css_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().to_string();

    let query = request.uri().query().unwrap_or("").to_string();
    let families: Vec<String> = form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == "family")
        .map(|(_, value)| value.into_owned())
        .collect();

    if families.is_empty() {
        tracing::warn!(request_id = %request_id, "Request without family parameter");
        metrics::record_request(&method, 400, start_time);
        return ProxyError::MissingParameter.into_response();
    }

    let specs: Vec<FamilySpec> = families.iter().map(|f| FamilySpec::parse(f)).collect();
    let url = state.api.css_url(&query, &specs);

    tracing::debug!(
        request_id = %request_id,
        families = specs.len(),
        upstream_url = %url,
        "Fetching upstream CSS"
    );

    let upstream = match state
        .api
        .fetch_css(url, request.headers().get(header::USER_AGENT))
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream request failed");
            metrics::record_request(&method, 502, start_time);
            return e.into_response();
        }
    };

    let status = upstream.status();
    if status != StatusCode::OK {
        tracing::warn!(
            request_id = %request_id,
            status = %status,
            "Upstream returned non-success, passing through"
        );
        return pass_through(upstream, &method, start_time).await;
    }

    let body = match upstream.text().await {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to read upstream body");
            metrics::record_request(&method, 502, start_time);
            return ProxyError::from(e).into_response();
        }
    };

    let faces = match parse_css(&body) {
        Ok(faces) => faces,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream CSS did not parse");
            metrics::record_request(&method, 502, start_time);
            return e.into_response();
        }
    };

    let face_count = faces.len();
    let css = generate_css(&transform(faces, &specs));

    tracing::debug!(
        request_id = %request_id,
        faces = face_count,
        bytes = css.len(),
        "Rewrote upstream CSS"
    );
    metrics::record_request(&method, 200, start_time);

    let mut response = (StatusCode::OK, css).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/css; charset=utf-8"),
    );
    if let Ok(value) = HeaderValue::from_str(&state.response.cache_control) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    response
}

/// Relay a non-success upstream response to the client verbatim.
async fn pass_through(upstream: reqwest::Response, method: &str, start_time: Instant) -> Response {
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let body = match upstream.text().await {
        Ok(body) => body,
        Err(e) => {
            metrics::record_request(method, 502, start_time);
            return ProxyError::from(e).into_response();
        }
    };
    metrics::record_request(method, status.as_u16(), start_time);

    let mut response = (status, body).into_response();
    if let Some(value) = content_type {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
