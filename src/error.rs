//! Proxy error definitions.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while rewriting a font CSS response.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// A required declaration was missing from a matched `@font-face`
    /// block. The upstream contract is broken, so the whole request fails
    /// rather than returning partial CSS.
    #[error("malformed upstream CSS: no {field} declaration in @font-face block")]
    MalformedCss { field: &'static str },

    /// The request carried no `family` query parameters.
    #[error("missing font family")]
    MissingParameter,

    /// The upstream request itself failed (connect, timeout, body read).
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Result type for proxy operations.
pub type ProxyResult<T> = Result<T, ProxyError>;

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ProxyError::MissingParameter => (
                StatusCode::BAD_REQUEST,
                "400 Bad Request: Missing font family".to_string(),
            ),
            ProxyError::MalformedCss { .. } => {
                (StatusCode::BAD_GATEWAY, format!("502 Bad Gateway: {self}"))
            }
            ProxyError::Upstream(_) => (
                StatusCode::BAD_GATEWAY,
                "502 Bad Gateway: upstream request failed".to_string(),
            ),
        };
        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
