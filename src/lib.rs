//! Rewriting proxy for Google Fonts `@font-face` CSS.

// Core subsystems
pub mod config;
pub mod css;
pub mod error;
pub mod http;

// Cross-cutting concerns
pub mod observability;

pub use config::schema::ProxyConfig;
pub use error::{ProxyError, ProxyResult};
pub use http::HttpServer;
