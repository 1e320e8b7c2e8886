//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! client request
//!     → server.rs (Axum setup, family parameter extraction)
//!     → upstream.rs (build upstream URL, single fetch)
//!     → css subsystem (parse, transform, generate)
//!     → server.rs (headers, response)
//! ```

pub mod request;
pub mod server;
pub mod upstream;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::HttpServer;
pub use upstream::FontApi;
