//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handler outcomes
//!     → metrics.rs (counters, histograms)
//!     → Prometheus scrape endpoint
//!
//! log events
//!     → tracing subscriber initialized in main.rs
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log lines for correlation
//! - Metrics are cheap (atomic increments)

pub mod metrics;
