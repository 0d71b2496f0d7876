//! # merkliste-observability
//!
//! Observability-Crate fuer Merkliste:
//! - Structured Logging (Text oder JSON) via tracing-subscriber
//! - Request-Timing Middleware
//! - Health-Status fuer `GET /health`

pub mod health;
pub mod logging;
pub mod middleware;

pub use health::{HealthResponse, HealthStatus};
pub use logging::logging_initialisieren;
pub use middleware::timing_middleware;
