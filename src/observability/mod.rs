//! Observability: structured logging over `tracing`.

pub mod logging;

pub use logging::{init_logging, LogFormat};
