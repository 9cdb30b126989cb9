//! Shared utilities for the sentiment workspace
//!
//! Logging setup and process-level settings read from the environment.

pub mod config;
pub mod logging;

pub use config::{LogFormat, Settings};
pub use logging::{init_tracing, init_tracing_with};
