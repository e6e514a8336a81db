//! Logging utilities.
//!
//! Centralizes logger initialization on top of the `log` facade with an
//! `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
