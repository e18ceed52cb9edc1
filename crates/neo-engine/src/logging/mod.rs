//! Logging utilities.
//!
//! Centralizes logger initialization for binaries. Libraries in this
//! workspace log through the standard `log` facade only.

mod init;

pub use init::{init_logging, LoggingConfig};
