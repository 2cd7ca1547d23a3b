//! Logging utilities.
//!
//! The engine itself only speaks the `log` facade. This module offers an
//! `env_logger` setup for binaries and demos; library users are free to
//! install any other backend.

mod init;

pub use init::{LoggingConfig, init_logging};
