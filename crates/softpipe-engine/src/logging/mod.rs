//! Logger setup on top of the `log` facade.
//!
//! The engine itself only emits through `log` macros; binaries call
//! [`init_logging`] to route them through `env_logger`.

mod init;

pub use init::{init_logging, LoggingConfig};
