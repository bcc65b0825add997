//! Logging utilities.
//!
//! Every crate logs through the `log` facade; hosts install the backend once
//! with [`init_logging`].

mod init;

pub use init::{init_logging, LoggingConfig};
