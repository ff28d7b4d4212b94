//! lazi compiler driver.
//!
//! Owns the pieces whose lifetime spans more than one expression: the
//! [`Session`] with its interner, logging setup, and the command
//! implementations behind the `lazi` binary.

pub mod commands;
mod session;

pub use session::Session;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=lazi_parse=debug`
/// or `RUST_LOG=lazi_lexer=trace`; without `RUST_LOG` nothing is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
