//! Diagnostic system for error reporting.
//!
//! Every reported problem carries:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary span saying where
//! - optional secondary labels and notes for context
//!
//! Library crates build [`Diagnostic`] values; only the outermost caller
//! decides whether to print them and whether to exit.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
