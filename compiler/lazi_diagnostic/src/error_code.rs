//! Error codes for all compiler diagnostics.
//!
//! Format: E#### where the first digit names the phase:
//! - E1xxx: Parser errors
//! - E6xxx: Evaluation errors
//!
//! Warnings use W#### with the same phase digit.

use std::fmt;

/// Error codes for all compiler diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,

    // Evaluation Errors (E6xxx)
    /// Division by zero
    E6001,

    // Warnings
    /// Input truncated at a NUL byte
    W1001,
}

impl ErrorCode {
    /// The code as written in diagnostics, e.g. `"E1001"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// One-line description of the error class.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E6001 => "division by zero",
            ErrorCode::W1001 => "input ends at NUL byte",
        }
    }

    /// Returns `true` for syntax errors (the E1xxx range).
    pub fn is_parser_error(self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
