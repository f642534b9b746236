// lowline-core - Error types for Lowline operations
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for Lowline operations.

use std::fmt;

/// Result type for Lowline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while applying an operation.
#[derive(Debug, Clone)]
pub enum Error {
    /// Type error - wrong shape of value for an operation
    TypeError {
        expected: &'static str,
        got: &'static str,
        context: Option<String>,
    },
    /// Attempted to call something that isn't callable
    NotCallable(String),
    /// General error raised by a caller-supplied callback
    Message(String),
    /// Internal error - invariant violation
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TypeError {
                expected,
                got,
                context,
            } => {
                if let Some(ctx) = context {
                    write!(f, "{}: expected {}, got {}", ctx, expected, got)
                } else {
                    write!(f, "Type error: expected {}, got {}", expected, got)
                }
            }
            Error::NotCallable(val) => {
                write!(f, "Cannot call value: {}", val)
            }
            Error::Message(msg) => {
                write!(f, "{}", msg)
            }
            Error::Internal(msg) => {
                write!(f, "Internal error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Create a type error.
    pub fn type_error(expected: &'static str, got: &'static str) -> Self {
        Error::TypeError {
            expected,
            got,
            context: None,
        }
    }

    /// Create a type error with context.
    pub fn type_error_in(
        context: impl Into<String>,
        expected: &'static str,
        got: &'static str,
    ) -> Self {
        Error::TypeError {
            expected,
            got,
            context: Some(context.into()),
        }
    }
}
