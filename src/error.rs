// Copyright 2025-2026 Cornell University
// released under MIT license
// author: Kevin Laeufer <laeufer@cornell.edu>

use thiserror::Error;

/// Errors raised by [`crate::WrappingInt64`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WrapError {
    #[error("invalid exponent {0}: must be a non-negative integer no larger than {max}", max = u32::MAX)]
    InvalidExponent(i64),
    #[error("not a decimal integer: {0:?}")]
    Parse(String),
}

/// Errors raised by the polynomial evaluators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("cannot evaluate a polynomial without coefficients")]
    EmptyCoefficients,
    #[error(transparent)]
    Wrap(#[from] WrapError),
}

/// Errors raised while reading or writing an instance file.
#[derive(Debug, Error)]
pub enum InstanceError {
    #[error("malformed instance file, line {line}: {message}")]
    Format { line: usize, message: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InstanceError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}
