// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the pacer rate-control primitives
//!
//! The timing wrappers themselves never fail at call time. Errors only arise
//! when building a wrapper from unchecked input (a negative delay) or when a
//! user-supplied step of a sequential chain fails.
//!
//! # Examples
//!
//! ```
//! use pacer_core::{PacerError, Result};
//!
//! fn validate(ms: i64) -> Result<u64> {
//!     if ms < 0 {
//!         return Err(PacerError::invalid_argument("delay must not be negative"));
//!     }
//!     Ok(ms as u64)
//! }
//!
//! assert!(validate(-1).is_err());
//! ```

/// Root error type for all pacer operations
#[derive(Debug, thiserror::Error)]
pub enum PacerError {
    /// A constructor argument was rejected
    ///
    /// Raised when a delay expressed as signed milliseconds is negative.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Description of the rejected argument
        context: String,
    },

    /// A step of a sequential chain failed
    ///
    /// The chain stops at the first failing step; `index` is its zero-based
    /// position in the chain.
    #[error("Step {index} failed: {source}")]
    StepFailed {
        /// Position of the failing step
        index: usize,
        /// The error returned by the step
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl PacerError {
    /// Create an invalid argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }

    /// Create a step failure for the step at `index`
    pub fn step_failed(index: usize, error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::StepFailed {
            index,
            source: Box::new(error),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Index of the failing step, if this error came from a chain
    #[must_use]
    pub const fn step_index(&self) -> Option<usize> {
        match self {
            Self::StepFailed { index, .. } => Some(*index),
            _ => None,
        }
    }
}

/// Specialized Result type for pacer operations
pub type Result<T> = std::result::Result<T, PacerError>;
