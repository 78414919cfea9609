// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Conversion of signed millisecond delays into [`Duration`]s.
//!
//! Hosts that receive delays as plain numbers (configuration values, FFI,
//! scripting bridges) go through [`millis`] so a negative value is rejected up
//! front instead of being silently reinterpreted.

use crate::{PacerError, Result};
use core::time::Duration;

/// Default quiet period of a debouncer and default trailing delay.
pub const DEFAULT_WAIT_TIME: Duration = Duration::from_millis(150);

/// Default minimum spacing between two throttled executions.
pub const DEFAULT_MINIMUM_TIME_SPACE: Duration = Duration::from_millis(150);

/// Converts a signed millisecond count into a [`Duration`].
///
/// # Errors
///
/// Returns [`PacerError::InvalidArgument`] when `ms` is negative.
///
/// # Examples
///
/// ```
/// use pacer_core::delay::millis;
/// use std::time::Duration;
///
/// assert_eq!(millis(150).unwrap(), Duration::from_millis(150));
/// assert!(millis(-1).is_err());
/// ```
pub fn millis(ms: i64) -> Result<Duration> {
    u64::try_from(ms)
        .map(Duration::from_millis)
        .map_err(|_| PacerError::invalid_argument(format!("delay must not be negative, got {ms} ms")))
}

/// Same as [`millis`], naming the offending parameter in the error.
///
/// # Errors
///
/// Returns [`PacerError::InvalidArgument`] when `ms` is negative.
pub fn named_millis(name: &str, ms: i64) -> Result<Duration> {
    millis(ms).map_err(|_| {
        PacerError::invalid_argument(format!("{name} must not be negative, got {ms} ms"))
    })
}
