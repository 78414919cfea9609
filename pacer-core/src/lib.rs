// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared building blocks for the pacer crates: the error type, the
//! runtime-agnostic [`CancellationToken`] used by scheduler handles, delay
//! validation, and the feature-gated logging shim (`trace!`, `debug!`, `warn!`).

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod cancellation_token;
pub mod delay;
pub mod error;
pub mod logging;

pub use self::cancellation_token::CancellationToken;
pub use self::delay::{DEFAULT_MINIMUM_TIME_SPACE, DEFAULT_WAIT_TIME};
pub use self::error::{PacerError, Result};
