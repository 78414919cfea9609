// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Debounce and throttle wrappers for plain actions, on any async runtime.
//!
//! Each wrapper owns an action `Fn(T)` and decides, per call, whether the
//! action runs now, later, or not at all. Wrappers work with any runtime
//! implementing [`Runtime`](pacer_runtime::runtime::Runtime).
//!
//! # Overview
//!
//! - **[`Debounced`]** - trailing edge: runs once calls stop for `wait_time`
//! - **[`Throttled`]** - leading edge: runs at most once per `minimum_time_space`,
//!   dropping everything in between
//! - **[`ThrottledWithLast`]** - leading edge plus one trailing call with the
//!   freshest arguments
//!
//! Extension traits ([`DebounceExt`], [`ThrottleExt`], [`ThrottleWithLastExt`])
//! wrap a closure directly on the default runtime.
//!
//! # Runtime Support
//!
//! Enable runtime-specific features in your `Cargo.toml`:
//! - `runtime-tokio` (default) - Tokio clock and scheduler (`TokioTimer`)
//! - `runtime-smol` - smol clock and scheduler (`SmolTimer`)
//!
//! With both enabled, the free constructors use Tokio.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! use pacer_time::prelude::*;
//! use std::time::Duration;
//!
//! # #[cfg(feature = "runtime-tokio")]
//! # async fn example() {
//! let search = (|query: String| println!("searching {query}")).debounce(Duration::from_millis(100));
//! let scroll = (|offset: u32| println!("offset {offset}")).throttle(Duration::from_millis(50));
//!
//! search.call("rust".to_string());
//! scroll.call(120);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

mod debounce;
mod pending;
mod throttle;
mod throttle_with_last;

pub mod prelude;

pub use debounce::Debounced;
pub use throttle::Throttled;
pub use throttle_with_last::ThrottledWithLast;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use debounce::{debounced, debounced_millis, debounced_with, DebounceExt};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use throttle::{throttled, throttled_millis, throttled_with, ThrottleExt};
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use throttle_with_last::{
    throttled_with_last, throttled_with_last_millis, throttled_with_last_with,
    ThrottleWithLastExt,
};

pub use pacer_core::{PacerError, Result, DEFAULT_MINIMUM_TIME_SPACE, DEFAULT_WAIT_TIME};
pub use pacer_runtime::{runtime, scheduler, timer};

#[cfg(feature = "runtime-tokio")]
pub use pacer_runtime::impls::tokio::{TokioRuntime, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use pacer_runtime::impls::smol::{SmolRuntime, SmolTimer};

/// Runtime used by the free constructors and extension traits.
#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = TokioRuntime;

/// Runtime used by the free constructors and extension traits.
#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = SmolRuntime;
