// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Pacer
//!
//! Rate control for plain actions: wrap a closure once, call the wrapper as
//! often as events arrive, and let it decide when the closure actually runs.
//!
//! | Wrapper | Runs | Drops |
//! |---------|------|-------|
//! | [`Debounced`] | once, `wait_time` after the last call | every call superseded by a newer one |
//! | [`Throttled`] | immediately, at most once per `minimum_time_space` | calls inside the window |
//! | [`ThrottledWithLast`] | immediately, plus one trailing call | every suppressed call but the last |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pacer::prelude::*;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let search = (|query: String| println!("searching {query}"))
//!     .debounce(Duration::from_millis(150));
//!
//! for query in ["r", "ru", "rus", "rust"] {
//!     search.call(query.to_string());
//! }
//!
//! // Runs once, with "rust"
//! tokio::time::sleep(Duration::from_millis(200)).await;
//! # }
//! ```
//!
//! ## Runtimes
//!
//! The wrappers never block: delays are handed to a [`Scheduler`]. Tokio is
//! the default (`runtime-tokio`); enable `runtime-smol` for smol. Any type
//! implementing [`Runtime`] can be plugged in with the `with_scheduler`
//! constructors, which is how tests drive wrappers on virtual time.
//!
//! ## Crates
//!
//! - `pacer-core` - errors, cancellation token, logging shim
//! - `pacer-runtime` - `Timer`, `Scheduler` and `Runtime` abstractions
//! - `pacer-time` - the wrappers
//! - `pacer-exec` - sequential chaining, timing and memoization helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use pacer_core::{CancellationToken, PacerError, Result, DEFAULT_MINIMUM_TIME_SPACE, DEFAULT_WAIT_TIME};
pub use pacer_exec::{boxed_step, chain, measure, measure_sync, run_sequentially, BoxedStep, Memoized, SequenceExt};
pub use pacer_runtime::runtime::Runtime;
pub use pacer_runtime::scheduler::Scheduler;
pub use pacer_runtime::timer::Timer;
pub use pacer_time::{Debounced, Throttled, ThrottledWithLast};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use pacer_time::{
    debounced, debounced_millis, debounced_with, throttled, throttled_millis, throttled_with,
    throttled_with_last, throttled_with_last_millis, throttled_with_last_with, DebounceExt,
    DefaultRuntime, ThrottleExt, ThrottleWithLastExt,
};

#[cfg(feature = "runtime-tokio")]
pub use pacer_time::{TokioRuntime, TokioTimer};

#[cfg(feature = "runtime-smol")]
pub use pacer_time::{SmolRuntime, SmolTimer};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{Debounced, Throttled, ThrottledWithLast};
    pub use crate::{Runtime, Scheduler, Timer};
    pub use pacer_exec::SequenceExt;

    #[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
    pub use crate::{DebounceExt, ThrottleExt, ThrottleWithLastExt};
}
