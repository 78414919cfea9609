// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude re-exporting the wrappers and their extension traits.
//!
//! ```ignore
//! use pacer_time::prelude::*;
//!
//! let save = save_draft.throttle_with_last(Duration::from_millis(500), Duration::from_millis(500));
//! ```

pub use crate::{Debounced, Throttled, ThrottledWithLast};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::{DebounceExt, ThrottleExt, ThrottleWithLastExt};

pub use pacer_runtime::scheduler::Scheduler;
pub use pacer_runtime::timer::Timer;
