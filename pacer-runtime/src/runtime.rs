// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{mutex::MutexLike, scheduler::Scheduler};
use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// Bundles the clock, scheduler and lock types a wrapper instance is built on.
pub trait Runtime: 'static {
    type Mutex<T: ?Sized + Send + 'static>: MutexLike<T> + Send + Sync + 'static;
    type Scheduler: Scheduler<Instant = Self::Instant> + Default;
    type Instant: Copy
        + Debug
        + Ord
        + Send
        + Sync
        + Add<Duration, Output = Self::Instant>
        + Sub<Self::Instant, Output = Duration>;
}
