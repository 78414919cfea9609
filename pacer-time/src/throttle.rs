// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading throttle for actions.
//!
//! The first call runs the action immediately. Calls arriving before the
//! minimum spacing has elapsed since the last execution are dropped entirely;
//! nothing is deferred. A call arriving exactly at the minimum spacing runs.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! use pacer_time::throttled_with;
//! use std::time::Duration;
//!
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! let on_scroll = throttled_with(
//!     |offset: u32| println!("scrolled to {offset}"),
//!     Duration::from_millis(100),
//! );
//!
//! on_scroll.call(10); // runs
//! on_scroll.call(20); // dropped
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

use crate::pending::Action;
use core::fmt;
use core::time::Duration;
use pacer_core::{delay, Result};
use pacer_runtime::mutex::MutexLike;
use pacer_runtime::runtime::Runtime;
use pacer_runtime::timer::Timer;
use std::sync::Arc;

/// An action that runs at most once per minimum time space.
///
/// Clones share the last execution instant.
pub struct Throttled<T, R: Runtime> {
    action: Action<T>,
    minimum_time_space: Duration,
    scheduler: R::Scheduler,
    last_execution: R::Mutex<Option<R::Instant>>,
}

impl<T, R> Throttled<T, R>
where
    T: Send + 'static,
    R: Runtime,
{
    /// Throttles `action` using the runtime's default clock.
    pub fn new<A>(action: A, minimum_time_space: Duration) -> Self
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        Self::with_scheduler(action, minimum_time_space, R::Scheduler::default())
    }

    /// Throttles `action`, reading time from an explicit scheduler instance.
    pub fn with_scheduler<A>(
        action: A,
        minimum_time_space: Duration,
        scheduler: R::Scheduler,
    ) -> Self
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            minimum_time_space,
            scheduler,
            last_execution: <R::Mutex<Option<R::Instant>> as MutexLike<_>>::new(None),
        }
    }

    /// Like [`Throttled::with_scheduler`], taking the spacing as signed
    /// milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidArgument`](pacer_core::PacerError::InvalidArgument)
    /// if `minimum_time_space_ms` is negative.
    pub fn with_scheduler_millis<A>(
        action: A,
        minimum_time_space_ms: i64,
        scheduler: R::Scheduler,
    ) -> Result<Self>
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        let minimum_time_space =
            delay::named_millis("minimum_time_space", minimum_time_space_ms)?;
        Ok(Self::with_scheduler(action, minimum_time_space, scheduler))
    }

    /// Runs `action(args)` now if enough time has passed, otherwise drops the call.
    ///
    /// The action runs on the caller's stack after the instance lock has been
    /// released, so a panic in the action reaches the caller and the action
    /// may call back into this wrapper.
    pub fn call(&self, args: T) {
        let execute = {
            let mut last_execution = self.last_execution.lock();
            let now = self.scheduler.now();
            let due = last_execution.map_or(true, |last| now - last >= self.minimum_time_space);
            if due {
                *last_execution = Some(now);
            }
            due
        };

        if execute {
            (self.action)(args);
        } else {
            pacer_core::trace!("throttle: dropping call inside minimum time space");
        }
    }

    /// Instant of the most recent execution, `None` before the first one.
    pub fn last_execution(&self) -> Option<R::Instant> {
        *self.last_execution.lock()
    }

    pub const fn minimum_time_space(&self) -> Duration {
        self.minimum_time_space
    }
}

impl<T, R: Runtime> Clone for Throttled<T, R> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            minimum_time_space: self.minimum_time_space,
            scheduler: self.scheduler.clone(),
            last_execution: self.last_execution.clone(),
        }
    }
}

impl<T, R: Runtime> fmt::Debug for Throttled<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Throttled")
            .field("minimum_time_space", &self.minimum_time_space)
            .field("last_execution", &*self.last_execution.lock())
            .finish_non_exhaustive()
    }
}

/// Throttles `action` with the default minimum time space (150ms).
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn throttled<T, A>(action: A) -> Throttled<T, crate::DefaultRuntime>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    Throttled::new(action, pacer_core::DEFAULT_MINIMUM_TIME_SPACE)
}

/// Throttles `action` with an explicit minimum time space.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn throttled_with<T, A>(
    action: A,
    minimum_time_space: Duration,
) -> Throttled<T, crate::DefaultRuntime>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    Throttled::new(action, minimum_time_space)
}

/// Throttles `action` with a minimum time space given in signed milliseconds.
///
/// # Errors
///
/// Returns [`PacerError::InvalidArgument`](pacer_core::PacerError::InvalidArgument)
/// if `minimum_time_space_ms` is negative.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn throttled_millis<T, A>(
    action: A,
    minimum_time_space_ms: i64,
) -> Result<Throttled<T, crate::DefaultRuntime>>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    Throttled::with_scheduler_millis(action, minimum_time_space_ms, Default::default())
}

/// Extension trait turning any action into a [`Throttled`] one.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub trait ThrottleExt<T>: Fn(T) + Send + Sync + Sized + 'static
where
    T: Send + 'static,
{
    /// Throttles this action to one execution per `minimum_time_space`.
    fn throttle(self, minimum_time_space: Duration) -> Throttled<T, crate::DefaultRuntime> {
        Throttled::new(self, minimum_time_space)
    }
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<A, T> ThrottleExt<T> for A
where
    A: Fn(T) + Send + Sync + 'static,
    T: Send + 'static,
{
}
