// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Leading throttle with a guaranteed trailing call.
//!
//! Combines a responsive leading edge with a bounded-latency trailing edge
//! carrying the freshest arguments, while holding at most one timer:
//! - A call arriving after the minimum time space runs immediately
//! - A call arriving sooner replaces the pending trailing call and is
//!   scheduled `wait_time - time_already_waited` after the last execution
//!   (clamped at zero)
//! - When the trailing call fires, the last execution instant becomes the
//!   instant the call was *scheduled*, not the instant it fired
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! use pacer_time::throttled_with_last_with;
//! use std::time::Duration;
//!
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! let save = throttled_with_last_with(
//!     |draft: String| println!("saving {draft}"),
//!     Duration::from_millis(100),
//!     Duration::from_millis(100),
//! );
//!
//! save.call("a".to_string());   // saved immediately
//! save.call("ab".to_string());  // replaced by the next call
//! save.call("abc".to_string()); // saved 100ms after "a"
//! tokio::time::sleep(Duration::from_millis(150)).await;
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

use crate::pending::{Action, HandleOf, PendingSlot};
use core::fmt;
use core::time::Duration;
use pacer_core::{delay, Result};
use pacer_runtime::mutex::MutexLike;
use pacer_runtime::runtime::Runtime;
use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;
use std::sync::Arc;

struct TrailingState<I, H> {
    last_execution: Option<I>,
    pending: PendingSlot<H>,
}

type StateOf<R> = TrailingState<<R as Runtime>::Instant, HandleOf<R>>;

/// An action throttled on the leading edge that never loses the last call.
///
/// Clones share state with the original.
pub struct ThrottledWithLast<T, R: Runtime> {
    action: Action<T>,
    minimum_time_space: Duration,
    wait_time: Duration,
    scheduler: R::Scheduler,
    state: R::Mutex<StateOf<R>>,
}

impl<T, R> ThrottledWithLast<T, R>
where
    T: Send + 'static,
    R: Runtime,
{
    /// Wraps `action` on the runtime's default scheduler.
    pub fn new<A>(action: A, minimum_time_space: Duration, wait_time: Duration) -> Self
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        Self::with_scheduler(
            action,
            minimum_time_space,
            wait_time,
            R::Scheduler::default(),
        )
    }

    /// Wraps `action` on an explicit scheduler instance.
    pub fn with_scheduler<A>(
        action: A,
        minimum_time_space: Duration,
        wait_time: Duration,
        scheduler: R::Scheduler,
    ) -> Self
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        let state = TrailingState {
            last_execution: None,
            pending: PendingSlot::new(),
        };

        Self {
            action: Arc::new(action),
            minimum_time_space,
            wait_time,
            scheduler,
            state: <R::Mutex<StateOf<R>> as MutexLike<_>>::new(state),
        }
    }

    /// Like [`ThrottledWithLast::with_scheduler`], taking both durations as
    /// signed milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidArgument`](pacer_core::PacerError::InvalidArgument)
    /// if either value is negative.
    pub fn with_scheduler_millis<A>(
        action: A,
        minimum_time_space_ms: i64,
        wait_time_ms: i64,
        scheduler: R::Scheduler,
    ) -> Result<Self>
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        let minimum_time_space =
            delay::named_millis("minimum_time_space", minimum_time_space_ms)?;
        let wait_time = delay::named_millis("wait_time", wait_time_ms)?;
        Ok(Self::with_scheduler(
            action,
            minimum_time_space,
            wait_time,
            scheduler,
        ))
    }

    /// Runs `action(args)` now, or replaces the pending trailing call with it.
    pub fn call(&self, args: T) {
        let mut state = self.state.lock();
        let now = self.scheduler.now();
        let time_already_waited = state.last_execution.map(|last| now - last);

        if let Some(handle) = state.pending.take() {
            pacer_core::trace!("throttle_with_last: superseding pending trailing call");
            self.scheduler.cancel(handle);
        }

        match time_already_waited {
            Some(waited) if waited < self.minimum_time_space => {
                let delay = self.wait_time.saturating_sub(waited);
                let generation = state.pending.next_generation();
                let shared = self.state.clone();
                let action = Arc::clone(&self.action);

                pacer_core::trace!(?delay, generation, "throttle_with_last: scheduling trailing call");
                let handle = self.scheduler.schedule_after(delay, move || {
                    {
                        let mut state = shared.lock();
                        if !state.pending.claim(generation) {
                            return;
                        }
                        state.last_execution =
                            Some(state.last_execution.map_or(now, |last| last.max(now)));
                    }
                    pacer_core::debug!(generation, "throttle_with_last: firing trailing call");
                    action(args);
                });

                state.pending.arm(generation, handle);
            }
            _ => {
                state.last_execution = Some(now);
                drop(state);
                (self.action)(args);
            }
        }
    }

    /// Whether a trailing call is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.state.lock().pending.is_armed()
    }

    /// Instant recorded for the most recent execution, `None` before the first.
    ///
    /// For a trailing execution this is the instant the call was scheduled.
    pub fn last_execution(&self) -> Option<R::Instant> {
        self.state.lock().last_execution
    }

    pub const fn minimum_time_space(&self) -> Duration {
        self.minimum_time_space
    }

    pub const fn wait_time(&self) -> Duration {
        self.wait_time
    }
}

impl<T, R: Runtime> Clone for ThrottledWithLast<T, R> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            minimum_time_space: self.minimum_time_space,
            wait_time: self.wait_time,
            scheduler: self.scheduler.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T, R: Runtime> fmt::Debug for ThrottledWithLast<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThrottledWithLast")
            .field("minimum_time_space", &self.minimum_time_space)
            .field("wait_time", &self.wait_time)
            .field("last_execution", &self.state.lock().last_execution)
            .finish_non_exhaustive()
    }
}

/// Wraps `action` with the default minimum time space and wait time (150ms each).
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn throttled_with_last<T, A>(action: A) -> ThrottledWithLast<T, crate::DefaultRuntime>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    ThrottledWithLast::new(
        action,
        pacer_core::DEFAULT_MINIMUM_TIME_SPACE,
        pacer_core::DEFAULT_WAIT_TIME,
    )
}

/// Wraps `action` with an explicit minimum time space and wait time.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn throttled_with_last_with<T, A>(
    action: A,
    minimum_time_space: Duration,
    wait_time: Duration,
) -> ThrottledWithLast<T, crate::DefaultRuntime>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    ThrottledWithLast::new(action, minimum_time_space, wait_time)
}

/// Wraps `action` with durations given in signed milliseconds.
///
/// # Errors
///
/// Returns [`PacerError::InvalidArgument`](pacer_core::PacerError::InvalidArgument)
/// if either value is negative.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn throttled_with_last_millis<T, A>(
    action: A,
    minimum_time_space_ms: i64,
    wait_time_ms: i64,
) -> Result<ThrottledWithLast<T, crate::DefaultRuntime>>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    ThrottledWithLast::with_scheduler_millis(
        action,
        minimum_time_space_ms,
        wait_time_ms,
        Default::default(),
    )
}

/// Extension trait turning any action into a [`ThrottledWithLast`] one.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub trait ThrottleWithLastExt<T>: Fn(T) + Send + Sync + Sized + 'static
where
    T: Send + 'static,
{
    /// Throttles this action, keeping the last suppressed call.
    fn throttle_with_last(
        self,
        minimum_time_space: Duration,
        wait_time: Duration,
    ) -> ThrottledWithLast<T, crate::DefaultRuntime> {
        ThrottledWithLast::new(self, minimum_time_space, wait_time)
    }
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<A, T> ThrottleWithLastExt<T> for A
where
    A: Fn(T) + Send + Sync + 'static,
    T: Send + 'static,
{
}
