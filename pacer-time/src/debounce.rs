// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Trailing debounce for actions.
//!
//! A debounced action only runs once calls stop arriving for a quiet period:
//! - Every call cancels the pending execution and schedules a new one
//! - If calls keep arriving faster than the quiet period, the action never runs
//! - Once the quiet period passes, the action runs exactly once with the
//!   arguments of the last call
//!
//! Execution is always deferred through the runtime's scheduler, even for a
//! zero wait time, so the action never runs inside [`Debounced::call`].
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! use pacer_time::debounced_with;
//! use std::time::Duration;
//!
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main]
//! # async fn main() {
//! let search = debounced_with(
//!     |query: String| println!("searching for {query}"),
//!     Duration::from_millis(100),
//! );
//!
//! search.call("r".to_string());
//! search.call("ru".to_string());
//! search.call("rust".to_string());
//!
//! // Only "rust" is searched, 100ms after the last keystroke
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
use std::sync::Arc;

/// An action wrapped with trailing debounce semantics.
///
/// Cloning yields another handle to the same instance: clones share the
/// pending call. Wrappers built separately, even from the same action, never
/// share state.
pub struct Debounced<T, R: Runtime> {
    action: Action<T>,
    wait_time: Duration,
    scheduler: R::Scheduler,
    state: R::Mutex<PendingSlot<HandleOf<R>>>,
}

impl<T, R> Debounced<T, R>
where
    T: Send + 'static,
    R: Runtime,
{
    /// Debounces `action` on the runtime's default scheduler.
    pub fn new<A>(action: A, wait_time: Duration) -> Self
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        Self::with_scheduler(action, wait_time, R::Scheduler::default())
    }

    /// Debounces `action` on an explicit scheduler instance.
    pub fn with_scheduler<A>(action: A, wait_time: Duration, scheduler: R::Scheduler) -> Self
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
            wait_time,
            scheduler,
            state: <R::Mutex<PendingSlot<HandleOf<R>>> as MutexLike<_>>::new(PendingSlot::new()),
        }
    }

    /// Like [`Debounced::with_scheduler`], taking the wait time as signed
    /// milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`PacerError::InvalidArgument`](pacer_core::PacerError::InvalidArgument)
    /// if `wait_time_ms` is negative.
    pub fn with_scheduler_millis<A>(
        action: A,
        wait_time_ms: i64,
        scheduler: R::Scheduler,
    ) -> Result<Self>
    where
        A: Fn(T) + Send + Sync + 'static,
    {
        let wait_time = delay::named_millis("wait_time", wait_time_ms)?;
        Ok(Self::with_scheduler(action, wait_time, scheduler))
    }

    /// Schedules `action(args)` after the wait time, replacing any pending call.
    pub fn call(&self, args: T) {
        let mut slot = self.state.lock();

        if let Some(handle) = slot.take() {
            pacer_core::trace!("debounce: superseding pending call");
            self.scheduler.cancel(handle);
        }

        let generation = slot.next_generation();
        let state = self.state.clone();
        let action = Arc::clone(&self.action);

        let handle = self.scheduler.schedule_after(self.wait_time, move || {
            if !state.lock().claim(generation) {
                return;
            }
            pacer_core::debug!(generation, "debounce: firing");
            action(args);
        });

        slot.arm(generation, handle);
    }

    /// Whether a deferred call is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.state.lock().is_armed()
    }

    pub const fn wait_time(&self) -> Duration {
        self.wait_time
    }
}

impl<T, R: Runtime> Clone for Debounced<T, R> {
    fn clone(&self) -> Self {
        Self {
            action: Arc::clone(&self.action),
            wait_time: self.wait_time,
            scheduler: self.scheduler.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T, R: Runtime> fmt::Debug for Debounced<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("wait_time", &self.wait_time)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}

/// Debounces `action` with the default wait time (150ms).
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn debounced<T, A>(action: A) -> Debounced<T, crate::DefaultRuntime>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    Debounced::new(action, pacer_core::DEFAULT_WAIT_TIME)
}

/// Debounces `action` with an explicit wait time.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn debounced_with<T, A>(action: A, wait_time: Duration) -> Debounced<T, crate::DefaultRuntime>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    Debounced::new(action, wait_time)
}

/// Debounces `action` with a wait time given in signed milliseconds.
///
/// # Errors
///
/// Returns [`PacerError::InvalidArgument`](pacer_core::PacerError::InvalidArgument)
/// if `wait_time_ms` is negative.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn debounced_millis<T, A>(
    action: A,
    wait_time_ms: i64,
) -> Result<Debounced<T, crate::DefaultRuntime>>
where
    T: Send + 'static,
    A: Fn(T) + Send + Sync + 'static,
{
    Debounced::with_scheduler_millis(action, wait_time_ms, Default::default())
}

/// Extension trait turning any action into a [`Debounced`] one.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub trait DebounceExt<T>: Fn(T) + Send + Sync + Sized + 'static
where
    T: Send + 'static,
{
    /// Debounces this action by `wait_time` on the default runtime.
    fn debounce(self, wait_time: Duration) -> Debounced<T, crate::DefaultRuntime> {
        Debounced::new(self, wait_time)
    }
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<A, T> DebounceExt<T> for A
where
    A: Fn(T) + Send + Sync + 'static,
    T: Send + 'static,
{
}
