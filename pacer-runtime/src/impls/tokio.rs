// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-tokio")]
use std::{sync::Arc, time::Duration};

#[cfg(feature = "runtime-tokio")]
use crate::{impls::ScheduledTask, runtime::Runtime, scheduler::Scheduler, timer::Timer};

#[cfg(feature = "runtime-tokio")]
pub struct TokioRuntime;

#[cfg(feature = "runtime-tokio")]
impl Runtime for TokioRuntime {
    type Mutex<T: ?Sized + Send + 'static> = Arc<parking_lot::Mutex<T>>;
    type Scheduler = TokioTimer;
    type Instant = tokio::time::Instant;
}

/// Tokio clock and scheduler.
///
/// Uses `tokio::time::Instant`, so `tokio::time::pause()` and `advance()`
/// drive both the clock and pending callbacks in tests.
#[cfg(feature = "runtime-tokio")]
#[derive(Clone, Debug, Default)]
pub struct TokioTimer;

#[cfg(feature = "runtime-tokio")]
impl Timer for TokioTimer {
    type Sleep = tokio::time::Sleep;

    type Instant = tokio::time::Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        tokio::time::sleep(duration)
    }

    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }
}

/// Must be called from within a Tokio runtime.
#[cfg(feature = "runtime-tokio")]
impl Scheduler for TokioTimer {
    type Handle = ScheduledTask;

    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let task = ScheduledTask::new();
        let cancel = task.token();
        let sleep = self.sleep_future(delay);

        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {}
                () = sleep => callback(),
            }
        });

        task
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}
