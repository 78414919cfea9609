// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#[cfg(feature = "runtime-smol")]
use std::sync::Arc;
#[cfg(feature = "runtime-smol")]
use std::time::{Duration, Instant};

#[cfg(feature = "runtime-smol")]
use futures::future::{select, Either};

#[cfg(feature = "runtime-smol")]
use crate::{impls::ScheduledTask, runtime::Runtime, scheduler::Scheduler, timer::Timer};

#[cfg(feature = "runtime-smol")]
#[derive(Debug)]
pub struct SmolRuntime;

#[cfg(feature = "runtime-smol")]
impl Runtime for SmolRuntime {
    type Mutex<T: ?Sized + Send + 'static> = Arc<parking_lot::Mutex<T>>;
    type Scheduler = SmolTimer;
    type Instant = Instant;
}

#[cfg(feature = "runtime-smol")]
#[derive(Clone, Debug, Default)]
pub struct SmolTimer;

#[cfg(feature = "runtime-smol")]
pub struct SmolSleep {
    timer: async_io::Timer,
}

#[cfg(feature = "runtime-smol")]
impl SmolSleep {
    fn new(duration: Duration) -> Self {
        Self {
            timer: async_io::Timer::after(duration),
        }
    }
}

#[cfg(feature = "runtime-smol")]
impl core::future::Future for SmolSleep {
    type Output = ();

    fn poll(
        mut self: core::pin::Pin<&mut Self>,
        cx: &mut core::task::Context<'_>,
    ) -> core::task::Poll<Self::Output> {
        core::pin::Pin::new(&mut self.timer).poll(cx).map(|_| ())
    }
}

#[cfg(feature = "runtime-smol")]
impl Timer for SmolTimer {
    type Sleep = SmolSleep;

    type Instant = Instant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        SmolSleep::new(duration)
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }
}

/// Spawns detached tasks on smol's global executor.
#[cfg(feature = "runtime-smol")]
impl Scheduler for SmolTimer {
    type Handle = ScheduledTask;

    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let task = ScheduledTask::new();
        let cancel = task.token();
        let sleep = self.sleep_future(delay);

        smol::spawn(async move {
            let cancelled = cancel.cancelled();
            futures::pin_mut!(cancelled);

            if let Either::Right(((), _)) = select(cancelled, sleep).await {
                if !cancel.is_cancelled() {
                    callback();
                }
            }
        })
        .detach();

        task
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.cancel();
    }
}
