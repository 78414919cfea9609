// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Elapsed-time measurement against an injected clock.
//!
//! Reading time from a [`Timer`] instead of the system clock lets tests
//! measure on paused tokio time or a virtual scheduler.

use core::future::Future;
use core::time::Duration;
use pacer_runtime::timer::Timer;

/// Awaits `future` and returns its output with the time it took.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub async fn measure<TM, Fut>(timer: &TM, label: &str, future: Fut) -> (Fut::Output, Duration)
where
    TM: Timer,
    Fut: Future,
{
    let start = timer.now();
    let output = future.await;
    let elapsed = timer.now() - start;
    pacer_core::debug!(label, ?elapsed, "timing: measured");
    (output, elapsed)
}

/// Runs `f` and returns its output with the time it took.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn measure_sync<TM, O>(timer: &TM, label: &str, f: impl FnOnce() -> O) -> (O, Duration)
where
    TM: Timer,
{
    let start = timer.now();
    let output = f();
    let elapsed = timer.now() - start;
    pacer_core::debug!(label, ?elapsed, "timing: measured");
    (output, elapsed)
}
