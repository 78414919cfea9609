// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::timer::Timer;
use core::fmt::Debug;
use core::time::Duration;

/// Defers callbacks by a delay and cancels them before they fire.
///
/// A delay of zero still defers the callback past the current call: no
/// implementation may run the callback inside `schedule_after`.
///
/// Cancelling is best-effort. A callback that is already running, or that the
/// runtime has already started, may still complete; callers that need
/// exactly-once semantics guard the callback body themselves (the wrappers in
/// `pacer-time` use a generation number for this).
pub trait Scheduler: Timer {
    /// Identifies one scheduled callback.
    type Handle: Send + Debug + 'static;

    /// Runs `callback` once `delay` has elapsed.
    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;

    /// Prevents the callback behind `handle` from running if it has not fired yet.
    fn cancel(&self, handle: Self::Handle);
}
