// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt::{self, Debug};
use core::future::Future;
use core::ops::{Add, Sub};
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use core::time::Duration;
use pacer_runtime::runtime::Runtime;
use pacer_runtime::scheduler::Scheduler;
use pacer_runtime::timer::Timer;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Point on the virtual timeline, measured from the scheduler's creation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtualInstant(Duration);

impl VirtualInstant {
    pub const ZERO: Self = Self(Duration::ZERO);

    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    #[must_use]
    pub const fn since_start(&self) -> Duration {
        self.0
    }

    #[must_use]
    pub const fn as_millis(&self) -> u128 {
        self.0.as_millis()
    }
}

impl Add<Duration> for VirtualInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs))
    }
}

impl Sub<VirtualInstant> for VirtualInstant {
    type Output = Duration;

    fn sub(self, rhs: VirtualInstant) -> Duration {
        self.0.saturating_sub(rhs.0)
    }
}

/// Handle of a callback scheduled on a [`VirtualScheduler`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VirtualTaskId(u64);

type Task = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct Inner {
    now: Duration,
    next_id: u64,
    // Keyed by (deadline, id): ties fire in scheduling order.
    tasks: BTreeMap<(Duration, u64), Task>,
}

/// Deterministic clock and scheduler driven by the test.
///
/// Clones share the same timeline. Callbacks only run inside [`advance`],
/// [`advance_to`] or [`tick`], on the calling thread, and never while the
/// scheduler's own lock is held, so callbacks may schedule or cancel further
/// work.
///
/// [`advance`]: VirtualScheduler::advance
/// [`advance_to`]: VirtualScheduler::advance_to
/// [`tick`]: VirtualScheduler::tick
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    inner: Arc<Mutex<Inner>>,
}

impl VirtualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `duration`, firing every callback that falls due.
    pub fn advance(&self, duration: Duration) {
        let target = self.inner.lock().now.saturating_add(duration);
        self.run_until(target);
    }

    /// Moves the clock to `instant` (no-op for instants in the past, apart from
    /// firing callbacks already due).
    pub fn advance_to(&self, instant: VirtualInstant) {
        let target = instant.0.max(self.inner.lock().now);
        self.run_until(target);
    }

    /// Fires callbacks due at the current instant without moving the clock.
    pub fn tick(&self) {
        self.advance(Duration::ZERO);
    }

    /// Number of callbacks scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inner.lock().tasks.len()
    }

    /// Deadline of the earliest pending callback.
    #[must_use]
    pub fn next_deadline(&self) -> Option<VirtualInstant> {
        self.inner
            .lock()
            .tasks
            .keys()
            .next()
            .map(|(deadline, _)| VirtualInstant(*deadline))
    }

    fn run_until(&self, target: Duration) {
        loop {
            let task = {
                let mut inner = self.inner.lock();
                let due = inner
                    .tasks
                    .keys()
                    .next()
                    .copied()
                    .filter(|(deadline, _)| *deadline <= target);

                match due {
                    Some(key) => {
                        inner.now = inner.now.max(key.0);
                        inner.tasks.remove(&key)
                    }
                    None => {
                        inner.now = inner.now.max(target);
                        None
                    }
                }
            };

            match task {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl Debug for VirtualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &inner.now)
            .field("pending", &inner.tasks.len())
            .finish()
    }
}

impl Timer for VirtualScheduler {
    type Sleep = VirtualSleep;

    type Instant = VirtualInstant;

    fn sleep_future(&self, duration: Duration) -> Self::Sleep {
        let shared = Arc::new(Mutex::new(SleepState::default()));
        let wake = shared.clone();

        self.schedule_after(duration, move || {
            let mut state = wake.lock();
            state.done = true;
            if let Some(waker) = state.waker.take() {
                waker.wake();
            }
        });

        VirtualSleep { shared }
    }

    fn now(&self) -> Self::Instant {
        VirtualInstant(self.inner.lock().now)
    }
}

impl Scheduler for VirtualScheduler {
    type Handle = VirtualTaskId;

    fn schedule_after<F>(&self, delay: Duration, callback: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        // Deadlines past the end of the timeline park at `Duration::MAX`.
        let deadline = inner.now.saturating_add(delay);
        inner.tasks.insert((deadline, id), Box::new(callback));
        VirtualTaskId(id)
    }

    fn cancel(&self, handle: Self::Handle) {
        self.inner
            .lock()
            .tasks
            .retain(|(_, id), _| *id != handle.0);
    }
}

#[derive(Default)]
struct SleepState {
    done: bool,
    waker: Option<Waker>,
}

/// Future completing once the owning [`VirtualScheduler`] reaches its deadline.
pub struct VirtualSleep {
    shared: Arc<Mutex<SleepState>>,
}

impl Future for VirtualSleep {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut state = self.shared.lock();
        if state.done {
            Poll::Ready(())
        } else {
            state.waker = Some(cx.waker().clone());
            Poll::Pending
        }
    }
}

/// Runtime whose clock and scheduler are a [`VirtualScheduler`].
///
/// Wrappers built with `with_scheduler` on this runtime must be handed the
/// test's own scheduler; `VirtualScheduler::default()` starts a new, unrelated
/// timeline.
#[derive(Debug)]
pub struct VirtualRuntime;

impl Runtime for VirtualRuntime {
    type Mutex<T: ?Sized + Send + 'static> = Arc<Mutex<T>>;
    type Scheduler = VirtualScheduler;
    type Instant = VirtualInstant;
}
