// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::timer::Timer;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records the arguments of every action execution.
///
/// ```rust
/// use pacer_test_utils::CallRecorder;
///
/// let recorder = CallRecorder::new();
/// let action = recorder.action();
///
/// action("a");
/// action("b");
///
/// assert_eq!(recorder.calls(), vec!["a", "b"]);
/// ```
#[derive(Debug)]
pub struct CallRecorder<T> {
    calls: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for CallRecorder<T> {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
        }
    }
}

impl<T> Default for CallRecorder<T> {
    fn default() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone + Send + 'static> CallRecorder<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An action appending its argument to this recorder.
    pub fn action(&self) -> impl Fn(T) + Clone + Send + Sync + 'static {
        let calls = self.calls.clone();
        move |args| calls.lock().push(args)
    }

    #[must_use]
    pub fn calls(&self) -> Vec<T> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }

    #[must_use]
    pub fn last(&self) -> Option<T> {
        self.calls.lock().last().cloned()
    }
}

/// Records the arguments and the timer's instant of every action execution.
pub struct TimedCallRecorder<T, TM: Timer> {
    timer: TM,
    calls: Arc<Mutex<Vec<(TM::Instant, T)>>>,
}

impl<T, TM: Timer> Clone for TimedCallRecorder<T, TM> {
    fn clone(&self) -> Self {
        Self {
            timer: self.timer.clone(),
            calls: self.calls.clone(),
        }
    }
}

impl<T: Clone + Send + 'static, TM: Timer> TimedCallRecorder<T, TM> {
    pub fn new(timer: TM) -> Self {
        Self {
            timer,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// An action appending `(timer.now(), args)` to this recorder.
    pub fn action(&self) -> impl Fn(T) + Clone + Send + Sync + 'static {
        let calls = self.calls.clone();
        let timer = self.timer.clone();
        move |args| {
            let now = timer.now();
            calls.lock().push((now, args));
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<(TM::Instant, T)> {
        self.calls.lock().clone()
    }

    #[must_use]
    pub fn values(&self) -> Vec<T> {
        self.calls.lock().iter().map(|(_, v)| v.clone()).collect()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.lock().len()
    }
}
