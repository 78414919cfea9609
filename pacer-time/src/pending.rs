// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_runtime::runtime::Runtime;
use pacer_runtime::scheduler::Scheduler;
use std::sync::Arc;

pub(crate) type Action<T> = Arc<dyn Fn(T) + Send + Sync>;

pub(crate) type HandleOf<R> = <<R as Runtime>::Scheduler as Scheduler>::Handle;

/// The single deferred call a wrapper instance may have outstanding.
///
/// Each scheduled callback carries the generation it was armed with. A
/// callback only runs the action if it can [`claim`](PendingSlot::claim) the
/// slot with that generation, which fails once a newer call has replaced it,
/// even if the scheduler could not stop the old callback in time.
#[derive(Debug)]
pub(crate) struct PendingSlot<H> {
    current: Option<(u64, H)>,
    next_generation: u64,
}

impl<H> PendingSlot<H> {
    pub(crate) const fn new() -> Self {
        Self {
            current: None,
            next_generation: 0,
        }
    }

    /// Removes the outstanding handle so the caller can cancel it.
    pub(crate) fn take(&mut self) -> Option<H> {
        self.current.take().map(|(_, handle)| handle)
    }

    /// Reserves the generation for the next scheduled callback.
    pub(crate) fn next_generation(&mut self) -> u64 {
        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);
        generation
    }

    pub(crate) fn arm(&mut self, generation: u64, handle: H) {
        self.current = Some((generation, handle));
    }

    /// Clears the slot if `generation` is still the outstanding one.
    pub(crate) fn claim(&mut self, generation: u64) -> bool {
        match self.current {
            Some((current, _)) if current == generation => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) const fn is_armed(&self) -> bool {
        self.current.is_some()
    }
}
