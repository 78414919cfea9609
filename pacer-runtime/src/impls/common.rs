// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_core::CancellationToken;

/// Handle to a callback spawned on an async runtime.
///
/// The spawned task races its sleep against the token held here; cancelling
/// the handle wins that race unless the sleep has already completed. Dropping
/// the handle does not cancel the callback.
#[derive(Debug, Default)]
pub struct ScheduledTask {
    cancel: CancellationToken,
}

impl ScheduledTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token the spawned task waits on.
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }
}
