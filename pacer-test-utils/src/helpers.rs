// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::Receiver;
use std::time::Duration;
use tokio::time::timeout;

/// Receives the next message, or `None` if nothing arrives within `timeout_ms`.
pub async fn recv_timeout<T>(rx: &Receiver<T>, timeout_ms: u64) -> Option<T> {
    timeout(Duration::from_millis(timeout_ms), rx.recv())
        .await
        .ok()
        .and_then(Result::ok)
}

/// Panics if a message arrives within `timeout_ms`.
pub async fn assert_no_recv<T: std::fmt::Debug>(rx: &Receiver<T>, timeout_ms: u64) {
    if let Ok(Ok(item)) = timeout(Duration::from_millis(timeout_ms), rx.recv()).await {
        panic!("Expected no message, got {item:?}");
    }
}
