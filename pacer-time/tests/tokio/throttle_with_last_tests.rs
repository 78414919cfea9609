// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::unbounded;
use pacer_core::PacerError;
use pacer_test_utils::helpers::{assert_no_recv, recv_timeout};
use pacer_test_utils::test_data::{query_r, query_ru, query_rus, query_rust, Query};
use pacer_time::prelude::*;
use pacer_time::{throttled_with_last, throttled_with_last_millis, throttled_with_last_with};
use std::time::Duration;
use tokio::time::{advance, pause, Instant};

#[tokio::test]
async fn test_throttle_with_last_trailing_guarantee() -> anyhow::Result<()> {
    // Arrange
    pause();
    let start = Instant::now();
    let (tx, rx) = unbounded::<(Duration, Query)>();
    let search = throttled_with_last_with(
        move |query| {
            let _ = tx.try_send((Instant::now() - start, query));
        },
        Duration::from_millis(100),
        Duration::from_millis(100),
    );

    // Act
    search.call(query_r());
    advance(Duration::from_millis(20)).await;
    search.call(query_ru());
    advance(Duration::from_millis(20)).await;
    search.call(query_rus());
    advance(Duration::from_millis(20)).await;
    search.call(query_rust());

    // Assert
    assert_eq!(
        recv_timeout(&rx, 1_000).await,
        Some((Duration::ZERO, query_r()))
    );
    advance(Duration::from_millis(30)).await;
    assert!(rx.is_empty());

    let (elapsed, query) = recv_timeout(&rx, 1_000)
        .await
        .ok_or_else(|| anyhow::anyhow!("trailing call never fired"))?;
    assert_eq!(query, query_rust());
    assert!(elapsed >= Duration::from_millis(100));
    assert!(elapsed < Duration::from_millis(105));
    assert_no_recv(&rx, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_throttle_with_last_defaults() {
    // Arrange
    let search = throttled_with_last(|_: Query| {});

    // Assert
    assert_eq!(search.minimum_time_space(), Duration::from_millis(150));
    assert_eq!(search.wait_time(), Duration::from_millis(150));
    assert_eq!(search.last_execution(), None);
}

#[tokio::test]
async fn test_throttle_with_last_extension_trait() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, rx) = unbounded::<Query>();
    let save = (move |query: Query| {
        let _ = tx.try_send(query);
    })
    .throttle_with_last(Duration::from_millis(100), Duration::from_millis(100));

    // Act
    save.call(query_r());
    save.call(query_ru());

    // Assert
    assert_eq!(recv_timeout(&rx, 10).await, Some(query_r()));
    assert!(save.is_pending());
    assert_eq!(recv_timeout(&rx, 1_000).await, Some(query_ru()));
    assert!(!save.is_pending());
    Ok(())
}

#[tokio::test]
async fn test_throttled_with_last_millis_rejects_negative_minimum() {
    // Act
    let result = throttled_with_last_millis(|_: Query| {}, -1, 100);

    // Assert
    assert!(matches!(result, Err(PacerError::InvalidArgument { .. })));
}
