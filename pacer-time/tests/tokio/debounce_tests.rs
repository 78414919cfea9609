// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::unbounded;
use pacer_core::PacerError;
use pacer_test_utils::helpers::{assert_no_recv, recv_timeout};
use pacer_test_utils::test_data::{query_r, query_ru, query_rus, query_rust, Query};
use pacer_time::prelude::*;
use pacer_time::{debounced, debounced_millis, debounced_with, DEFAULT_WAIT_TIME};
use std::time::Duration;
use tokio::time::{advance, pause, Instant};

#[tokio::test]
async fn test_debounce_emits_last_query_after_quiet_period() -> anyhow::Result<()> {
    // Arrange
    pause();
    let start = Instant::now();
    let (tx, rx) = unbounded::<Query>();
    let search = debounced_with(
        move |query| {
            let _ = tx.try_send(query);
        },
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
    advance(Duration::from_millis(90)).await;
    assert!(rx.is_empty());

    assert_eq!(recv_timeout(&rx, 1_000).await, Some(query_rust()));
    let elapsed = Instant::now() - start;
    assert!(elapsed >= Duration::from_millis(160));
    assert!(elapsed < Duration::from_millis(165));
    assert_no_recv(&rx, 500).await;
    Ok(())
}

#[tokio::test]
async fn test_debounce_default_wait_time() -> anyhow::Result<()> {
    // Arrange
    pause();
    let start = Instant::now();
    let (tx, rx) = unbounded::<Query>();
    let search = debounced(move |query| {
        let _ = tx.try_send(query);
    });

    // Act
    search.call(query_r());

    // Assert
    assert_eq!(search.wait_time(), DEFAULT_WAIT_TIME);
    advance(Duration::from_millis(149)).await;
    assert!(rx.is_empty());

    assert_eq!(recv_timeout(&rx, 1_000).await, Some(query_r()));
    let elapsed = Instant::now() - start;
    assert!(elapsed >= Duration::from_millis(150));
    assert!(elapsed < Duration::from_millis(155));
    Ok(())
}

#[tokio::test]
async fn test_debounce_extension_trait() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, rx) = unbounded::<Query>();
    let search = (move |query: Query| {
        let _ = tx.try_send(query);
    })
    .debounce(Duration::from_millis(50));

    // Act
    search.call(query_r());
    search.call(query_ru());

    // Assert
    assert!(search.is_pending());
    assert_eq!(recv_timeout(&rx, 1_000).await, Some(query_ru()));
    assert!(!search.is_pending());
    Ok(())
}

#[tokio::test]
async fn test_debounce_zero_wait_is_not_synchronous() -> anyhow::Result<()> {
    // Arrange
    pause();
    let (tx, rx) = unbounded::<Query>();
    let search = debounced_with(
        move |query| {
            let _ = tx.try_send(query);
        },
        Duration::ZERO,
    );

    // Act
    search.call(query_r());

    // Assert
    assert!(rx.try_recv().is_err());
    assert_eq!(recv_timeout(&rx, 10).await, Some(query_r()));
    Ok(())
}

#[tokio::test]
async fn test_debounced_millis_rejects_negative_wait_time() {
    // Act
    let result = debounced_millis(|_: Query| {}, -5);

    // Assert
    assert!(matches!(result, Err(PacerError::InvalidArgument { .. })));
}
