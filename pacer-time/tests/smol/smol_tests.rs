// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::unbounded;
use pacer_test_utils::test_data::{query_r, query_ru, query_rus, Query};
use pacer_time::{Debounced, SmolRuntime, Throttled, ThrottledWithLast};
use std::time::{Duration, Instant};

#[test]
fn test_debounce_smol() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let start = Instant::now();
        let (tx, rx) = unbounded::<Query>();
        let search = Debounced::<Query, SmolRuntime>::new(
            move |query| {
                let _ = tx.try_send(query);
            },
            Duration::from_millis(30),
        );

        // Act
        search.call(query_r());
        search.call(query_ru());

        // Assert
        assert_eq!(rx.recv().await?, query_ru());
        assert!(start.elapsed() >= Duration::from_millis(30));
        assert!(rx.is_empty());
        Ok(())
    })
}

#[test]
fn test_throttle_smol() {
    // Arrange
    let (tx, rx) = unbounded::<Query>();
    let search = Throttled::<Query, SmolRuntime>::new(
        move |query| {
            let _ = tx.try_send(query);
        },
        Duration::from_secs(60),
    );

    // Act
    search.call(query_r());
    search.call(query_ru());

    // Assert
    assert_eq!(rx.len(), 1);
    assert!(search.last_execution().is_some());
}

#[test]
fn test_throttle_with_last_smol() -> anyhow::Result<()> {
    smol::block_on(async {
        // Arrange
        let (tx, rx) = unbounded::<Query>();
        let save = ThrottledWithLast::<Query, SmolRuntime>::new(
            move |query| {
                let _ = tx.try_send(query);
            },
            Duration::from_millis(30),
            Duration::from_millis(30),
        );

        // Act
        save.call(query_r());
        save.call(query_ru());
        save.call(query_rus());

        // Assert
        assert_eq!(rx.recv().await?, query_r());
        assert_eq!(rx.recv().await?, query_rus());
        assert!(!save.is_pending());
        Ok(())
    })
}
