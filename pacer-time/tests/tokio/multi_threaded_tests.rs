// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_channel::unbounded;
use pacer_test_utils::helpers::{assert_no_recv, recv_timeout};
use pacer_test_utils::test_data::Query;
use pacer_time::{debounced_with, throttled_with, throttled_with_last_with};
use std::time::Duration;

const TASKS: u32 = 8;
const CALLS_PER_TASK: u32 = 50;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_debounce_to_one_execution() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = unbounded::<Query>();
    let search = debounced_with(
        move |query| {
            let _ = tx.try_send(query);
        },
        Duration::from_millis(100),
    );

    // Act
    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let search = search.clone();
            tokio::spawn(async move {
                for revision in 0..CALLS_PER_TASK {
                    search.call(Query::new(format!("task-{task}"), revision));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await?;
    }

    // Assert
    assert!(recv_timeout(&rx, 1_000).await.is_some());
    assert_no_recv(&rx, 300).await;
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_throttle_to_one_execution() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = unbounded::<Query>();
    let search = throttled_with(
        move |query| {
            let _ = tx.try_send(query);
        },
        Duration::from_secs(60),
    );

    // Act
    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let search = search.clone();
            tokio::spawn(async move {
                for revision in 0..CALLS_PER_TASK {
                    search.call(Query::new(format!("task-{task}"), revision));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await?;
    }

    // Assert
    assert_eq!(rx.len(), 1);
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_calls_keep_one_trailing_call() -> anyhow::Result<()> {
    // Arrange
    let (tx, rx) = unbounded::<Query>();
    let save = throttled_with_last_with(
        move |query| {
            let _ = tx.try_send(query);
        },
        Duration::from_secs(60),
        Duration::from_millis(100),
    );

    // Act
    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let save = save.clone();
            tokio::spawn(async move {
                for revision in 0..CALLS_PER_TASK {
                    save.call(Query::new(format!("task-{task}"), revision));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.await?;
    }

    // Assert
    assert!(recv_timeout(&rx, 1_000).await.is_some());
    assert!(recv_timeout(&rx, 1_000).await.is_some());
    assert_no_recv(&rx, 300).await;
    Ok(())
}
