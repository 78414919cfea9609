// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use pacer_core::PacerError;
use pacer_test_utils::test_data::{query_r, query_ru, query_rus, query_rust, Query};
use pacer_test_utils::{CallRecorder, TimedCallRecorder, VirtualInstant, VirtualRuntime, VirtualScheduler};
use pacer_time::ThrottledWithLast;
use std::time::Duration;

fn throttled_with_last(
    action: impl Fn(Query) + Send + Sync + 'static,
    minimum_ms: u64,
    wait_ms: u64,
    scheduler: &VirtualScheduler,
) -> ThrottledWithLast<Query, VirtualRuntime> {
    ThrottledWithLast::with_scheduler(
        action,
        Duration::from_millis(minimum_ms),
        Duration::from_millis(wait_ms),
        scheduler.clone(),
    )
}

#[test]
fn test_throttle_with_last_fires_trailing_call_with_latest_args() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = TimedCallRecorder::new(scheduler.clone());
    let search = throttled_with_last(recorder.action(), 100, 100, &scheduler);

    // Act
    search.call(query_r());
    scheduler.advance(Duration::from_millis(20));
    search.call(query_ru());
    scheduler.advance(Duration::from_millis(20));
    search.call(query_rus());
    scheduler.advance(Duration::from_millis(20));
    search.call(query_rust());
    scheduler.advance(Duration::from_millis(500));

    // Assert
    assert_eq!(
        recorder.calls(),
        vec![
            (VirtualInstant::ZERO, query_r()),
            (VirtualInstant::from_millis(100), query_rust()),
        ]
    );
}

#[test]
fn test_throttle_with_last_records_schedule_time_on_trailing_call() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = TimedCallRecorder::new(scheduler.clone());
    let search = throttled_with_last(recorder.action(), 100, 100, &scheduler);

    // Act
    search.call(query_r());
    scheduler.advance(Duration::from_millis(60));
    search.call(query_ru());
    scheduler.advance(Duration::from_millis(40));

    // Assert
    assert_eq!(search.last_execution(), Some(VirtualInstant::from_millis(60)));

    // The next window is measured from t=60, so a call at t=130 waits 30ms
    scheduler.advance(Duration::from_millis(30));
    search.call(query_rus());
    assert_eq!(scheduler.next_deadline(), Some(VirtualInstant::from_millis(160)));

    scheduler.advance(Duration::from_millis(100));
    assert_eq!(
        recorder.calls(),
        vec![
            (VirtualInstant::ZERO, query_r()),
            (VirtualInstant::from_millis(100), query_ru()),
            (VirtualInstant::from_millis(160), query_rus()),
        ]
    );
    assert_eq!(search.last_execution(), Some(VirtualInstant::from_millis(130)));
}

#[test]
fn test_throttle_with_last_leading_call_cancels_pending_trailing_call() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = TimedCallRecorder::new(scheduler.clone());
    let search = throttled_with_last(recorder.action(), 100, 200, &scheduler);

    // Act
    search.call(query_r());
    scheduler.advance(Duration::from_millis(50));
    search.call(query_ru());
    scheduler.advance(Duration::from_millis(70));
    search.call(query_rus());
    scheduler.advance(Duration::from_millis(1_000));

    // Assert
    assert_eq!(
        recorder.calls(),
        vec![
            (VirtualInstant::ZERO, query_r()),
            (VirtualInstant::from_millis(120), query_rus()),
        ]
    );
    assert!(!search.is_pending());
}

#[test]
fn test_throttle_with_last_clamps_negative_delay_to_zero() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = TimedCallRecorder::new(scheduler.clone());
    let search = throttled_with_last(recorder.action(), 100, 20, &scheduler);

    // Act
    search.call(query_r());
    scheduler.advance(Duration::from_millis(50));
    search.call(query_ru());

    // Assert
    assert_eq!(recorder.count(), 1);
    assert!(search.is_pending());
    assert_eq!(scheduler.next_deadline(), Some(VirtualInstant::from_millis(50)));

    scheduler.tick();
    assert_eq!(
        recorder.calls(),
        vec![
            (VirtualInstant::ZERO, query_r()),
            (VirtualInstant::from_millis(50), query_ru()),
        ]
    );
}

#[test]
fn test_throttle_with_last_keeps_a_single_timer() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new();
    let search = throttled_with_last(recorder.action(), 100, 100, &scheduler);

    // Act
    search.call(query_r());
    search.call(query_ru());
    search.call(query_rus());
    search.call(query_rust());

    // Assert
    assert_eq!(recorder.calls(), vec![query_r()]);
    assert_eq!(scheduler.pending_count(), 1);
    assert!(search.is_pending());
}

#[test]
fn test_throttle_with_last_deferred_branch_never_runs_inside_call() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new();
    let search = throttled_with_last(recorder.action(), 100, 0, &scheduler);
    search.call(query_r());

    // Act
    search.call(query_ru());

    // Assert
    assert_eq!(recorder.calls(), vec![query_r()]);
    scheduler.tick();
    assert_eq!(recorder.calls(), vec![query_r(), query_ru()]);
}

#[test]
fn test_throttle_with_last_separate_wrappers_are_independent() {
    // Arrange
    let scheduler = VirtualScheduler::new();
    let recorder = CallRecorder::new();
    let action = recorder.action();
    let first = throttled_with_last(action.clone(), 100, 100, &scheduler);
    let second = throttled_with_last(action, 100, 100, &scheduler);

    // Act
    first.call(query_r());
    second.call(query_ru());

    // Assert
    assert_eq!(recorder.calls(), vec![query_r(), query_ru()]);
    assert!(!first.is_pending());
    assert!(!second.is_pending());
}

#[test]
fn test_throttle_with_last_rejects_negative_wait_time() {
    // Arrange
    let scheduler = VirtualScheduler::new();

    // Act
    let result =
        ThrottledWithLast::<Query, VirtualRuntime>::with_scheduler_millis(|_| {}, 100, -1, scheduler);

    // Assert
    match result {
        Err(PacerError::InvalidArgument { context }) => assert!(context.contains("wait_time")),
        other => panic!("Expected InvalidArgument, got {other:?}"),
    }
}
