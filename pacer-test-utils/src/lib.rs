// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the pacer workspace.
//!
//! This crate is for development and testing only.
//!
//! # Key Types
//!
//! ## `VirtualScheduler`
//!
//! A manually driven clock and scheduler. Nothing happens until the test calls
//! [`VirtualScheduler::advance`], which fires every due callback in deadline
//! order and moves the clock forward:
//!
//! ```rust
//! use pacer_runtime::scheduler::Scheduler;
//! use pacer_runtime::timer::Timer;
//! use pacer_test_utils::VirtualScheduler;
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let fired = Arc::new(AtomicBool::new(false));
//! let flag = fired.clone();
//!
//! scheduler.schedule_after(Duration::from_millis(100), move || flag.store(true, Ordering::SeqCst));
//!
//! scheduler.advance(Duration::from_millis(99));
//! assert!(!fired.load(Ordering::SeqCst));
//!
//! scheduler.advance(Duration::from_millis(1));
//! assert!(fired.load(Ordering::SeqCst));
//! assert_eq!(scheduler.now().as_millis(), 100);
//! ```
//!
//! ## `CallRecorder` / `TimedCallRecorder`
//!
//! Actions that remember the arguments (and virtual time) of every execution.
//!
//! ## Fixtures
//!
//! `Query` values modelling keystrokes in a search box, the canonical
//! debounce/throttle input.
//!
//! # Module Organization
//!
//! - `virtual_time` - `VirtualScheduler`, `VirtualInstant`, `VirtualRuntime`
//! - `recorder` - recording actions
//! - `test_data` - `Query` fixtures
//! - `helpers` - channel assertions with timeouts

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod recorder;
pub mod test_data;
pub mod virtual_time;

pub use helpers::{assert_no_recv, recv_timeout};
pub use recorder::{CallRecorder, TimedCallRecorder};
pub use test_data::Query;
pub use virtual_time::{VirtualInstant, VirtualRuntime, VirtualScheduler, VirtualSleep, VirtualTaskId};
