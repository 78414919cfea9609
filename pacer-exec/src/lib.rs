// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Execution helpers that complement the pacer wrappers.
//!
//! - [`run_sequentially`] and [`chain`] await async steps strictly one after
//!   another; [`SequenceExt`] does the same for the items of a stream
//! - [`measure`] and [`measure_sync`] time work against an injected
//!   [`Timer`](pacer_runtime::timer::Timer)
//! - [`Memoized`] caches the result of a string-keyed computation

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub mod memoize;
pub mod sequence;
pub mod timing;

pub use memoize::Memoized;
pub use sequence::{boxed_step, chain, run_sequentially, BoxedStep, SequenceExt};
pub use timing::{measure, measure_sync};
