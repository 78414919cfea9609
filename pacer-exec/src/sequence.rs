// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use core::future::Future;
use futures::future::BoxFuture;
use futures::stream::{Stream, StreamExt};
use futures::FutureExt;
use pacer_core::{PacerError, Result};
use std::error::Error;

/// A type-erased fallible step, for chains mixing different closures.
pub type BoxedStep<T, E> = Box<dyn FnOnce(T) -> BoxFuture<'static, core::result::Result<T, E>> + Send>;

/// Boxes `step` so that steps built from different closures fit in one chain.
///
/// ```
/// use pacer_exec::{boxed_step, chain, BoxedStep};
///
/// # #[tokio::main]
/// # async fn main() -> pacer_core::Result<()> {
/// let steps: Vec<BoxedStep<u32, std::num::TryFromIntError>> = vec![
///     boxed_step(|n: u32| async move { Ok(n + 1) }),
///     boxed_step(|n: u32| async move { u8::try_from(n * 10).map(u32::from) }),
/// ];
///
/// assert_eq!(chain(1, steps).await?, 20);
/// # Ok(())
/// # }
/// ```
pub fn boxed_step<T, E, F, Fut>(step: F) -> BoxedStep<T, E>
where
    F: FnOnce(T) -> Fut + Send + 'static,
    Fut: Future<Output = core::result::Result<T, E>> + Send + 'static,
{
    Box::new(move |value| step(value).boxed())
}

/// Awaits each step only after the previous one has completed.
///
/// Returns the outputs in step order. Nothing runs concurrently: step `n + 1`
/// is not even constructed until step `n` has resolved.
pub async fn run_sequentially<I, F, Fut>(steps: I) -> Vec<Fut::Output>
where
    I: IntoIterator<Item = F>,
    F: FnOnce() -> Fut,
    Fut: Future,
{
    let mut outputs = Vec::new();
    for step in steps {
        pacer_core::trace!(completed = outputs.len(), "sequence: running step");
        outputs.push(step().await);
    }
    outputs
}

/// Threads `initial` through fallible async steps, stopping at the first error.
///
/// # Errors
///
/// Returns [`PacerError::StepFailed`] carrying the zero-based index of the
/// failing step and its error. Later steps are not run.
pub async fn chain<T, E, I, F, Fut>(initial: T, steps: I) -> Result<T>
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> Fut,
    Fut: Future<Output = core::result::Result<T, E>>,
    E: Error + Send + Sync + 'static,
{
    let mut value = initial;
    for (index, step) in steps.into_iter().enumerate() {
        value = step(value).await.map_err(|error| {
            pacer_core::warn!(index, "chain: step failed");
            PacerError::step_failed(index, error)
        })?;
    }
    Ok(value)
}

/// Sequential processing of stream items with an async handler.
#[async_trait]
pub trait SequenceExt<T>: Stream<Item = T> + Sized {
    /// Runs `handler` on each item in arrival order, one at a time, and
    /// collects the outputs once the stream ends.
    async fn chain_steps<F, Fut, O>(self, handler: F) -> Vec<O>
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = O> + Send + 'static,
        O: Send + 'static;

    /// Like [`chain_steps`](SequenceExt::chain_steps) for a fallible handler.
    ///
    /// # Errors
    ///
    /// Stops at the first failing item and returns
    /// [`PacerError::StepFailed`] with that item's zero-based position.
    async fn try_chain_steps<F, Fut, O, E>(self, handler: F) -> Result<Vec<O>>
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<O, E>> + Send + 'static,
        O: Send + 'static,
        E: Error + Send + Sync + 'static;
}

#[async_trait]
impl<S, T> SequenceExt<T> for S
where
    S: Stream<Item = T> + Send + 'static,
    T: Send + 'static,
{
    async fn chain_steps<F, Fut, O>(self, mut handler: F) -> Vec<O>
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = O> + Send + 'static,
        O: Send + 'static,
    {
        let mut stream = Box::pin(self);
        let mut outputs = Vec::new();
        while let Some(item) = stream.next().await {
            outputs.push(handler(item).await);
        }
        outputs
    }

    async fn try_chain_steps<F, Fut, O, E>(self, mut handler: F) -> Result<Vec<O>>
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = core::result::Result<O, E>> + Send + 'static,
        O: Send + 'static,
        E: Error + Send + Sync + 'static,
    {
        let mut stream = Box::pin(self);
        let mut outputs = Vec::new();
        let mut index = 0;
        while let Some(item) = stream.next().await {
            let output = handler(item).await.map_err(|error| {
                pacer_core::warn!(index, "sequence: item failed, stopping");
                PacerError::step_failed(index, error)
            })?;
            outputs.push(output);
            index += 1;
        }
        Ok(outputs)
    }
}
