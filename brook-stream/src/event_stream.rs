// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::combine_latest::CombineLatestExt;
use crate::distinct_until_changed::DistinctUntilChangedExt;
use crate::filter::FilterValuesExt;
use crate::filter_map::FilterMapValuesExt;
use crate::map::MapValuesExt;
use crate::merge::MergeExt;
use crate::on_error::OnErrorExt;
use crate::scan::ScanValuesExt;
use crate::skip_events::SkipEventsExt;
use crate::start_with::StartWithExt;
use crate::take_events::TakeEventsExt;
use crate::tap::TapExt;
use brook_core::source::SourceBoxStream;
use brook_core::{BrookError, Event, EventSource, IntoEventStream, SourceError};
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Boxed, type-erased event stream.
pub type BoxEventStream<T> = Pin<Box<dyn Stream<Item = Event<T>> + Send + 'static>>;

/// A concrete wrapper that provides all brook combinators as inherent
/// methods.
///
/// `EventStream` wraps any stream of [`Event<T>`] and exposes the derived
/// transformations of the signal/stream abstraction directly, allowing easy
/// chaining:
///
/// ```
/// use brook_core::EventSource;
/// use brook_stream::EventStream;
///
/// let clicks = EventSource::<String>::new();
/// let non_empty = EventStream::from_source(&clicks)
///     .unwrap()
///     .map(|text| text.trim().to_string())
///     .filter(|text| !text.is_empty());
/// # drop(non_empty);
/// ```
///
/// The wrapper is purely functional: it consumes `self` on every combinator.
/// To push values into a pipeline, use an [`EventSource`] (production) or a
/// `TestChannel` from `brook-test-utils` (tests).
#[pin_project]
pub struct EventStream<S> {
    #[pin]
    inner: S,
}

impl<S> EventStream<S> {
    /// Wraps a stream in an `EventStream`.
    pub const fn new(stream: S) -> Self {
        Self { inner: stream }
    }

    /// Unwraps to the inner stream.
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Creates an `EventStream` from any existing stream.
    ///
    /// An alias for [`EventStream::new`], kept for discoverability.
    pub fn from_stream(stream: S) -> Self {
        Self::new(stream)
    }
}

// Separate impl for constructors that fix the type parameter
impl EventStream<()> {
    /// Subscribes to an [`EventSource`] and wraps the subscription.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Closed` if the source has been closed.
    pub fn from_source<T>(
        source: &EventSource<T>,
    ) -> Result<EventStream<SourceBoxStream<T>>, SourceError>
    where
        T: Clone + Send + Sync + 'static,
    {
        Ok(EventStream::new(source.subscribe()?))
    }

    /// Creates an `EventStream` from a tokio unbounded receiver.
    ///
    /// Received values are wrapped into `Event::Next`. This is the common
    /// constructor for pipelines fed by other async tasks.
    pub fn from_unbounded_receiver<T>(
        receiver: tokio::sync::mpsc::UnboundedReceiver<T>,
    ) -> EventStream<BoxEventStream<T>>
    where
        T: Send + 'static,
    {
        let stream =
            tokio_stream::wrappers::UnboundedReceiverStream::new(receiver).map(Event::Next);
        EventStream::new(Box::pin(stream) as BoxEventStream<T>)
    }

    /// Creates a cold, finite `EventStream` over the given values.
    ///
    /// Useful for composition and tests.
    pub fn from_values<T>(values: Vec<T>) -> EventStream<BoxEventStream<T>>
    where
        T: Send + 'static,
    {
        let events = values.into_iter().map(Event::Next).collect::<Vec<_>>();
        EventStream::new(Box::pin(futures::stream::iter(events)) as BoxEventStream<T>)
    }
}

impl<S> Stream for EventStream<S>
where
    S: Stream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S, T> EventStream<S>
where
    S: Stream<Item = Event<T>> + Send + 'static,
    T: Send + 'static,
{
    /// Transforms each value with `f`; errors pass through unchanged.
    ///
    /// This is the `map` of the signal/stream abstraction: deriving a new
    /// stream of transformed values from an existing one.
    ///
    /// # See Also
    ///
    /// - [`filter`](EventStream::filter) - keep only matching values
    pub fn map<U, F>(self, f: F) -> EventStream<impl Stream<Item = Event<U>> + Send>
    where
        F: FnMut(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        EventStream::new(self.into_inner().map_values(f))
    }

    /// Keeps only values satisfying `predicate`; errors pass through.
    ///
    /// # See Also
    ///
    /// - [`map`](EventStream::map) - transform values
    /// - [`filter_map`](EventStream::filter_map) - fused map and filter
    pub fn filter<F>(self, predicate: F) -> EventStream<impl Stream<Item = Event<T>> + Send>
    where
        F: FnMut(&T) -> bool + Send + 'static,
    {
        EventStream::new(self.into_inner().filter_values(predicate))
    }

    /// Transforms each value with `f`, dropping values mapped to `None`.
    pub fn filter_map<U, F>(self, f: F) -> EventStream<impl Stream<Item = Event<U>> + Send>
    where
        F: FnMut(T) -> Option<U> + Send + 'static,
        U: Send + 'static,
    {
        EventStream::new(self.into_inner().filter_map_values(f))
    }

    /// Folds values into an accumulator, emitting every intermediate state.
    pub fn scan<Acc, F>(
        self,
        initial: Acc,
        f: F,
    ) -> EventStream<impl Stream<Item = Event<Acc>> + Send>
    where
        Acc: Clone + Send + 'static,
        F: FnMut(&Acc, T) -> Acc + Send + 'static,
    {
        EventStream::new(self.into_inner().scan_values(initial, f))
    }

    /// Suppresses consecutive duplicate values.
    pub fn distinct_until_changed(self) -> EventStream<impl Stream<Item = Event<T>> + Send>
    where
        T: Clone + PartialEq,
    {
        EventStream::new(self.into_inner().distinct_until_changed())
    }

    /// Interleaves this stream with `others` in arrival order.
    pub fn merge<IS>(self, others: Vec<IS>) -> EventStream<impl Stream<Item = Event<T>> + Send>
    where
        IS: IntoEventStream<Item = Event<T>>,
        IS::Stream: Send + 'static,
    {
        EventStream::new(MergeExt::merge(self.into_inner(), others))
    }

    /// Combines this stream with `others`, emitting `selector` over the
    /// latest values whenever any input emits.
    pub fn combine_latest<IS, R, F>(
        self,
        others: Vec<IS>,
        selector: F,
    ) -> EventStream<BoxEventStream<R>>
    where
        IS: IntoEventStream<Item = Event<T>>,
        IS::Stream: Send + 'static,
        T: Clone,
        F: Fn(&[T]) -> R + Send + 'static,
        R: Send + 'static,
    {
        EventStream::new(CombineLatestExt::combine_latest(
            self.into_inner(),
            others,
            selector,
        ))
    }

    /// Prepends initial values to the stream.
    pub fn start_with(
        self,
        initial_values: Vec<T>,
    ) -> EventStream<impl Stream<Item = Event<T>> + Send> {
        EventStream::new(self.into_inner().start_with(initial_values))
    }

    /// Emits only the first `n` events, then ends the stream.
    pub fn take_events(self, n: usize) -> EventStream<impl Stream<Item = Event<T>> + Send> {
        EventStream::new(self.into_inner().take_events(n))
    }

    /// Discards the first `n` events, emitting everything after them.
    pub fn skip_events(self, n: usize) -> EventStream<impl Stream<Item = Event<T>> + Send> {
        EventStream::new(self.into_inner().skip_events(n))
    }

    /// Invokes `f` for each value without affecting the stream.
    pub fn tap<F>(self, f: F) -> EventStream<impl Stream<Item = Event<T>> + Send>
    where
        F: FnMut(&T) + Send + 'static,
    {
        EventStream::new(TapExt::tap(self.into_inner(), f))
    }

    /// Handles errors with `handler`: `true` consumes, `false` propagates.
    pub fn on_error<F>(self, handler: F) -> EventStream<impl Stream<Item = Event<T>> + Send>
    where
        F: FnMut(&BrookError) -> bool + Send + 'static,
    {
        EventStream::new(self.into_inner().on_error(handler))
    }

    /// Boxes the inner stream, erasing its type.
    ///
    /// Handy before handing the stream to an `on_value` subscription, which
    /// needs an `Unpin` stream.
    pub fn boxed(self) -> EventStream<BoxEventStream<T>> {
        EventStream::new(Box::pin(self.into_inner()) as BoxEventStream<T>)
    }
}
