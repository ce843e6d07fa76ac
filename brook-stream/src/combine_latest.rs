// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Latest-values combination across several inputs.

use brook_core::{Event, IntoEventStream};
use futures::future::ready;
use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

type TaggedStream<T> = Pin<Box<dyn Stream<Item = (Event<T>, usize)> + Send>>;

// Latest value observed from each input; emission starts once every slot is
// filled.
struct LatestValues<T> {
    slots: Vec<Option<T>>,
}

impl<T: Clone> LatestValues<T> {
    fn new(inputs: usize) -> Self {
        Self {
            slots: (0..inputs).map(|_| None).collect(),
        }
    }

    fn insert(&mut self, index: usize, value: T) {
        self.slots[index] = Some(value);
    }

    fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    fn snapshot(&self) -> Vec<T> {
        self.slots.iter().filter_map(Clone::clone).collect()
    }
}

// Tags each input with its index (0 for `self`, 1+ for `others`).
fn tag_streams<T, S, IS>(first: S, others: Vec<IS>) -> Vec<TaggedStream<T>>
where
    T: Send + 'static,
    S: Stream<Item = Event<T>> + Send + 'static,
    IS: IntoEventStream<Item = Event<T>>,
    IS::Stream: Send + 'static,
{
    let mut streams: Vec<TaggedStream<T>> = Vec::with_capacity(others.len() + 1);
    streams.push(Box::pin(first.map(|event| (event, 0_usize))));
    for (index, other) in others.into_iter().enumerate() {
        let tag = index + 1;
        streams.push(Box::pin(
            other.into_event_stream().map(move |event| (event, tag)),
        ));
    }
    streams
}

/// Extension trait providing the `combine_latest` operator for event streams.
pub trait CombineLatestExt<T>: Stream<Item = Event<T>> + Sized {
    /// Combines this stream with `others`, emitting `selector` applied to the
    /// latest values whenever any input emits.
    ///
    /// # Behavior
    ///
    /// - Nothing is emitted until every input has produced at least one value
    /// - After that, every emission from any input produces a combined value
    /// - Inputs are processed in arrival order
    /// - Errors from any input propagate immediately, without touching the
    ///   combined state
    ///
    /// # Arguments
    ///
    /// * `others` - additional input streams of the same event type
    /// * `selector` - combines the latest values (ordered: `self` first,
    ///   then `others` in the order given) into the output value
    fn combine_latest<IS, R, F>(
        self,
        others: Vec<IS>,
        selector: F,
    ) -> Pin<Box<dyn Stream<Item = Event<R>> + Send>>
    where
        Self: Send + 'static,
        IS: IntoEventStream<Item = Event<T>>,
        IS::Stream: Send + 'static,
        T: Clone + Send + 'static,
        F: Fn(&[T]) -> R + Send + 'static,
        R: Send + 'static;
}

impl<S, T> CombineLatestExt<T> for S
where
    S: Stream<Item = Event<T>>,
{
    fn combine_latest<IS, R, F>(
        self,
        others: Vec<IS>,
        selector: F,
    ) -> Pin<Box<dyn Stream<Item = Event<R>> + Send>>
    where
        Self: Send + 'static,
        IS: IntoEventStream<Item = Event<T>>,
        IS::Stream: Send + 'static,
        T: Clone + Send + 'static,
        F: Fn(&[T]) -> R + Send + 'static,
        R: Send + 'static,
    {
        let streams = tag_streams(self, others);
        let inputs = streams.len();
        let merged = futures::stream::select_all(streams);

        let latest = Arc::new(Mutex::new(LatestValues::new(inputs)));
        let combined = merged.filter_map(move |(event, index)| {
            let out = match event {
                Event::Next(value) => {
                    let mut latest = latest.lock();
                    latest.insert(index, value);
                    if latest.is_complete() {
                        Some(Event::Next(selector(&latest.snapshot())))
                    } else {
                        None
                    }
                }
                Event::Error(error) => Some(Event::Error(error)),
            };
            ready(out)
        });

        Box::pin(combined)
    }
}
