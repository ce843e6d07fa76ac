// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

use futures::Stream;

/// A trait for types that can be converted into a stream of events.
///
/// Operators that accept several inputs (`merge`, `combine_latest`) take
/// `IntoEventStream` so they work with wrapped streams, channels, and plain
/// streams alike, converting internally.
pub trait IntoEventStream {
    /// The item type of the resulting stream.
    type Item;
    /// The stream type this object converts into.
    type Stream: Stream<Item = Self::Item>;

    /// Converts this object into a stream.
    fn into_event_stream(self) -> Self::Stream;
}

/// Blanket implementation: any stream already is one.
impl<S> IntoEventStream for S
where
    S: Stream,
{
    type Item = S::Item;
    type Stream = S;

    fn into_event_stream(self) -> Self::Stream {
        self
    }
}
