// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Convenient imports for working with brook streams.

pub use crate::{
    BoxEventStream, CombineLatestExt, DistinctUntilChangedExt, EventStream, FilterMapValuesExt,
    FilterValuesExt, MapValuesExt, MergeExt, OnErrorExt, ScanValuesExt, SkipEventsExt,
    StartWithExt, TakeEventsExt, TapExt,
};
pub use brook_core::{BrookError, Event, EventSource, IntoEventStream, Unsubscriber};
