// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Errors specific to event-source lifecycle operations.
///
/// These are distinct from stream processing errors: they describe the state
/// of the source itself, not a failure travelling through a stream.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source has been closed and no longer accepts items or subscribers.
    #[error("event source is closed")]
    Closed,
}
