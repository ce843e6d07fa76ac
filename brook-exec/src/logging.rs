// Copyright 2026 The brook developers
// SPDX-License-Identifier: MIT OR Apache-2.0

// Conditional logging shim: uses `tracing` when enabled, falls back to stderr.

#[cfg(feature = "tracing")]
macro_rules! warn_dropped {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_dropped {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}
