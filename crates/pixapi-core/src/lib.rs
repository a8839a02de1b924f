//! pixapi core: request-counting primitives and the shared error surface.
//!
//! This crate defines the metrics instrument (counter, registry, exposition
//! serializer) and the error type shared by the gateway and tests. It
//! intentionally carries no transport or runtime dependencies so it can be
//! reused in multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PixApiError`/`Result` so production
//! processes do not crash on bad input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;

/// Shared result type.
pub use error::{PixApiError, Result};
