#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![deny(unsafe_code)]

//! Cursor and range vocabulary shared by the boundview adaptors.
//!
//! This crate provides:
//!
//! - the cursor hierarchy ([`Cursor`], [`Bidirectional`], [`RandomAccess`],
//!   [`Contiguous`]) with shared ([`Readable`]) and exclusive ([`Writable`])
//!   access,
//! - ranges ([`Range`], [`RangeMut`], [`SizedRange`]) and sentinels,
//! - tuple-like element access ([`tuple`]),
//! - slice cursors and a transform view to build ranges from,
//! - the [`hardening`] checks used by the checked cursors.

extern crate alloc;

pub mod algo;
pub mod category;
pub mod cursor;
pub mod hardening;
pub mod range;
pub mod sentinel;
pub mod slice;
pub mod transform;
pub mod tuple;

pub use algo::{Walk, for_each_mut};
pub use category::IteratorCategory;
pub use cursor::{
    Bidirectional, Contiguous, Cursor, Forward, IntoConst, RandomAccess, Readable, Writable,
};
pub use hardening::Violation;
pub use range::{Range, RangeMut, SizedRange, View};
pub use sentinel::{Sentinel, SizedSentinel};
pub use slice::{SliceCursor, SliceCursorMut, SliceEnd};
pub use transform::{TransformCursor, TransformSentinel, TransformView};
pub use tuple::{Project, TupleElement, TupleLike};

/// Test utilities for enabling logging in tests.
///
/// Other workspace crates reach these through the `test-utils` feature.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level.
    /// Call this at the start of tests where you want to see logging output.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }

    /// Runs `f` and returns the panic message if it panicked.
    pub fn trap_message<R>(f: impl FnOnce() -> R) -> Option<String> {
        std::panic::catch_unwind(std::panic::AssertUnwindSafe(f))
            .err()
            .map(|payload| match payload.downcast::<String>() {
                Ok(message) => *message,
                Err(payload) => payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
            })
    }
}
