//! Boundview - bounds-checked cursors and tuple element views
//!
//! # Overview
//!
//! Boundview provides two independent range building blocks:
//!
//! - [`StaticBoundedIter`]: a contiguous cursor confined to a window whose size
//!   is known at compile time. Reads, indexing and movement outside the window
//!   trap when hardening is enabled.
//! - [`ElementsView`]: a view projecting element `N` out of every tuple-like
//!   element of another range, with [`KeysView`] and [`ValuesView`] for pairs.
//!
//! Both are built on the cursor and range traits of `boundview-core`,
//! re-exported here.
//!
//! # Quick Start
//!
//! ```
//! use boundview::{Range, RandomAccess, Readable, StaticBoundedIter, keys, values};
//!
//! let data = [(1, "a"), (2, "b"), (3, "c")];
//!
//! // Project keys and values out of the pairs.
//! assert_eq!(keys(&data).walk().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(values(&data).walk().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//! assert_eq!(*keys(&data).begin().at(1), 2);
//!
//! // Walk the array through a window that knows its size.
//! let mut it = StaticBoundedIter::from_array(&data);
//! it.advance(2);
//! assert_eq!(it.read().1, "c");
//! assert_eq!(it.remaining(), 1);
//! ```
//!
//! # Hardening
//!
//! Out-of-window operations on a [`StaticBoundedIter`] are checked according to
//! [`hardening::MODE`], selected with the `hardening-none`, `hardening-fast`,
//! `hardening-extensive` and `hardening-debug` features. Without any of them,
//! debug builds check everything and release builds check nothing.
//!
//! ```should_panic
//! use boundview::{Readable, StaticBoundedIter};
//!
//! let data = [1, 2, 3];
//! let end = StaticBoundedIter::from_array_end(&data);
//! // Panics: the end of the window is not dereferenceable.
//! let _ = end.read();
//! ```

// Re-export the cursor and range vocabulary
pub use boundview_core::{
    Bidirectional, Contiguous, Cursor, Forward, IntoConst, IteratorCategory, RandomAccess,
    Range, RangeMut, Readable, Sentinel, SizedRange, SizedSentinel, SliceCursor, SliceCursorMut,
    SliceEnd, TransformView, View, Walk, Writable, hardening, tuple,
};

// Re-export the adaptors
pub use boundview_bounded_iter::{EmptyBoundedIter, StaticBoundedIter};
pub use boundview_elements::{
    ElementsCursor, ElementsSentinel, ElementsView, KeysView, ValuesView, keys, values,
};
