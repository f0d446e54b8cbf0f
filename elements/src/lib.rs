#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

//! Views of one element of every tuple-like element of a range.
//!
//! [`ElementsView<V, N>`] adapts a range of tuples (or arrays) into a range of
//! their `N`th elements. It is the building block for [`KeysView`] and
//! [`ValuesView`] over ranges of pairs.
//!
//! What a read yields follows what the underlying cursor reads:
//!
//! - A reference to a tuple projects to a reference into it. Writes through
//!   [`RangeMut`](boundview_core::RangeMut) cursors land in the tuple.
//! - An owned tuple, such as one computed by a
//!   [`TransformView`](boundview_core::TransformView), projects to the owned
//!   element, and the cursor advertises the input category.
//!
//! ```
//! use boundview_core::Range;
//! use boundview_elements::{keys, values};
//!
//! let data = [(1, "a"), (2, "b"), (3, "c")];
//! assert_eq!(keys(&data).walk().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert_eq!(values(&data).walk().copied().collect::<Vec<_>>(), ["a", "b", "c"]);
//! assert_eq!(*keys(&data).begin().at(1), 2);
//! ```

extern crate alloc;

pub mod cursor;
pub mod view;

pub use cursor::{ElementsCursor, ElementsSentinel};
pub use view::{ElementsView, KeysView, ValuesView, keys, values};
