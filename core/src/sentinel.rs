//! End markers.
//!
//! A sentinel marks the end of a range without being a cursor itself. Keeping
//! the two types apart lets a sentinel be a plain index, so it can be obtained
//! once and compared against a cursor that holds a mutable borrow of the data.

use crate::cursor::Cursor;

pub trait Sentinel<C: Cursor> {
    /// Whether `cursor` has reached this end.
    fn is_end(&self, cursor: &C) -> bool;
}

/// A sentinel that can measure how far a cursor is from it.
pub trait SizedSentinel<C: Cursor>: Sentinel<C> {
    /// Number of steps from `cursor` to this end (`end - cursor`).
    fn distance_from(&self, cursor: &C) -> isize;
}
