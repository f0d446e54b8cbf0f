//! Range traits.
//!
//! A range hands out a cursor to its first element and a sentinel for its end.
//! Shared and exclusive traversal are separate traits, which is how the
//! const/non-const overload pairs of a C++ range map onto Rust receivers:
//!
//! - [`Range::begin`] takes `&self` and yields [`Readable`] cursors. Views with
//!   reference semantics (`&[T]`, `&Vec<T>`, adaptors over them) implement it.
//! - [`RangeMut::begin_mut`] takes `&mut self` and yields [`Writable`] cursors
//!   borrowing the range. Owning or mutably borrowing ranges implement it.
//!
//! A range that only implements [`Range`] is "simple": shared and exclusive
//! traversal would behave the same, so there is a single code path.

use crate::algo::Walk;
use crate::cursor::{Readable, Writable};
use crate::sentinel::Sentinel;

/// Anything with an element type.
pub trait View {
    type Element;
}

pub trait Range: View {
    type Cursor: Readable;
    type Sentinel: Sentinel<Self::Cursor>;

    fn begin(&self) -> Self::Cursor;

    fn end(&self) -> Self::Sentinel;

    /// Consumes the range front to back with an [`Iterator`].
    fn walk(&self) -> Walk<Self::Cursor, Self::Sentinel> {
        Walk::new(self.begin(), self.end())
    }
}

pub trait RangeMut: View {
    type CursorMut<'s>: Writable<Target = Self::Element>
    where
        Self: 's;

    /// Sentinels carry no borrow, so the end can be taken before a mutable
    /// cursor is created and compared against it afterwards.
    type SentinelMut;

    fn begin_mut(&mut self) -> Self::CursorMut<'_>;

    fn end_mut(&self) -> Self::SentinelMut;
}

/// A range whose length is known without traversing it.
pub trait SizedRange: View {
    fn size(&self) -> usize;
}
