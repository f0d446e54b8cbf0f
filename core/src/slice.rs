//! Cursors over slices.
//!
//! [`SliceCursor`] is the shared, copyable cursor; [`SliceCursorMut`] holds the
//! exclusive borrow and converts into a [`SliceCursor`] at the same position.
//! Both are contiguous. Positions compare by address, so cursors over
//! different subslices of the same buffer order correctly.
//!
//! Moving a cursor outside its slice is allowed; reading there panics through
//! the slice's own bounds check.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::mem::size_of;

use crate::category::IteratorCategory;
use crate::cursor::{
    Bidirectional, Contiguous, Cursor, Forward, IntoConst, RandomAccess, Readable, Writable,
};
use crate::range::{Range, RangeMut, SizedRange, View};
use crate::sentinel::{Sentinel, SizedSentinel};

#[inline(always)]
fn key<T>(slice: &[T], pos: usize) -> usize {
    // Zero-sized elements all live at the same address.
    if size_of::<T>() == 0 {
        pos
    } else {
        slice.as_ptr().wrapping_add(pos) as usize
    }
}

#[inline(always)]
fn distance<T>(from: usize, to: usize) -> isize {
    let bytes = to.wrapping_sub(from) as isize;
    match size_of::<T>() {
        0 => bytes,
        size => bytes / size as isize,
    }
}

// =============================================================================
// SliceCursor
// =============================================================================

pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub const fn new(slice: &'a [T], pos: usize) -> Self {
        SliceCursor { slice, pos }
    }

    pub const fn begin(slice: &'a [T]) -> Self {
        Self::new(slice, 0)
    }

    pub const fn end(slice: &'a [T]) -> Self {
        Self::new(slice, slice.len())
    }

    /// Index of the current position within the underlying slice.
    pub const fn position(&self) -> usize {
        self.pos
    }

    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }

    fn key(&self) -> usize {
        key(self.slice, self.pos)
    }
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<T> Default for SliceCursor<'_, T> {
    fn default() -> Self {
        SliceCursor::new(&[], 0)
    }
}

impl<T> fmt::Debug for SliceCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("position", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> Eq for SliceCursor<'_, T> {}

impl<T> PartialOrd for SliceCursor<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for SliceCursor<'_, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T> Cursor for SliceCursor<'_, T> {
    const CONCEPT: IteratorCategory = IteratorCategory::Contiguous;

    #[inline]
    fn step(&mut self) {
        self.pos = self.pos.wrapping_add(1);
    }
}

impl<T> Forward for SliceCursor<'_, T> {}

impl<T> Bidirectional for SliceCursor<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.pos = self.pos.wrapping_sub(1);
    }
}

impl<T> RandomAccess for SliceCursor<'_, T> {
    #[inline]
    fn advance(&mut self, n: isize) {
        self.pos = self.pos.wrapping_add_signed(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        distance::<T>(self.key(), other.key())
    }
}

impl<T> Contiguous for SliceCursor<'_, T> {
    type Element = T;

    fn address(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.pos)
    }
}

impl<'a, T> Readable for SliceCursor<'a, T> {
    type Ref = &'a T;

    #[inline]
    fn read(&self) -> &'a T {
        &self.slice[self.pos]
    }
}

impl<'a, T> IntoConst for SliceCursor<'a, T> {
    type Const = Self;

    fn into_const(self) -> Self {
        self
    }
}

// =============================================================================
// SliceCursorMut
// =============================================================================

/// Exclusive cursor. Not [`Clone`]: two copies could hand out aliasing
/// mutable references to the same element.
pub struct SliceCursorMut<'a, T> {
    slice: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceCursorMut<'a, T> {
    pub fn new(slice: &'a mut [T], pos: usize) -> Self {
        SliceCursorMut { slice, pos }
    }

    pub fn begin(slice: &'a mut [T]) -> Self {
        Self::new(slice, 0)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    fn key(&self) -> usize {
        key(self.slice, self.pos)
    }
}

impl<T> fmt::Debug for SliceCursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursorMut")
            .field("position", &self.pos)
            .field("len", &self.slice.len())
            .finish()
    }
}

impl<T> PartialEq for SliceCursorMut<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<T> PartialOrd for SliceCursorMut<'_, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.key().cmp(&other.key()))
    }
}

impl<T> Cursor for SliceCursorMut<'_, T> {
    const CONCEPT: IteratorCategory = IteratorCategory::Contiguous;

    #[inline]
    fn step(&mut self) {
        self.pos = self.pos.wrapping_add(1);
    }
}

impl<T> Bidirectional for SliceCursorMut<'_, T> {
    #[inline]
    fn step_back(&mut self) {
        self.pos = self.pos.wrapping_sub(1);
    }
}

impl<T> RandomAccess for SliceCursorMut<'_, T> {
    #[inline]
    fn advance(&mut self, n: isize) {
        self.pos = self.pos.wrapping_add_signed(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        distance::<T>(self.key(), other.key())
    }
}

impl<T> Contiguous for SliceCursorMut<'_, T> {
    type Element = T;

    fn address(&self) -> *const T {
        self.slice.as_ptr().wrapping_add(self.pos)
    }
}

impl<T> Writable for SliceCursorMut<'_, T> {
    type Target = T;

    #[inline]
    fn read_mut(&mut self) -> &mut T {
        &mut self.slice[self.pos]
    }
}

impl<'a, T> IntoConst for SliceCursorMut<'a, T> {
    type Const = SliceCursor<'a, T>;

    fn into_const(self) -> SliceCursor<'a, T> {
        SliceCursor::new(self.slice, self.pos)
    }
}

impl<'a, T> From<SliceCursorMut<'a, T>> for SliceCursor<'a, T> {
    fn from(cursor: SliceCursorMut<'a, T>) -> Self {
        cursor.into_const()
    }
}

// =============================================================================
// SliceEnd
// =============================================================================

/// End of a slice, stored as an index. Only meaningful for cursors over the
/// slice it was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SliceEnd {
    index: usize,
}

impl SliceEnd {
    pub const fn at(index: usize) -> Self {
        SliceEnd { index }
    }

    pub const fn of<T>(slice: &[T]) -> Self {
        Self::at(slice.len())
    }

    pub const fn index(self) -> usize {
        self.index
    }
}

static_assertions::assert_eq_size!(SliceEnd, usize);
static_assertions::assert_eq_size!(SliceCursor<'static, u64>, [usize; 3]);
static_assertions::assert_eq_size!(SliceCursorMut<'static, u64>, [usize; 3]);

impl<T> Sentinel<SliceCursor<'_, T>> for SliceEnd {
    fn is_end(&self, cursor: &SliceCursor<'_, T>) -> bool {
        cursor.pos == self.index
    }
}

impl<T> SizedSentinel<SliceCursor<'_, T>> for SliceEnd {
    fn distance_from(&self, cursor: &SliceCursor<'_, T>) -> isize {
        self.index as isize - cursor.pos as isize
    }
}

impl<T> Sentinel<SliceCursorMut<'_, T>> for SliceEnd {
    fn is_end(&self, cursor: &SliceCursorMut<'_, T>) -> bool {
        cursor.pos == self.index
    }
}

impl<T> SizedSentinel<SliceCursorMut<'_, T>> for SliceEnd {
    fn distance_from(&self, cursor: &SliceCursorMut<'_, T>) -> isize {
        self.index as isize - cursor.pos as isize
    }
}

// =============================================================================
// Ranges
// =============================================================================

impl<'a, T> View for &'a [T] {
    type Element = T;
}

impl<'a, T> Range for &'a [T] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceEnd;

    fn begin(&self) -> SliceCursor<'a, T> {
        SliceCursor::begin(*self)
    }

    fn end(&self) -> SliceEnd {
        SliceEnd::of(*self)
    }
}

impl<T> SizedRange for &[T] {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'a, T> View for &'a Vec<T> {
    type Element = T;
}

impl<'a, T> Range for &'a Vec<T> {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceEnd;

    fn begin(&self) -> SliceCursor<'a, T> {
        let vec: &'a Vec<T> = *self;
        SliceCursor::begin(vec.as_slice())
    }

    fn end(&self) -> SliceEnd {
        SliceEnd::at(self.len())
    }
}

impl<T> SizedRange for &Vec<T> {
    fn size(&self) -> usize {
        self.len()
    }
}

impl<'a, T, const M: usize> View for &'a [T; M] {
    type Element = T;
}

impl<'a, T, const M: usize> Range for &'a [T; M] {
    type Cursor = SliceCursor<'a, T>;
    type Sentinel = SliceEnd;

    fn begin(&self) -> SliceCursor<'a, T> {
        let array: &'a [T; M] = *self;
        SliceCursor::begin(array)
    }

    fn end(&self) -> SliceEnd {
        SliceEnd::at(M)
    }
}

impl<T, const M: usize> SizedRange for &[T; M] {
    fn size(&self) -> usize {
        M
    }
}

macro_rules! exclusive_slice_range {
    ($(impl<$($param:tt),*> for $ty:ty;)+) => {$(
        impl<$($param),*> View for $ty {
            type Element = T;
        }

        impl<$($param),*> RangeMut for $ty {
            type CursorMut<'s>
                = SliceCursorMut<'s, T>
            where
                Self: 's;
            type SentinelMut = SliceEnd;

            fn begin_mut(&mut self) -> SliceCursorMut<'_, T> {
                SliceCursorMut::begin(&mut self[..])
            }

            fn end_mut(&self) -> SliceEnd {
                SliceEnd::of(&self[..])
            }
        }

        impl<$($param),*> SizedRange for $ty {
            fn size(&self) -> usize {
                self.len()
            }
        }
    )+};
}

exclusive_slice_range! {
    impl<'a, T> for &'a mut [T];
    impl<'a, T> for &'a mut Vec<T>;
    impl<T> for Vec<T>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::read_at;

    #[test]
    fn reads_follow_steps() {
        let data = [1, 2, 3];
        let mut cursor = SliceCursor::begin(&data);
        assert_eq!(*cursor.read(), 1);
        cursor.step();
        assert_eq!(*cursor.read(), 2);
        cursor.step_back();
        assert_eq!(*cursor.read(), 1);
        assert_eq!(*read_at(&cursor, 2), 3);
    }

    #[test]
    fn positions_compare_by_address() {
        let data = [1, 2, 3, 4];
        let whole = SliceCursor::new(&data, 2);
        let tail = SliceCursor::new(&data[1..], 1);
        assert_eq!(whole, tail);
        assert!(SliceCursor::new(&data[1..], 0) < whole);
        assert_eq!(SliceCursor::begin(&data).distance_to(&tail), 2);
        assert_eq!(tail.distance_to(&SliceCursor::begin(&data)), -2);
    }

    #[test]
    fn zero_sized_elements_use_positions() {
        let data = [(), (), ()];
        let a = SliceCursor::new(&data, 0);
        let b = SliceCursor::new(&data, 3);
        assert_ne!(a, b);
        assert_eq!(a.distance_to(&b), 3);
    }

    #[test]
    fn mutable_cursor_writes_and_converts() {
        let mut data = [1, 2, 3];
        let mut cursor = SliceCursorMut::begin(&mut data);
        cursor.advance(1);
        *cursor.read_mut() = 20;
        let shared: SliceCursor<'_, i32> = cursor.into();
        assert_eq!(shared.position(), 1);
        assert_eq!(*shared.read(), 20);
    }

    #[test]
    fn sentinel_distances() {
        let data = [0u8; 4];
        let end = SliceEnd::of(&data);
        let cursor = SliceCursor::new(&data, 1);
        assert!(!end.is_end(&cursor));
        assert_eq!(end.distance_from(&cursor), 3);
        assert!(end.is_end(&SliceCursor::end(&data)));
    }

    #[test]
    fn shared_ranges_over_arrays_and_vectors() {
        let array = [5, 6, 7];
        let vec = vec![5, 6, 7];
        assert_eq!((&array).size(), 3);
        assert_eq!((&vec).walk().copied().collect::<Vec<_>>(), [5, 6, 7]);
        assert_eq!((&array).begin(), SliceCursor::begin(&array));
    }

    #[test]
    #[should_panic]
    fn reading_outside_the_slice_panics() {
        let data = [1];
        SliceCursor::end(&data).read();
    }
}
