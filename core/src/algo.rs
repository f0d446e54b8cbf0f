//! Consuming cursor/sentinel pairs.

use core::iter::FusedIterator;

use crate::cursor::{Readable, Writable};
use crate::sentinel::Sentinel;

/// An [`Iterator`] over the positions from a cursor up to a sentinel.
///
/// ```
/// use boundview_core::{Range, SliceCursor, SliceEnd, Walk};
///
/// let data = [1, 2, 3];
/// let walk = Walk::new(SliceCursor::begin(&data), SliceEnd::of(&data));
/// assert_eq!(walk.copied().collect::<Vec<_>>(), [1, 2, 3]);
/// assert_eq!((&data[1..]).walk().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Walk<C, S> {
    cursor: C,
    end: S,
}

impl<C, S> Walk<C, S> {
    pub fn new(cursor: C, end: S) -> Self {
        Walk { cursor, end }
    }

    /// The current position.
    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn into_parts(self) -> (C, S) {
        (self.cursor, self.end)
    }
}

impl<C, S> Iterator for Walk<C, S>
where
    C: Readable,
    S: Sentinel<C>,
{
    type Item = C::Ref;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end.is_end(&self.cursor) {
            return None;
        }
        let item = self.cursor.read();
        self.cursor.step();
        Some(item)
    }
}

impl<C, S> FusedIterator for Walk<C, S>
where
    C: Readable,
    S: Sentinel<C>,
{
}

/// Calls `f` with a mutable reference to every element from `cursor` up to `end`.
pub fn for_each_mut<C, S, F>(mut cursor: C, end: &S, mut f: F)
where
    C: Writable,
    S: Sentinel<C>,
    F: FnMut(&mut C::Target),
{
    while !end.is_end(&cursor) {
        f(cursor.read_mut());
        cursor.step();
    }
}

/// Number of positions from `cursor` up to `end`, found by stepping.
pub fn count<C, S>(mut cursor: C, end: &S) -> usize
where
    C: crate::cursor::Cursor,
    S: Sentinel<C>,
{
    let mut n = 0;
    while !end.is_end(&cursor) {
        cursor.step();
        n += 1;
    }
    n
}
