//! Bounds-checked contiguous cursors with a compile-time window size.
//!
//! A [`StaticBoundedIter<C, SIZE>`] wraps a contiguous cursor `C` together with
//! the beginning of the window it may traverse. The window is
//! `[begin, begin + SIZE]`; its end is computed, never stored. Every operation
//! that reads or moves checks that it stays inside the window:
//!
//! | Operation                       | Precondition                        |
//! |---------------------------------|-------------------------------------|
//! | [`read`], [`as_ptr`]            | `current != end`                    |
//! | [`at(n)`]                       | `begin <= current + n < end`        |
//! | [`step`], [`step_back`]         | result in `[begin, end]`            |
//! | [`advance`], `+`, `-`, `+=`, `-=` | result in `[begin, end]`          |
//!
//! A failed check is a [`Violation`] reported through
//! [`hardening`](boundview_core::hardening): it traps when the active mode checks
//! element access and is skipped otherwise.
//!
//! The wrapped cursor is copied to remember the window, so it is a shared
//! cursor such as [`SliceCursor`]; mutation goes through the elements
//! themselves (`Cell`, atomics).
//!
//! Comparisons look at the current position only. Two bounded iterators over
//! different windows that point at the same element are equal.
//!
//! # Example
//!
//! ```
//! use boundview_bounded_iter::StaticBoundedIter;
//! use boundview_core::{Readable, RandomAccess};
//!
//! let data = [10, 20, 30];
//! let mut it = StaticBoundedIter::from_array(&data);
//! assert_eq!(*it.read(), 10);
//! it += 2;
//! assert_eq!(*it.at(-1), 20);
//! assert_eq!(it.iter().copied().collect::<Vec<_>>(), [30]);
//! it.advance(1);
//! assert_eq!(it, StaticBoundedIter::from_array_end(&data));
//! ```
//!
//! [`read`]: boundview_core::Readable::read
//! [`as_ptr`]: StaticBoundedIter::as_ptr
//! [`at(n)`]: StaticBoundedIter::at
//! [`step`]: boundview_core::Cursor::step
//! [`step_back`]: boundview_core::Bidirectional::step_back
//! [`advance`]: boundview_core::RandomAccess::advance

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

use core::{
    cmp::Ordering,
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
};

use boundview_core::{
    Bidirectional, Contiguous, Cursor, Forward, IteratorCategory, RandomAccess, Readable,
    SliceCursor, Violation, cursor::read_at, hardening_assert,
};

mod storage;

pub use storage::{BoundStorage, Collapsed, Windowed};

/// A contiguous cursor confined to a window of `SIZE` elements.
///
/// See [crate-level docs](crate) for the checked operations.
pub struct StaticBoundedIter<C, const SIZE: usize, S = Windowed<C>> {
    storage: S,
    phantom: PhantomData<C>,
}

/// A bounded iterator over an empty window. Stores only the current position.
pub type EmptyBoundedIter<C> = StaticBoundedIter<C, 0, Collapsed<C>>;

static_assertions::assert_eq_size!(
    EmptyBoundedIter<SliceCursor<'static, u64>>,
    SliceCursor<'static, u64>
);
static_assertions::assert_eq_size!(
    StaticBoundedIter<SliceCursor<'static, u64>, 8>,
    [SliceCursor<'static, u64>; 2]
);

impl<C, const SIZE: usize, S> StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    const END: isize = SIZE as isize;

    /// Creates a bounded iterator at `current` over `[begin, begin + SIZE]`.
    ///
    /// `current` must lie inside the window. Pairing [`Collapsed`] storage with
    /// a non-zero `SIZE` does not compile:
    ///
    /// ```compile_fail
    /// use boundview_bounded_iter::{Collapsed, StaticBoundedIter};
    /// use boundview_core::SliceCursor;
    ///
    /// let data = [1, 2];
    /// let c = SliceCursor::begin(&data);
    /// let _ = StaticBoundedIter::<_, 2, Collapsed<_>>::new(c, c);
    /// ```
    ///
    /// Neither does a cursor that is not contiguous:
    ///
    /// ```compile_fail
    /// use boundview_bounded_iter::StaticBoundedIter;
    /// use boundview_core::{Range, TransformView};
    ///
    /// let data = [1, 2];
    /// let view = TransformView::new(&data, |x: &i32| x + 1);
    /// let _ = StaticBoundedIter::<_, 2>::new(view.begin(), view.begin());
    /// ```
    pub fn new(current: C, begin: C) -> Self {
        hardening_assert!(
            begin.distance_to(&current) >= 0,
            Violation::InconsistentBegin
        );
        hardening_assert!(
            begin.distance_to(&current) <= Self::END,
            Violation::InconsistentEnd
        );
        Self::from_storage(current, begin)
    }

    /// Every constructor builds its storage here.
    fn from_storage(current: C, begin: C) -> Self {
        const {
            assert!(
                !S::COLLAPSED || SIZE == 0,
                "collapsed storage requires an empty window"
            )
        };
        StaticBoundedIter {
            storage: S::new(current, begin),
            phantom: PhantomData,
        }
    }

    /// Number of elements in the window.
    pub const fn size() -> usize {
        SIZE
    }

    /// The wrapped cursor.
    pub fn current(&self) -> &C {
        self.storage.current()
    }

    pub fn into_current(self) -> C {
        self.storage.current().clone()
    }

    pub fn begin(&self) -> C {
        self.storage.begin()
    }

    /// `begin + SIZE`, computed on demand.
    pub fn end(&self) -> C {
        let mut end = self.storage.begin();
        end.advance(Self::END);
        end
    }

    /// Distance from the beginning of the window to the current position.
    pub fn offset(&self) -> isize {
        self.storage.offset()
    }

    /// Number of elements between the current position and the end.
    pub fn remaining(&self) -> usize {
        usize::try_from(Self::END - self.offset()).unwrap_or(0)
    }

    /// Address of the current element, which must not be the end.
    pub fn as_ptr(&self) -> *const C::Element {
        hardening_assert!(self.offset() != Self::END, Violation::DereferenceAtEnd);
        self.current().address()
    }

    /// Reads the element `n` positions away without moving.
    pub fn at(&self, n: isize) -> C::Ref
    where
        C: Readable,
    {
        hardening_assert!(n >= -self.offset(), Violation::IndexBeforeBegin);
        hardening_assert!(
            n < Self::END - self.offset(),
            Violation::IndexAtOrPastEnd
        );
        read_at(self.current(), n)
    }

    /// Iterates over the elements from the current position to the end.
    pub fn iter(&self) -> Items<C, SIZE, S>
    where
        C: Readable,
        S: Clone,
    {
        Items {
            front: self.clone(),
            len: self.remaining(),
        }
    }

    /// Moves back by `n` positions, forwards when `n` is negative.
    fn retreat(&mut self, n: isize) {
        hardening_assert!(n <= self.offset(), Violation::RewindPastBegin);
        hardening_assert!(
            n >= self.offset() - Self::END,
            Violation::AdvancePastEnd
        );
        self.storage.current_mut().advance(n.wrapping_neg());
    }
}

impl<'a, T, const SIZE: usize> StaticBoundedIter<SliceCursor<'a, T>, SIZE> {
    /// A bounded iterator at the first element of `array`, bounded by it.
    pub fn from_array(array: &'a [T; SIZE]) -> Self {
        let begin = SliceCursor::begin(array);
        Self::new(begin, begin)
    }

    /// A bounded iterator one past the last element of `array`.
    pub fn from_array_end(array: &'a [T; SIZE]) -> Self {
        Self::new(SliceCursor::end(array), SliceCursor::begin(array))
    }
}

impl<C: Clone, const SIZE: usize, S: Clone> Clone for StaticBoundedIter<C, SIZE, S> {
    fn clone(&self) -> Self {
        StaticBoundedIter {
            storage: self.storage.clone(),
            phantom: PhantomData,
        }
    }
}

impl<C: Copy, const SIZE: usize, S: Copy> Copy for StaticBoundedIter<C, SIZE, S> {}

/// The singular state: not dereferenceable, only assignable and comparable.
///
/// The storage rule of [`StaticBoundedIter::new`] applies here too:
///
/// ```compile_fail
/// use boundview_bounded_iter::{Collapsed, StaticBoundedIter};
/// use boundview_core::SliceCursor;
///
/// let _ = StaticBoundedIter::<SliceCursor<'_, i32>, 3, Collapsed<_>>::default();
/// ```
impl<C, const SIZE: usize, S> Default for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone + Default,
    S: BoundStorage<C>,
{
    fn default() -> Self {
        Self::from_storage(C::default(), C::default())
    }
}

impl<C, const SIZE: usize, S> fmt::Debug for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone + fmt::Debug,
    S: BoundStorage<C>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticBoundedIter")
            .field("current", self.current())
            .field("offset", &self.offset())
            .field("size", &SIZE)
            .finish()
    }
}

// --- Comparisons: current position only ---

impl<C, const SIZE: usize, S, const M: usize, T> PartialEq<StaticBoundedIter<C, M, T>>
    for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone + PartialEq,
    S: BoundStorage<C>,
    T: BoundStorage<C>,
{
    fn eq(&self, other: &StaticBoundedIter<C, M, T>) -> bool {
        self.current() == other.current()
    }
}

impl<C, const SIZE: usize, S> Eq for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone + Eq,
    S: BoundStorage<C>,
{
}

impl<C, const SIZE: usize, S, const M: usize, T> PartialOrd<StaticBoundedIter<C, M, T>>
    for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone + PartialOrd,
    S: BoundStorage<C>,
    T: BoundStorage<C>,
{
    fn partial_cmp(&self, other: &StaticBoundedIter<C, M, T>) -> Option<Ordering> {
        self.current().partial_cmp(other.current())
    }
}

impl<C, const SIZE: usize, S> Ord for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone + Ord,
    S: BoundStorage<C>,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.current().cmp(other.current())
    }
}

// --- Cursor traits ---

impl<C, const SIZE: usize, S> Cursor for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    const CONCEPT: IteratorCategory = IteratorCategory::Contiguous;

    #[inline]
    fn step(&mut self) {
        hardening_assert!(self.offset() != Self::END, Violation::AdvancePastEnd);
        self.storage.current_mut().step();
    }
}

impl<C, const SIZE: usize, S> Forward for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Forward,
    S: BoundStorage<C> + Clone,
{
}

impl<C, const SIZE: usize, S> Bidirectional for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    #[inline]
    fn step_back(&mut self) {
        hardening_assert!(self.offset() != 0, Violation::RewindPastBegin);
        self.storage.current_mut().step_back();
    }
}

impl<C, const SIZE: usize, S> RandomAccess for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    #[inline]
    fn advance(&mut self, n: isize) {
        hardening_assert!(n >= -self.offset(), Violation::RewindPastBegin);
        hardening_assert!(
            n <= Self::END - self.offset(),
            Violation::AdvancePastEnd
        );
        self.storage.current_mut().advance(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.current().distance_to(other.current())
    }
}

impl<C, const SIZE: usize, S> Contiguous for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    type Element = C::Element;

    fn address(&self) -> *const C::Element {
        self.current().address()
    }
}

impl<C, const SIZE: usize, S> Readable for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Readable + Clone,
    S: BoundStorage<C>,
{
    type Ref = C::Ref;
    const CATEGORY: IteratorCategory = <C as Readable>::CATEGORY;

    #[inline]
    fn read(&self) -> C::Ref {
        hardening_assert!(self.offset() != Self::END, Violation::DereferenceAtEnd);
        self.current().read()
    }
}

// --- Arithmetic ---

impl<C, const SIZE: usize, S> AddAssign<isize> for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    fn add_assign(&mut self, n: isize) {
        self.advance(n);
    }
}

impl<C, const SIZE: usize, S> SubAssign<isize> for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    fn sub_assign(&mut self, n: isize) {
        self.retreat(n);
    }
}

impl<C, const SIZE: usize, S> Add<isize> for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<C, const SIZE: usize, S> Add<StaticBoundedIter<C, SIZE, S>> for isize
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    type Output = StaticBoundedIter<C, SIZE, S>;

    fn add(self, it: StaticBoundedIter<C, SIZE, S>) -> Self::Output {
        it + self
    }
}

impl<C, const SIZE: usize, S> Sub<isize> for StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
{
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// Difference of the current positions, whatever the windows.
impl<'a, C, const SIZE: usize, S, const M: usize, T> Sub<&'a StaticBoundedIter<C, M, T>>
    for &'a StaticBoundedIter<C, SIZE, S>
where
    C: Contiguous + Clone,
    S: BoundStorage<C>,
    T: BoundStorage<C>,
{
    type Output = isize;

    fn sub(self, other: &'a StaticBoundedIter<C, M, T>) -> isize {
        other.current().distance_to(self.current())
    }
}

// --- Iteration ---

/// Iterator over the rest of a bounded iterator's window.
pub struct Items<C, const SIZE: usize, S> {
    front: StaticBoundedIter<C, SIZE, S>,
    len: usize,
}

impl<C, const SIZE: usize, S> Iterator for Items<C, SIZE, S>
where
    C: Contiguous + Readable + Clone,
    S: BoundStorage<C>,
{
    type Item = C::Ref;

    fn next(&mut self) -> Option<C::Ref> {
        if self.len == 0 {
            return None;
        }
        let item = self.front.read();
        self.front.step();
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<C, const SIZE: usize, S> DoubleEndedIterator for Items<C, SIZE, S>
where
    C: Contiguous + Readable + Clone,
    S: BoundStorage<C>,
{
    fn next_back(&mut self) -> Option<C::Ref> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.front.at(self.len as isize))
    }
}

impl<C, const SIZE: usize, S> ExactSizeIterator for Items<C, SIZE, S>
where
    C: Contiguous + Readable + Clone,
    S: BoundStorage<C>,
{
}

impl<C, const SIZE: usize, S> FusedIterator for Items<C, SIZE, S>
where
    C: Contiguous + Readable + Clone,
    S: BoundStorage<C>,
{
}
