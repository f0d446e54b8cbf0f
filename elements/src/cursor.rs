//! Cursor and sentinel of an [`ElementsView`](crate::ElementsView).
//!
//! Both are thin wrappers: movement, comparison and distance forward to the
//! underlying cursor or sentinel unchanged. Only reads differ, projecting
//! element `N` out of whatever the underlying cursor reads.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use boundview_core::tuple::TupleElement;
use boundview_core::{
    Bidirectional, Cursor, Forward, IntoConst, IteratorCategory, Project, RandomAccess,
    Readable, Sentinel, SizedSentinel, Writable, cursor::read_at,
};

/// Cursor yielding element `N` of each underlying element.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementsCursor<C, const N: usize> {
    current: C,
}

impl<C, const N: usize> ElementsCursor<C, N> {
    pub const fn new(current: C) -> Self {
        ElementsCursor { current }
    }

    /// The underlying cursor.
    pub const fn base(&self) -> &C {
        &self.current
    }

    pub fn into_base(self) -> C {
        self.current
    }

    /// Reads element `N` of the underlying element `n` positions away.
    pub fn at(&self, n: isize) -> <Self as Readable>::Ref
    where
        C: Readable + RandomAccess + Clone,
        C::Ref: Project<N>,
    {
        read_at(self, n)
    }
}

impl<C: PartialEq, const N: usize> PartialEq for ElementsCursor<C, N> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<C: Eq, const N: usize> Eq for ElementsCursor<C, N> {}

impl<C: PartialOrd, const N: usize> PartialOrd for ElementsCursor<C, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.current.partial_cmp(&other.current)
    }
}

impl<C: Ord, const N: usize> Ord for ElementsCursor<C, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.current.cmp(&other.current)
    }
}

impl<C: Cursor, const N: usize> Cursor for ElementsCursor<C, N> {
    const CONCEPT: IteratorCategory = C::CONCEPT.min(IteratorCategory::RandomAccess);

    #[inline]
    fn step(&mut self) {
        self.current.step();
    }
}

impl<C: Forward, const N: usize> Forward for ElementsCursor<C, N> {}

impl<C: Bidirectional, const N: usize> Bidirectional for ElementsCursor<C, N> {
    #[inline]
    fn step_back(&mut self) {
        self.current.step_back();
    }
}

impl<C: RandomAccess, const N: usize> RandomAccess for ElementsCursor<C, N> {
    #[inline]
    fn advance(&mut self, n: isize) {
        self.current.advance(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.current.distance_to(&other.current)
    }
}

impl<C, const N: usize> Readable for ElementsCursor<C, N>
where
    C: Readable,
    C::Ref: Project<N>,
{
    type Ref = <C::Ref as Project<N>>::Output;

    /// Projections that own their result are single pass to consumers.
    const CATEGORY: IteratorCategory = if <C::Ref as Project<N>>::YIELDS_REFERENCE {
        <C as Readable>::CATEGORY.min(IteratorCategory::RandomAccess)
    } else {
        IteratorCategory::Input
    };

    #[inline]
    fn read(&self) -> Self::Ref {
        <C::Ref as Project<N>>::project(self.current.read())
    }
}

impl<C, const N: usize> Writable for ElementsCursor<C, N>
where
    C: Writable,
    C::Target: TupleElement<N>,
{
    type Target = <C::Target as TupleElement<N>>::Output;

    #[inline]
    fn read_mut(&mut self) -> &mut Self::Target {
        <C::Target as TupleElement<N>>::element_mut(self.current.read_mut())
    }
}

impl<C: IntoConst, const N: usize> IntoConst for ElementsCursor<C, N> {
    type Const = ElementsCursor<C::Const, N>;

    fn into_const(self) -> Self::Const {
        ElementsCursor::new(self.current.into_const())
    }
}

impl<C: RandomAccess, const N: usize> AddAssign<isize> for ElementsCursor<C, N> {
    fn add_assign(&mut self, n: isize) {
        self.current.advance(n);
    }
}

impl<C: RandomAccess, const N: usize> SubAssign<isize> for ElementsCursor<C, N> {
    fn sub_assign(&mut self, n: isize) {
        self.current.advance(n.wrapping_neg());
    }
}

impl<C: RandomAccess, const N: usize> Add<isize> for ElementsCursor<C, N> {
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<C: RandomAccess, const N: usize> Sub<isize> for ElementsCursor<C, N> {
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

/// `it - other`.
impl<'a, C: RandomAccess, const N: usize> Sub for &'a ElementsCursor<C, N> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        other.distance_to(self)
    }
}

/// End of an [`ElementsView`](crate::ElementsView): the underlying sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ElementsSentinel<S, const N: usize> {
    end: S,
}

impl<S, const N: usize> ElementsSentinel<S, N> {
    pub const fn new(end: S) -> Self {
        ElementsSentinel { end }
    }

    pub const fn base(&self) -> &S {
        &self.end
    }
}

impl<C, S, const N: usize> Sentinel<ElementsCursor<C, N>> for ElementsSentinel<S, N>
where
    C: Cursor,
    S: Sentinel<C>,
{
    #[inline]
    fn is_end(&self, cursor: &ElementsCursor<C, N>) -> bool {
        self.end.is_end(&cursor.current)
    }
}

impl<C, S, const N: usize> SizedSentinel<ElementsCursor<C, N>> for ElementsSentinel<S, N>
where
    C: Cursor,
    S: SizedSentinel<C>,
{
    #[inline]
    fn distance_from(&self, cursor: &ElementsCursor<C, N>) -> isize {
        self.end.distance_from(&cursor.current)
    }
}

// Comparison and difference with the sentinel work from either side.

impl<C, S, const N: usize> PartialEq<ElementsSentinel<S, N>> for ElementsCursor<C, N>
where
    C: Cursor,
    S: Sentinel<C>,
{
    fn eq(&self, end: &ElementsSentinel<S, N>) -> bool {
        end.is_end(self)
    }
}

impl<C, S, const N: usize> PartialEq<ElementsCursor<C, N>> for ElementsSentinel<S, N>
where
    C: Cursor,
    S: Sentinel<C>,
{
    fn eq(&self, cursor: &ElementsCursor<C, N>) -> bool {
        self.is_end(cursor)
    }
}

/// `it - end`, never positive for a cursor inside the range.
impl<'a, C, S, const N: usize> Sub<&'a ElementsSentinel<S, N>> for &'a ElementsCursor<C, N>
where
    C: Cursor,
    S: SizedSentinel<C>,
{
    type Output = isize;

    fn sub(self, end: &'a ElementsSentinel<S, N>) -> isize {
        -end.distance_from(self)
    }
}

/// `end - it`.
impl<'a, C, S, const N: usize> Sub<&'a ElementsCursor<C, N>> for &'a ElementsSentinel<S, N>
where
    C: Cursor,
    S: SizedSentinel<C>,
{
    type Output = isize;

    fn sub(self, cursor: &'a ElementsCursor<C, N>) -> isize {
        self.distance_from(cursor)
    }
}
