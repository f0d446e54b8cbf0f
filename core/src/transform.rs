//! A view that applies a function to every element of another view.
//!
//! The function's result is returned by value, so the cursor advertises the
//! input category to consumers even when it can move like the underlying one.

use core::cmp::Ordering;
use core::fmt;

use crate::category::IteratorCategory;
use crate::cursor::{Bidirectional, Cursor, Forward, RandomAccess, Readable};
use crate::range::{Range, SizedRange, View};
use crate::sentinel::{Sentinel, SizedSentinel};

/// ```
/// use boundview_core::{Range, TransformView};
///
/// let data = [1, 2, 3];
/// let pairs = TransformView::new(&data, |x: &i32| (*x, x * x));
/// assert_eq!(pairs.walk().collect::<Vec<_>>(), [(1, 1), (2, 4), (3, 9)]);
/// ```
#[derive(Clone)]
pub struct TransformView<V, F> {
    base: V,
    f: F,
}

impl<V, F> TransformView<V, F> {
    pub fn new(base: V, f: F) -> Self {
        TransformView { base, f }
    }

    pub fn base(&self) -> &V {
        &self.base
    }

    pub fn into_base(self) -> V {
        self.base
    }
}

impl<V: fmt::Debug, F> fmt::Debug for TransformView<V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformView")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl<V, F, U> View for TransformView<V, F>
where
    V: Range,
    F: Fn(<V::Cursor as Readable>::Ref) -> U,
{
    type Element = U;
}

impl<V, F, U> Range for TransformView<V, F>
where
    V: Range,
    F: Fn(<V::Cursor as Readable>::Ref) -> U + Clone,
{
    type Cursor = TransformCursor<V::Cursor, F>;
    type Sentinel = TransformSentinel<V::Sentinel>;

    fn begin(&self) -> Self::Cursor {
        TransformCursor {
            base: self.base.begin(),
            f: self.f.clone(),
        }
    }

    fn end(&self) -> Self::Sentinel {
        TransformSentinel(self.base.end())
    }
}

impl<V, F, U> SizedRange for TransformView<V, F>
where
    V: Range + SizedRange,
    F: Fn(<V::Cursor as Readable>::Ref) -> U,
{
    fn size(&self) -> usize {
        self.base.size()
    }
}

#[derive(Clone)]
pub struct TransformCursor<C, F> {
    base: C,
    f: F,
}

impl<C, F> TransformCursor<C, F> {
    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: fmt::Debug, F> fmt::Debug for TransformCursor<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TransformCursor").field(&self.base).finish()
    }
}

impl<C: PartialEq, F> PartialEq for TransformCursor<C, F> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<C: PartialOrd, F> PartialOrd for TransformCursor<C, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.base.partial_cmp(&other.base)
    }
}

impl<C: Cursor, F> Cursor for TransformCursor<C, F> {
    const CONCEPT: IteratorCategory = C::CONCEPT.min(IteratorCategory::RandomAccess);

    #[inline]
    fn step(&mut self) {
        self.base.step();
    }
}

impl<C: Forward, F: Clone> Forward for TransformCursor<C, F> {}

impl<C: Bidirectional, F> Bidirectional for TransformCursor<C, F> {
    #[inline]
    fn step_back(&mut self) {
        self.base.step_back();
    }
}

impl<C: RandomAccess, F> RandomAccess for TransformCursor<C, F> {
    #[inline]
    fn advance(&mut self, n: isize) {
        self.base.advance(n);
    }

    #[inline]
    fn distance_to(&self, other: &Self) -> isize {
        self.base.distance_to(&other.base)
    }
}

impl<C, F, U> Readable for TransformCursor<C, F>
where
    C: Readable,
    F: Fn(C::Ref) -> U,
{
    type Ref = U;
    const CATEGORY: IteratorCategory = IteratorCategory::Input;

    #[inline]
    fn read(&self) -> U {
        (self.f)(self.base.read())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformSentinel<S>(S);

impl<S> TransformSentinel<S> {
    pub fn base(&self) -> &S {
        &self.0
    }
}

impl<C: Cursor, F, S: Sentinel<C>> Sentinel<TransformCursor<C, F>> for TransformSentinel<S> {
    fn is_end(&self, cursor: &TransformCursor<C, F>) -> bool {
        self.0.is_end(&cursor.base)
    }
}

impl<C: Cursor, F, S: SizedSentinel<C>> SizedSentinel<TransformCursor<C, F>>
    for TransformSentinel<S>
{
    fn distance_from(&self, cursor: &TransformCursor<C, F>) -> isize {
        self.0.distance_from(&cursor.base)
    }
}
