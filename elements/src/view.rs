use core::fmt;

use boundview_core::tuple::{TupleElement, TupleLike};
use boundview_core::{Project, Range, RangeMut, Readable, SizedRange, View};

use crate::cursor::{ElementsCursor, ElementsSentinel};

/// A view of element `N` of every tuple-like element of `V`.
///
/// The view owns `V`. Shared traversal is available when `V` is a [`Range`],
/// exclusive traversal when `V` is a [`RangeMut`], and [`size`](Self::size)
/// when `V` is sized. Element types that are not tuple-like, or have no
/// element `N`, are rejected at compile time.
///
/// ```
/// use boundview_core::Range;
/// use boundview_elements::ElementsView;
///
/// let entries = [("one", 1), ("two", 2)];
/// let numbers = ElementsView::<_, 1>::new(&entries);
/// assert_eq!(numbers.walk().copied().collect::<Vec<_>>(), [1, 2]);
/// ```
#[derive(Clone, Copy)]
pub struct ElementsView<V, const N: usize> {
    base: V,
}

/// Element 0 of every pair.
pub type KeysView<V> = ElementsView<V, 0>;

/// Element 1 of every pair.
pub type ValuesView<V> = ElementsView<V, 1>;

impl<V, const N: usize> ElementsView<V, N>
where
    V: View,
    V::Element: TupleElement<N>,
{
    /// Wraps `base`. Its elements must have an element `N`:
    ///
    /// ```compile_fail
    /// use boundview_elements::ElementsView;
    ///
    /// let numbers = [1, 2, 3];
    /// let _ = ElementsView::<_, 0>::new(&numbers);
    /// ```
    ///
    /// ```compile_fail
    /// use boundview_elements::ElementsView;
    ///
    /// let pairs = [(1, 2)];
    /// let _ = ElementsView::<_, 2>::new(&pairs);
    /// ```
    ///
    /// Arrays are checked against their length as soon as the view is built:
    ///
    /// ```compile_fail
    /// use boundview_elements::ElementsView;
    ///
    /// let rows = [[1, 2]];
    /// let _ = ElementsView::<_, 5>::new(&rows).size();
    /// ```
    pub fn new(base: V) -> Self {
        const {
            assert!(
                N < <V::Element as TupleLike>::ARITY,
                "element index out of range"
            )
        };
        ElementsView { base }
    }
}

impl<V, const N: usize> Default for ElementsView<V, N>
where
    V: View + Default,
    V::Element: TupleElement<N>,
{
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<V, const N: usize> ElementsView<V, N> {
    /// A copy of the underlying range.
    pub fn base(&self) -> V
    where
        V: Clone,
    {
        self.base.clone()
    }

    pub fn base_ref(&self) -> &V {
        &self.base
    }

    pub fn into_base(self) -> V {
        self.base
    }

    /// Number of elements, when the underlying range knows it.
    pub fn size(&self) -> usize
    where
        V: SizedRange,
    {
        self.base.size()
    }
}

impl<V: fmt::Debug, const N: usize> fmt::Debug for ElementsView<V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementsView")
            .field("base", &self.base)
            .field("index", &N)
            .finish()
    }
}

impl<V, const N: usize> View for ElementsView<V, N>
where
    V: View,
    V::Element: TupleElement<N>,
{
    type Element = <V::Element as TupleElement<N>>::Output;
}

impl<V, const N: usize> Range for ElementsView<V, N>
where
    V: Range,
    V::Element: TupleElement<N>,
    <V::Cursor as Readable>::Ref: Project<N>,
{
    type Cursor = ElementsCursor<V::Cursor, N>;
    type Sentinel = ElementsSentinel<V::Sentinel, N>;

    fn begin(&self) -> Self::Cursor {
        ElementsCursor::new(self.base.begin())
    }

    fn end(&self) -> Self::Sentinel {
        ElementsSentinel::new(self.base.end())
    }
}

impl<V, const N: usize> RangeMut for ElementsView<V, N>
where
    V: RangeMut,
    V::Element: TupleElement<N>,
{
    type CursorMut<'s>
        = ElementsCursor<V::CursorMut<'s>, N>
    where
        Self: 's;
    type SentinelMut = ElementsSentinel<V::SentinelMut, N>;

    fn begin_mut(&mut self) -> Self::CursorMut<'_> {
        ElementsCursor::new(self.base.begin_mut())
    }

    fn end_mut(&self) -> Self::SentinelMut {
        ElementsSentinel::new(self.base.end_mut())
    }
}

impl<V, const N: usize> SizedRange for ElementsView<V, N>
where
    V: SizedRange,
    V::Element: TupleElement<N>,
{
    fn size(&self) -> usize {
        self.base.size()
    }
}

/// Views element 0 of every element of `base`.
pub fn keys<V>(base: V) -> KeysView<V>
where
    V: View,
    V::Element: TupleElement<0>,
{
    ElementsView::new(base)
}

/// Views element 1 of every element of `base`.
pub fn values<V>(base: V) -> ValuesView<V>
where
    V: View,
    V::Element: TupleElement<1>,
{
    ElementsView::new(base)
}

static_assertions::assert_eq_size!(KeysView<&'static [(u32, u32)]>, &'static [(u32, u32)]);
static_assertions::assert_eq_size!(
    KeysView<alloc::vec::Vec<(u8, u8)>>,
    alloc::vec::Vec<(u8, u8)>
);
