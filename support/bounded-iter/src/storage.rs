//! Storage for the bounds of a [`StaticBoundedIter`](crate::StaticBoundedIter).
//!
//! The end of the window is always `begin + SIZE`, so only the current position
//! and the beginning are kept. A zero-sized window has `begin == current == end`
//! for its whole life, so [`Collapsed`] keeps the current position alone.

mod private {
    pub trait Sealed {}
}

/// Where a bounded iterator keeps its positions.
/// This is a sealed trait - it cannot be implemented outside this crate.
pub trait BoundStorage<C: Clone>: private::Sealed {
    /// Whether the beginning is elided. Only valid for zero-sized windows.
    const COLLAPSED: bool;

    #[doc(hidden)]
    fn new(current: C, begin: C) -> Self;

    #[doc(hidden)]
    fn current(&self) -> &C;

    #[doc(hidden)]
    fn current_mut(&mut self) -> &mut C;

    #[doc(hidden)]
    fn begin(&self) -> C;

    /// Distance from the beginning to the current position.
    #[doc(hidden)]
    fn offset(&self) -> isize;
}

/// Current position plus a separately stored beginning.
#[derive(Debug, Clone, Copy, Default)]
pub struct Windowed<C> {
    current: C,
    begin: C,
}

impl<C> private::Sealed for Windowed<C> {}

impl<C: boundview_core::RandomAccess + Clone> BoundStorage<C> for Windowed<C> {
    const COLLAPSED: bool = false;

    #[inline(always)]
    fn new(current: C, begin: C) -> Self {
        Windowed { current, begin }
    }

    #[inline(always)]
    fn current(&self) -> &C {
        &self.current
    }

    #[inline(always)]
    fn current_mut(&mut self) -> &mut C {
        &mut self.current
    }

    #[inline(always)]
    fn begin(&self) -> C {
        self.begin.clone()
    }

    #[inline(always)]
    fn offset(&self) -> isize {
        self.begin.distance_to(&self.current)
    }
}

/// Current position only; the beginning is the current position.
#[derive(Debug, Clone, Copy, Default)]
pub struct Collapsed<C> {
    current: C,
}

impl<C> private::Sealed for Collapsed<C> {}

impl<C: Clone> BoundStorage<C> for Collapsed<C> {
    const COLLAPSED: bool = true;

    #[inline(always)]
    fn new(current: C, _begin: C) -> Self {
        Collapsed { current }
    }

    #[inline(always)]
    fn current(&self) -> &C {
        &self.current
    }

    #[inline(always)]
    fn current_mut(&mut self) -> &mut C {
        &mut self.current
    }

    #[inline(always)]
    fn begin(&self) -> C {
        self.current.clone()
    }

    #[inline(always)]
    fn offset(&self) -> isize {
        0
    }
}
