//! Cursor traits.
//!
//! A cursor is a position inside a sequence, the Rust counterpart of a C++
//! iterator. Unlike [`Iterator`], moving and reading are separate operations, so
//! a cursor can be compared, measured against another cursor, or moved backwards
//! without consuming anything.
//!
//! Movement is described by [`Cursor`], [`Bidirectional`], [`RandomAccess`] and
//! [`Contiguous`]. Access is split by receiver:
//!
//! - [`Readable`] reads through `&self` and may hand out values or shared
//!   references that outlive the cursor.
//! - [`Writable`] reads through `&mut self`, so at most one mutable reference
//!   into the sequence exists at a time.
//!
//! Preconditions (dereferencing past the end, stepping before the start) are not
//! checked at this level. Checked wrappers add them on top.

use crate::category::IteratorCategory;

/// A position that can move forward.
pub trait Cursor {
    /// Operations this cursor supports.
    const CONCEPT: IteratorCategory;

    /// Moves to the next position.
    fn step(&mut self);
}

/// A cursor that can be copied and revisited: every copy observes the same
/// sequence.
pub trait Forward: Cursor + Clone + PartialEq {}

pub trait Bidirectional: Cursor {
    /// Moves to the previous position.
    fn step_back(&mut self);
}

pub trait RandomAccess: Bidirectional {
    /// Moves by `n` positions, backwards when `n` is negative.
    fn advance(&mut self, n: isize);

    /// Number of steps from `self` to `other` (`other - self`).
    fn distance_to(&self, other: &Self) -> isize;
}

/// A random access cursor over elements laid out contiguously in memory.
pub trait Contiguous: RandomAccess {
    type Element;

    /// Address of the current position. May point one past the last element,
    /// in which case it must not be dereferenced.
    fn address(&self) -> *const Self::Element;
}

/// Shared access to the current element.
pub trait Readable: Cursor {
    /// What reading produces: a shared reference or an owned value.
    type Ref;

    /// Category advertised to consumers. Cursors that produce temporaries are
    /// single pass from a consumer's point of view, even if they can move
    /// freely.
    const CATEGORY: IteratorCategory = <Self as Cursor>::CONCEPT;

    fn read(&self) -> Self::Ref;
}

/// Exclusive access to the current element.
pub trait Writable: Cursor {
    type Target;

    fn read_mut(&mut self) -> &mut Self::Target;
}

/// Conversion from a mutable cursor to its read-only counterpart.
pub trait IntoConst {
    type Const;

    fn into_const(self) -> Self::Const;
}

/// Reads the element `n` positions away without moving `cursor`.
pub fn read_at<C>(cursor: &C, n: isize) -> C::Ref
where
    C: Readable + RandomAccess + Clone,
{
    let mut at = cursor.clone();
    at.advance(n);
    at.read()
}
