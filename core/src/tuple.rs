//! Tuple-like element access.
//!
//! [`TupleElement<N>`] is the `get<N>` of this crate: indexed access to the
//! fields of tuples (arity 1 to 6) and arrays. Asking an array for an element
//! past its length fails at compile time.
//!
//! [`Project<N>`] decides what projecting element `N` out of a cursor's output
//! produces. A reference projects to a reference into the same tuple; an owned
//! tuple projects to the owned element.

/// A type with a fixed number of indexed elements.
pub trait TupleLike {
    const ARITY: usize;
}

pub trait TupleElement<const N: usize>: TupleLike {
    type Output;

    fn element(&self) -> &Self::Output;

    fn element_mut(&mut self) -> &mut Self::Output;

    fn into_element(self) -> Self::Output
    where
        Self: Sized;
}

/// Projection of element `N` out of a dereferenced value.
pub trait Project<const N: usize> {
    type Output;

    /// Whether [`Project::Output`] refers into the projected value rather
    /// than owning a copy of the element.
    const YIELDS_REFERENCE: bool;

    fn project(self) -> Self::Output;
}

/// Element `N` of `tuple`.
///
/// ```
/// use boundview_core::tuple::get;
///
/// let pair = (1, "one");
/// assert_eq!(*get::<1, _>(&pair), "one");
/// ```
#[inline]
pub fn get<const N: usize, T: TupleElement<N>>(tuple: &T) -> &T::Output {
    tuple.element()
}

#[inline]
pub fn get_mut<const N: usize, T: TupleElement<N>>(tuple: &mut T) -> &mut T::Output {
    tuple.element_mut()
}

impl<'a, T, const N: usize> Project<N> for &'a T
where
    T: TupleElement<N>,
{
    type Output = &'a T::Output;
    const YIELDS_REFERENCE: bool = true;

    #[inline]
    fn project(self) -> Self::Output {
        <T as TupleElement<N>>::element(self)
    }
}

impl<'a, T, const N: usize> Project<N> for &'a mut T
where
    T: TupleElement<N>,
{
    type Output = &'a mut T::Output;
    const YIELDS_REFERENCE: bool = true;

    #[inline]
    fn project(self) -> Self::Output {
        <T as TupleElement<N>>::element_mut(self)
    }
}

macro_rules! tuple_like {
    ($arity:literal => ($($ty:ident),+)) => {
        impl<$($ty),+> TupleLike for ($($ty,)+) {
            const ARITY: usize = $arity;
        }

        impl<$($ty,)+ const N: usize> Project<N> for ($($ty,)+)
        where
            Self: TupleElement<N>,
        {
            type Output = <Self as TupleElement<N>>::Output;
            const YIELDS_REFERENCE: bool = false;

            #[inline]
            fn project(self) -> Self::Output {
                <Self as TupleElement<N>>::into_element(self)
            }
        }
    };
}

macro_rules! tuple_element {
    (($($ty:ident),+) [$idx:tt] => $out:ident) => {
        impl<$($ty),+> TupleElement<$idx> for ($($ty,)+) {
            type Output = $out;

            #[inline]
            fn element(&self) -> &$out {
                &self.$idx
            }

            #[inline]
            fn element_mut(&mut self) -> &mut $out {
                &mut self.$idx
            }

            #[inline]
            fn into_element(self) -> $out {
                self.$idx
            }
        }
    };
}

tuple_like!(1 => (A));
tuple_element!((A)[0] => A);

tuple_like!(2 => (A, B));
tuple_element!((A, B)[0] => A);
tuple_element!((A, B)[1] => B);

tuple_like!(3 => (A, B, C));
tuple_element!((A, B, C)[0] => A);
tuple_element!((A, B, C)[1] => B);
tuple_element!((A, B, C)[2] => C);

tuple_like!(4 => (A, B, C, D));
tuple_element!((A, B, C, D)[0] => A);
tuple_element!((A, B, C, D)[1] => B);
tuple_element!((A, B, C, D)[2] => C);
tuple_element!((A, B, C, D)[3] => D);

tuple_like!(5 => (A, B, C, D, E));
tuple_element!((A, B, C, D, E)[0] => A);
tuple_element!((A, B, C, D, E)[1] => B);
tuple_element!((A, B, C, D, E)[2] => C);
tuple_element!((A, B, C, D, E)[3] => D);
tuple_element!((A, B, C, D, E)[4] => E);

tuple_like!(6 => (A, B, C, D, E, F));
tuple_element!((A, B, C, D, E, F)[0] => A);
tuple_element!((A, B, C, D, E, F)[1] => B);
tuple_element!((A, B, C, D, E, F)[2] => C);
tuple_element!((A, B, C, D, E, F)[3] => D);
tuple_element!((A, B, C, D, E, F)[4] => E);
tuple_element!((A, B, C, D, E, F)[5] => F);

impl<T, const M: usize> TupleLike for [T; M] {
    const ARITY: usize = M;
}

impl<T, const M: usize, const N: usize> TupleElement<N> for [T; M] {
    type Output = T;

    #[inline]
    fn element(&self) -> &T {
        const { assert!(N < M, "array element index out of range") };
        &self[N]
    }

    #[inline]
    fn element_mut(&mut self) -> &mut T {
        const { assert!(N < M, "array element index out of range") };
        &mut self[N]
    }

    fn into_element(self) -> T {
        const { assert!(N < M, "array element index out of range") };
        match self.into_iter().nth(N) {
            Some(element) => element,
            None => unreachable!(),
        }
    }
}

impl<T, const M: usize, const N: usize> Project<N> for [T; M] {
    type Output = T;
    const YIELDS_REFERENCE: bool = false;

    #[inline]
    fn project(self) -> T {
        <Self as TupleElement<N>>::into_element(self)
    }
}
