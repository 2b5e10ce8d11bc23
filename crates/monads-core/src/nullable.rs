//! Absence at the construction boundary.
//!
//! [`IntoMaybe`] decides whether a raw input counts as present or absent.
//! `Option<T>` carries the absent state explicitly; plain values such as
//! integers or strings have no absent state and are always present.

use std::rc::Rc;
use std::sync::Arc;

use crate::maybe::Maybe;

/// Conversion of a possibly-absent input into a [`Maybe`].
///
/// This is what [`maybe`] and [`Maybe::and_then`] use to wrap values, so an
/// evaluator returning `Option<U>` or `Maybe<U>` flattens into `Maybe<U>`
/// instead of nesting.
pub trait IntoMaybe {
    /// The type held when the input is present.
    type Value;

    /// Wraps `self`, mapping an absent input to [`Maybe::None`].
    fn into_maybe(self) -> Maybe<Self::Value>;
}

/// Constructs a [`Maybe`] from a raw input, treating absence as `None`.
///
/// Never fails: an absent input is valid and yields `None`. Values of types
/// without an [`IntoMaybe`] impl are always present; wrap them with
/// [`Maybe::some`].
pub fn maybe<V: IntoMaybe>(value: V) -> Maybe<V::Value> {
    value.into_maybe()
}

impl<T> IntoMaybe for Option<T> {
    type Value = T;

    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> IntoMaybe for Maybe<T> {
    type Value = T;

    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

// ---------------------------------------------------------------------------
// Macro: implements IntoMaybe for types without an absent state.
// ---------------------------------------------------------------------------
macro_rules! always_present {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoMaybe for $ty {
                type Value = $ty;

                fn into_maybe(self) -> Maybe<$ty> {
                    Maybe::Some(self)
                }
            }
        )+
    };
}

always_present!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
);

impl<'a, T: ?Sized> IntoMaybe for &'a T {
    type Value = &'a T;

    fn into_maybe(self) -> Maybe<&'a T> {
        Maybe::Some(self)
    }
}

impl<T> IntoMaybe for Vec<T> {
    type Value = Vec<T>;

    fn into_maybe(self) -> Maybe<Vec<T>> {
        Maybe::Some(self)
    }
}

impl<T: ?Sized> IntoMaybe for Box<T> {
    type Value = Box<T>;

    fn into_maybe(self) -> Maybe<Box<T>> {
        Maybe::Some(self)
    }
}

impl<T: ?Sized> IntoMaybe for Rc<T> {
    type Value = Rc<T>;

    fn into_maybe(self) -> Maybe<Rc<T>> {
        Maybe::Some(self)
    }
}

impl<T: ?Sized> IntoMaybe for Arc<T> {
    type Value = Arc<T>;

    fn into_maybe(self) -> Maybe<Arc<T>> {
        Maybe::Some(self)
    }
}
