//! The [`Maybe`] optional value type and its combinators.
//!
//! A `Maybe<T>` is either `Some(T)` or `None`. Instances are immutable: every
//! combinator consumes the receiver and returns a fresh value, so a chain
//! reads top to bottom without presence checks at each step.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::nullable::IntoMaybe;

/// An optional value: either a present `T` or its absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    None,
}

impl<T> Maybe<T> {
    /// The canonical absent value for `T`.
    pub const NONE: Self = Maybe::None;

    /// Wraps a present value.
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// Returns the absent value.
    pub fn none() -> Self {
        Maybe::None
    }

    /// Returns `true` if a value is present.
    pub fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Returns `true` if no value is present. Always `!self.is_some()`.
    pub fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Borrows the held value, leaving `self` untouched.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Converts into the standard library `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    // -- Combinators ---------------------------------------------------------

    /// Chains a computation on the held value and wraps its result.
    ///
    /// On `None` the evaluator is never called. On `Some(v)` it is called once
    /// with `v` and the result is wrapped in `Some`, whatever its type. Use
    /// [`Maybe::and_then`] when the evaluator can itself return an absent value.
    ///
    /// ```
    /// use monads_core::maybe::Maybe;
    ///
    /// let len = Maybe::some("not null").bind(|s| (s, s.len()));
    /// assert_eq!(len, Maybe::Some(("not null", 8)));
    /// ```
    pub fn bind<U, F>(self, evaluator: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(evaluator(value)),
            Maybe::None => {
                trace!("bind short-circuited on None");
                Maybe::None
            }
        }
    }

    /// Chains a computation whose result may be absent, flattening it.
    ///
    /// Like [`Maybe::bind`], but the result goes through [`IntoMaybe`]: an
    /// `Option` or `Maybe` result is flattened, so an absent result yields
    /// `None` instead of a nested `Some(None)`.
    ///
    /// ```
    /// use monads_core::maybe::Maybe;
    /// use monads_core::nullable::maybe;
    ///
    /// let idx = maybe(Some("not null")).and_then(|s| s.find('l'));
    /// assert_eq!(idx, Maybe::Some(6));
    /// ```
    pub fn and_then<R, F>(self, evaluator: F) -> Maybe<R::Value>
    where
        R: IntoMaybe,
        F: FnOnce(T) -> R,
    {
        match self {
            Maybe::Some(value) => evaluator(value).into_maybe(),
            Maybe::None => {
                trace!("and_then short-circuited on None");
                Maybe::None
            }
        }
    }

    /// Eliminates the `Maybe` by running exactly one branch.
    ///
    /// Calls `some` with the held value if present, otherwise `none`. Both
    /// branches return the same type; use `()` for side-effecting branches.
    pub fn match_with<R, N, S>(self, none: N, some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Maybe::Some(value) => some(value),
            Maybe::None => none(),
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    ///
    /// The predicate is not called on `None`.
    pub fn when<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Some(value) => {
                if predicate(&value) {
                    Maybe::Some(value)
                } else {
                    trace!("when predicate rejected value");
                    Maybe::None
                }
            }
            Maybe::None => {
                trace!("when short-circuited on None");
                Maybe::None
            }
        }
    }

    /// Runs `action` on the held value and returns the receiver unchanged.
    ///
    /// The action is not called on `None`, and `None` is returned.
    pub fn tap<A>(self, action: A) -> Self
    where
        A: FnOnce(&T),
    {
        match self {
            Maybe::Some(value) => {
                action(&value);
                Maybe::Some(value)
            }
            Maybe::None => {
                trace!("tap short-circuited on None");
                Maybe::None
            }
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        value.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Some(value) => serializer.serialize_some(value),
            Maybe::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}
