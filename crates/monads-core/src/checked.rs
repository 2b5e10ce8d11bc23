//! Combinators over callables that may be absent.
//!
//! Callbacks looked up at runtime (from a registry, a config table, a
//! plugin) arrive as `Option<F>`. These variants reject a missing callable
//! with [`MaybeError::InvalidArgument`] before touching the receiver, so a
//! failed call never invokes anything.

use crate::error::{MaybeError, Result};
use crate::maybe::Maybe;
use crate::nullable::IntoMaybe;

fn require<F>(callable: Option<F>, name: &'static str) -> Result<F> {
    callable.ok_or(MaybeError::invalid_argument(name))
}

impl<T> Maybe<T> {
    /// [`Maybe::bind`] with an evaluator that may be absent.
    pub fn try_bind<U, F>(self, evaluator: Option<F>) -> Result<Maybe<U>>
    where
        F: FnOnce(T) -> U,
    {
        let evaluator = require(evaluator, "evaluator")?;
        Ok(self.bind(evaluator))
    }

    /// [`Maybe::and_then`] with an evaluator that may be absent.
    pub fn try_and_then<R, F>(self, evaluator: Option<F>) -> Result<Maybe<R::Value>>
    where
        R: IntoMaybe,
        F: FnOnce(T) -> R,
    {
        let evaluator = require(evaluator, "evaluator")?;
        Ok(self.and_then(evaluator))
    }

    /// [`Maybe::match_with`] with branches that may be absent.
    ///
    /// `none` is checked before `some`.
    pub fn try_match_with<R, N, S>(self, none: Option<N>, some: Option<S>) -> Result<R>
    where
        N: FnOnce() -> R,
        S: FnOnce(T) -> R,
    {
        let none = require(none, "none")?;
        let some = require(some, "some")?;
        Ok(self.match_with(none, some))
    }

    /// [`Maybe::when`] with a predicate that may be absent.
    pub fn try_when<P>(self, predicate: Option<P>) -> Result<Self>
    where
        P: FnOnce(&T) -> bool,
    {
        let predicate = require(predicate, "predicate")?;
        Ok(self.when(predicate))
    }

    /// [`Maybe::tap`] with an action that may be absent.
    pub fn try_tap<A>(self, action: Option<A>) -> Result<Self>
    where
        A: FnOnce(&T),
    {
        let action = require(action, "action")?;
        Ok(self.tap(action))
    }
}
