//! Error types for the checked combinators.

/// Errors returned by the `try_*` combinators on [`Maybe`](crate::maybe::Maybe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MaybeError {
    /// A required callable argument was absent.
    #[error("argument `{name}` must be provided")]
    InvalidArgument {
        /// Name of the missing argument (e.g., "evaluator", "some").
        name: &'static str,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MaybeError>;

impl MaybeError {
    /// Creates a [`MaybeError::InvalidArgument`] for the named argument.
    pub fn invalid_argument(name: &'static str) -> Self {
        Self::InvalidArgument { name }
    }

    /// Returns `true` if this is a [`MaybeError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns the name of the offending argument.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name } => *name,
        }
    }
}
