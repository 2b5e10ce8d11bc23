//! Optional values with chainable combinators.
//!
//! [`maybe::Maybe`] holds either a value or nothing. [`nullable::maybe`]
//! builds one from a raw input, treating absent inputs (`Option::None`) as
//! `Maybe::None`, and the combinators chain work that only runs when a value
//! is present:
//!
//! - `bind` maps, `and_then` maps and flattens,
//! - `match_with` eliminates into a single result,
//! - `when` filters,
//! - `tap` runs a side effect and passes the value on.
//!
//! Each has a `try_*` twin in [`checked`] taking `Option<F>` callables.
//!
//! ```
//! use monads_core::nullable::maybe;
//!
//! let label = maybe(Some("11 char str"))
//!     .when(|s| s.len() == 11)
//!     .match_with(|| "none".to_owned(), |s| s.to_uppercase());
//! assert_eq!(label, "11 CHAR STR");
//! ```

pub mod checked;
pub mod error;
pub mod maybe;
pub mod nullable;
