//! End-to-end chains over the public `monads_core` API.
//!
//! Each test builds a value with `maybe`, runs a combinator chain and
//! checks both the result and which callables ran.

use std::cell::Cell;

use monads_core::error::MaybeError;
use monads_core::maybe::Maybe;
use monads_core::nullable::maybe;
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Position of `needle` in `haystack`, or -1 when it does not occur.
fn index_of(haystack: &str, needle: &str) -> i64 {
    haystack.find(needle).map_or(-1, |i| i as i64)
}

fn null_str() -> Option<&'static str> {
    None
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn construct_never_fails_on_absent_input() {
    let _ = maybe(null_str());
    let _ = maybe(None::<i32>);
}

#[test]
fn absent_input_is_none() {
    let m = maybe(null_str());
    assert!(m.is_none());
    assert!(!m.is_some());
}

#[test]
fn present_input_is_some() {
    let m = maybe("not null");
    assert!(m.is_some());
    assert!(!m.is_none());
}

// ---------------------------------------------------------------------------
// Bind
// ---------------------------------------------------------------------------

#[test]
fn bind_plain_result_is_some() {
    let result = maybe("not null").bind(|s| index_of(s, "l"));
    assert!(result.is_some());
    assert_eq!(result, Maybe::Some(6));
}

#[test]
fn bind_chain_with_absent_result_is_none() {
    let result = maybe("not null")
        .bind(|s| index_of(s, "T"))
        .and_then(|i| if i > 0 { Some("not null") } else { None });
    assert!(result.is_none());
}

#[test]
fn bind_on_absent_input_is_none() {
    let result = maybe(null_str()).bind(|s| index_of(s, "T"));
    assert!(result.is_none());
}

#[test]
fn bind_short_circuits_whole_chain() {
    let calls = Cell::new(0);
    let bump = |v: i64| {
        calls.set(calls.get() + 1);
        v + 1
    };
    let result = maybe(None::<i64>).bind(bump).bind(bump).bind(bump);
    assert_eq!(result, Maybe::None);
    assert_eq!(calls.get(), 0);
}

#[test]
fn bind_accepts_any_result_type() {
    #[derive(Debug, PartialEq)]
    struct Span {
        start: usize,
        len: usize,
    }

    let span = maybe("not null")
        .bind(|s| (s, index_of(s, "null")))
        .bind(|(s, start)| Span { start: start as usize, len: s.len() });
    assert_eq!(span, Maybe::Some(Span { start: 4, len: 8 }));
}

#[test]
fn some_constructs_from_any_value() {
    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: i32,
    }

    let p = Maybe::some(Point { x: 2 });
    assert!(p.is_some());
    assert_eq!(p.clone().bind(|p| p.x), Maybe::Some(2));
    assert_eq!(Maybe::some(Point { x: 2 }), p);
}

// ---------------------------------------------------------------------------
// When (If)
// ---------------------------------------------------------------------------

#[test]
fn when_true_keeps_value() {
    let result = maybe("11 char str").when(|s| s.len() == 11);
    assert_eq!(result, Maybe::Some("11 char str"));
}

#[test]
fn when_false_is_none() {
    let result = maybe("11 char str").when(|s| s.is_empty());
    assert!(result.is_none());
}

#[test]
fn when_on_absent_input_is_none() {
    let result = maybe(null_str()).when(|s| s.len() == 1);
    assert!(!result.is_some());
}

// ---------------------------------------------------------------------------
// Tap (Do)
// ---------------------------------------------------------------------------

#[test]
fn tap_runs_and_keeps_some() {
    let str_length = Cell::new(0);
    let result = maybe("str").tap(|s| str_length.set(s.len()));
    assert!(result.is_some());
    assert_eq!(str_length.get(), "str".len());
}

#[test]
fn tap_skips_on_absent_input() {
    let count = Cell::new(0);
    let result = maybe(null_str()).tap(|_| count.set(count.get() + 1));
    assert!(!result.is_some());
    assert_eq!(count.get(), 0);
}

// ---------------------------------------------------------------------------
// Match (Return)
// ---------------------------------------------------------------------------

#[test]
fn match_returns_some_branch() {
    let result = maybe("not null").match_with(String::new, |s| s.to_owned());
    assert_eq!(result, "not null");
}

#[test]
fn match_returns_none_branch() {
    let result = maybe(null_str()).match_with(String::new, |s| s.to_owned());
    assert_eq!(result, "");
}

#[test]
fn match_side_effect_overload() {
    let log = std::cell::RefCell::new(Vec::new());
    maybe(Some(1)).match_with(|| log.borrow_mut().push("none"), |_| log.borrow_mut().push("some"));
    maybe(None::<i32>).match_with(|| log.borrow_mut().push("none"), |_| log.borrow_mut().push("some"));
    assert_eq!(*log.borrow(), vec!["some", "none"]);
}

// ---------------------------------------------------------------------------
// Checked variants
// ---------------------------------------------------------------------------

#[test]
fn absent_callables_are_rejected_without_side_effects() {
    let calls = Cell::new(0);
    let source = || {
        calls.set(calls.get() + 1);
        maybe("value")
    };

    assert_eq!(
        source().try_bind(None::<fn(&str) -> usize>),
        Err(MaybeError::invalid_argument("evaluator"))
    );
    assert_eq!(
        source().try_when(None::<fn(&&str) -> bool>),
        Err(MaybeError::invalid_argument("predicate"))
    );
    assert_eq!(
        source().try_tap(None::<fn(&&str)>),
        Err(MaybeError::invalid_argument("action"))
    );
    assert_eq!(
        source().try_match_with(Some(|| 0), None::<fn(&str) -> usize>),
        Err(MaybeError::invalid_argument("some"))
    );
    assert_eq!(calls.get(), 4);
}

#[test]
fn checked_chain_propagates_with_question_mark() -> monads_core::error::Result<()> {
    let len = maybe(Some("abc"))
        .try_when(Some(|s: &&str| !s.is_empty()))?
        .try_bind(Some(|s: &str| s.len()))?
        .try_match_with(Some(|| 0), Some(|n: usize| n))?;
    assert_eq!(len, 3);
    Ok(())
}
