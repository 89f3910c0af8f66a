//! Integration tests for the prelude: pipelines written with `tap`.
//!
//! These tests verify that:
//! - Lifted steps chain with `pipe` in reading order
//! - `tap` observes an outcome without moving it off its track
//! - The prelude alone is enough to write a complete pipeline

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;

use switchyard::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
enum SignupError {
    Empty,
    TooLong { len: usize },
    Reserved(String),
    Store(String),
}

fn trimmed(raw: &str) -> Outcome<String, SignupError> {
    let name = raw.trim();
    if name.is_empty() {
        fail(SignupError::Empty)
    } else {
        succeed(name.to_owned())
    }
}

fn short(name: String) -> Outcome<String, SignupError> {
    if name.len() > 12 {
        fail(SignupError::TooLong { len: name.len() })
    } else {
        succeed(name)
    }
}

fn unreserved(name: String) -> Outcome<String, SignupError> {
    if name == "admin" {
        fail(SignupError::Reserved(name))
    } else {
        succeed(name)
    }
}

/// Test that a signup pipeline composed with `pipe` stops at the first
/// rejected rule.
///
/// # GIVEN
/// trim -> length check -> reserved check -> store, each lifted onto the railway
///
/// # WHEN
/// Names that break different rules are submitted
///
/// # THEN
/// Each result names the first rule that rejected it and only valid names are stored
#[test]
fn test_signup_pipeline() {
    let stored = RefCell::new(Vec::new());
    let mut store = try_catch(
        |name: String| {
            if name.starts_with('!') {
                panic!("storage refused {name}");
            }
            stored.borrow_mut().push(name.clone());
            name.len()
        },
        |fault: Fault| SignupError::Store(fault.to_string()),
    );

    let mut signup = |raw: &str| {
        trimmed(raw)
            .pipe(bind(short))
            .pipe(bind(unreserved))
            .pipe(bind(&mut store))
    };

    assert_eq!(signup("  ada "), succeed(3));
    assert_eq!(signup("   "), fail(SignupError::Empty));
    assert_eq!(
        signup("a-very-long-username"),
        fail(SignupError::TooLong { len: 20 })
    );
    assert_eq!(
        signup("admin"),
        fail(SignupError::Reserved("admin".to_owned()))
    );
    assert_eq!(
        signup("!bang"),
        fail(SignupError::Store("storage refused !bang".to_owned()))
    );
    assert_eq!(*stored.borrow(), vec!["ada".to_owned()]);
}

/// Test that `tap` can observe either track without changing the outcome.
#[test]
fn test_tap_observes_without_consuming() {
    let seen = RefCell::new(Vec::new());

    let ok = trimmed(" grace ").tap(|outcome| seen.borrow_mut().push(outcome.is_success()));
    let bad = trimmed("").tap(|outcome| seen.borrow_mut().push(outcome.is_success()));

    assert_eq!(ok, succeed("grace".to_owned()));
    assert_eq!(bad, fail(SignupError::Empty));
    assert_eq!(*seen.borrow(), vec![true, false]);
}

/// Test that a switched formatter and a deferred producer slot into a pipe.
#[test]
fn test_switch_and_producer_in_pipe() {
    let mut greet = switch(|name: String| format!("welcome, {name}"));
    let mut next_user = bind_producer(|| trimmed("linus"));

    let greeting = next_user().pipe(bind(|name| greet(name)));
    assert_eq!(greeting, succeed("welcome, linus".to_owned()));
}

/// Test that the facade re-exports the same types as the core crate.
#[test]
fn test_facade_reexports_core_types() {
    let outcome: switchyard::switchyard_core::Outcome<Unit, SignupError> = succeed(Unit);
    let same: switchyard::Outcome<Unit, SignupError> = outcome.clone();
    assert_eq!(outcome, same);
}
