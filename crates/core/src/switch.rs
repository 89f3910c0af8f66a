//! Lifting total functions onto the success track.
//!
//! A switched function never produces an error. If it panics anyway the
//! panic is not caught; lift it with `try_catch` instead.

use crate::outcome::{Outcome, succeed};
use crate::unit::Unit;

/// Lift `T -> U` into `T -> Outcome<U, E>`.
///
/// # Examples
///
/// ```
/// use switchyard_core::{succeed, switch, Outcome};
///
/// let mut shout = switch(|s: &str| s.to_uppercase());
/// let loud: Outcome<String, ()> = shout("hey");
/// assert_eq!(loud, succeed("HEY".to_string()));
/// ```
pub fn switch<T, U, E>(mut f: impl FnMut(T) -> U) -> impl FnMut(T) -> Outcome<U, E> {
    move |input| succeed(f(input))
}

/// Lift `() -> T` into `() -> Outcome<T, E>`.
pub fn switch_producer<T, E>(mut f: impl FnMut() -> T) -> impl FnMut() -> Outcome<T, E> {
    move || succeed(f())
}

/// Lift a consumer `T -> ()` into `T -> Outcome<Unit, E>`.
pub fn switch_action<T, E>(mut f: impl FnMut(T)) -> impl FnMut(T) -> Outcome<Unit, E> {
    move |input| {
        f(input);
        succeed(Unit)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::panic)]
    #![allow(clippy::arithmetic_side_effects)]

    use std::cell::{Cell, RefCell};
    use std::panic;

    use super::*;

    #[test]
    fn test_switch_wraps_return_value() {
        let mut square = switch(|x: i64| x * x);
        let result: Outcome<i64, String> = square(12);
        assert_eq!(result, succeed(144));
    }

    #[test]
    fn test_switch_producer_wraps_return_value() {
        let counter = Cell::new(10);
        let mut next = switch_producer(|| {
            counter.set(counter.get() + 1);
            counter.get()
        });
        let first: Outcome<i32, String> = next();
        let second: Outcome<i32, String> = next();
        assert_eq!(first, succeed(11));
        assert_eq!(second, succeed(12));
    }

    #[test]
    fn test_switch_action_runs_effect_and_succeeds_with_unit() {
        let log = RefCell::new(Vec::new());
        let mut push = switch_action(|line: &str| log.borrow_mut().push(line.to_owned()));
        let result: Outcome<Unit, String> = push("hello");
        assert_eq!(result, succeed(Unit));
        assert_eq!(*log.borrow(), vec!["hello".to_owned()]);
    }

    #[test]
    fn test_switch_does_not_catch_panics() {
        let mut explode = switch(|_: ()| -> i32 { panic!("not total after all") });
        let caught = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            let _: Outcome<i32, String> = explode(());
        }));
        assert!(caught.is_err());
    }

    #[test]
    fn test_switch_composes_with_bind() {
        let mut length = switch(|s: String| s.len());
        let mut step = crate::bind::bind(|s: String| length(s));
        let result: Outcome<usize, String> = step(succeed("four".to_owned()));
        assert_eq!(result, succeed(4));
    }
}
