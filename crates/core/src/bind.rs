//! Sequencing: chain steps so the first failure short-circuits the rest.
//!
//! Three shapes, each built on [`either`]:
//!
//! - [`bind`] turns `T -> Outcome<U, E>` into `Outcome<T, E> -> Outcome<U, E>`.
//! - [`bind_producer`] defers a `() -> Outcome<T, E>` behind the success track.
//! - [`bind_action`] runs a consumer on success and discards errors.

use std::any;

use crate::either::{either, either_unit};
use crate::outcome::{Outcome, fail, succeed};
use crate::unit::Unit;

/// Lift a step into one that accepts the previous step's outcome.
///
/// On `Success(v)` the result is `f(v)`. On `Error(e)` the result is
/// `fail(e)` with the same error and `f` is not called.
///
/// # Examples
///
/// ```
/// use switchyard_core::{bind, fail, succeed, Outcome};
///
/// let mut increment = bind(|x: i32| succeed::<_, &str>(x + 1));
///
/// assert_eq!(increment(succeed(41)), succeed(42));
/// assert_eq!(increment(fail("broken")), Outcome::Error("broken"));
/// ```
pub fn bind<T, U, E>(
    mut f: impl FnMut(T) -> Outcome<U, E>,
) -> impl FnMut(Outcome<T, E>) -> Outcome<U, E> {
    move |outcome| either(outcome, &mut f, fail)
}

/// Defer `f` behind the success track.
///
/// Calling the returned function seeds the railway with `succeed(Unit)` and
/// continues with `f`, so whatever `f` reports is returned as is.
pub fn bind_producer<T, E>(
    mut f: impl FnMut() -> Outcome<T, E>,
) -> impl FnMut() -> Outcome<T, E> {
    move || either_unit(succeed(Unit), &mut f, fail)
}

/// Run `f` on the value of a successful outcome.
///
/// An error is discarded: nothing runs and nothing is returned. This is the
/// only combinator that drops an error; use [`either`] when the error matters.
/// Each discard is reported as a `debug` tracing event.
pub fn bind_action<T, E>(mut f: impl FnMut(T)) -> impl FnMut(Outcome<T, E>) {
    move |outcome| {
        either(outcome, &mut f, |_: E| {
            tracing::debug!(
                error_type = any::type_name::<E>(),
                "bind_action discarded an error"
            );
        });
    }
}
