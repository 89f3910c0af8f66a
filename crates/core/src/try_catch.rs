//! Lifting partial functions: the boundary where panics become outcomes.
//!
//! Each `try_catch` shape runs the wrapped function under
//! [`std::panic::catch_unwind`]. A normal return lands on the success track.
//! A panic is captured as a [`Fault`], handed to the caller's error handler,
//! and whatever the handler returns lands on the error track.
//!
//! The process panic hook still runs for a caught panic, so the usual
//! message is printed unless the host has replaced the hook.
//!
//! Captured state is treated as unwind safe. A value the wrapped function was
//! mutating when it panicked may be left half-updated.

use std::panic::{self, AssertUnwindSafe};

use crate::fault::Fault;
use crate::outcome::{Outcome, fail, succeed};
use crate::unit::Unit;

fn guarded<R, E>(body: impl FnOnce() -> R, handler: &mut impl FnMut(Fault) -> E) -> Outcome<R, E> {
    match panic::catch_unwind(AssertUnwindSafe(body)) {
        Ok(value) => succeed(value),
        Err(payload) => {
            let fault = Fault::from_panic(payload);
            tracing::debug!(fault = %fault, "caught panic at try_catch boundary");
            fail(handler(fault))
        }
    }
}

/// Lift a possibly panicking `T -> U` into `T -> Outcome<U, E>`.
///
/// # Examples
///
/// ```
/// use switchyard_core::{fail, succeed, try_catch, Fault, Outcome};
///
/// #[derive(Debug, PartialEq)]
/// struct Wrapped(String);
///
/// let mut checked_div = try_catch(
///     |(a, b): (i32, i32)| a / b,
///     |fault: Fault| Wrapped(fault.to_string()),
/// );
///
/// assert_eq!(checked_div((8, 2)), succeed(4));
/// assert!(checked_div((1, 0)).is_error());
/// ```
pub fn try_catch<T, U, E>(
    mut f: impl FnMut(T) -> U,
    mut handler: impl FnMut(Fault) -> E,
) -> impl FnMut(T) -> Outcome<U, E> {
    move |input| guarded(|| f(input), &mut handler)
}

/// Lift a possibly panicking `() -> T` into `() -> Outcome<T, E>`.
pub fn try_catch_producer<T, E>(
    mut f: impl FnMut() -> T,
    mut handler: impl FnMut(Fault) -> E,
) -> impl FnMut() -> Outcome<T, E> {
    move || guarded(&mut f, &mut handler)
}

/// Lift a possibly panicking consumer into `T -> Outcome<Unit, E>`.
///
/// Unlike [`bind_action`](crate::bind_action), a failure is reported rather
/// than discarded.
pub fn try_catch_action<T, E>(
    mut f: impl FnMut(T),
    mut handler: impl FnMut(Fault) -> E,
) -> impl FnMut(T) -> Outcome<Unit, E> {
    move |input| guarded(|| f(input), &mut handler).map(|()| Unit)
}

/// Run a function that reports failure through `Result` and normalise its
/// error with `handler`.
///
/// # Examples
///
/// ```
/// use switchyard_core::{attempt, succeed, Outcome};
///
/// let port: Outcome<u16, String> =
///     attempt(|| "8080".parse::<u16>(), |e| format!("bad port: {e}"));
/// assert_eq!(port, succeed(8080));
/// ```
pub fn attempt<T, X, E>(
    f: impl FnOnce() -> Result<T, X>,
    handler: impl FnOnce(X) -> E,
) -> Outcome<T, E> {
    Outcome::from(f()).map_error(handler)
}
