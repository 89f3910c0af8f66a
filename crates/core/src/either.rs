//! Elimination: leave the railway by handling both tracks.

use crate::outcome::Outcome;
use crate::unit::Unit;

/// Run `on_success` with the value or `on_error` with the error.
///
/// Exactly one handler runs, synchronously and once. `R` may be `()` when the
/// handlers only perform effects.
///
/// # Examples
///
/// ```
/// use switchyard_core::{either, fail, succeed, Outcome};
///
/// let describe = |outcome: Outcome<u8, &str>| {
///     either(outcome, |v| format!("got {v}"), |e| format!("failed: {e}"))
/// };
///
/// assert_eq!(describe(succeed(3)), "got 3");
/// assert_eq!(describe(fail("late")), "failed: late");
/// ```
pub fn either<T, E, R>(
    outcome: Outcome<T, E>,
    on_success: impl FnOnce(T) -> R,
    on_error: impl FnOnce(E) -> R,
) -> R {
    outcome.either(on_success, on_error)
}

/// [`either`] for outcomes that carry no value: the success handler takes no
/// arguments.
pub fn either_unit<E, R>(
    outcome: Outcome<Unit, E>,
    on_success: impl FnOnce() -> R,
    on_error: impl FnOnce(E) -> R,
) -> R {
    outcome.either(|Unit| on_success(), on_error)
}
