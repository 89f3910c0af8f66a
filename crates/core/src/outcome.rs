//! The two-track outcome type.
//!
//! An [`Outcome`] is either on the success track, carrying a value, or on the
//! error track, carrying a single error value. The sum type makes it
//! impossible to hold both at once.

use std::any::Any;
use std::panic;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fault::Fault;

/// The outcome of an operation that may fail.
///
/// `E` defaults to [`Fault`], the value produced when a panic is caught at a
/// `try_catch` boundary. Any other error type works as well; the library never
/// looks inside it.
///
/// # Examples
///
/// ```
/// use switchyard_core::{fail, succeed, Outcome};
///
/// let ok: Outcome<i32, &str> = succeed(42);
/// let bad: Outcome<i32, &str> = fail("no");
///
/// assert!(ok.is_success());
/// assert_eq!(bad.error(), Some(&"no"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[must_use = "an Outcome may be on the error track, which should be handled"]
pub enum Outcome<T, E = Fault> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Error(E),
}

/// Put `value` on the success track.
pub const fn succeed<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Put `error` on the error track.
pub const fn fail<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Error(error)
}

impl<T, E> Outcome<T, E> {
    /// `true` when the outcome carries a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// `true` when the outcome carries an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Borrow the value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Borrow the error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Take the value, dropping any error.
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Take the error, dropping any value.
    #[must_use]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Split into `(is_success, value, error)`.
    ///
    /// Exactly one of `value` and `error` is `Some`.
    #[must_use]
    pub fn deconstruct(self) -> (bool, Option<T>, Option<E>) {
        match self {
            Self::Success(value) => (true, Some(value), None),
            Self::Error(error) => (false, None, Some(error)),
        }
    }

    /// Borrow both tracks.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Error(error) => Outcome::Error(error),
        }
    }

    /// Run exactly one of the two handlers and return its result.
    ///
    /// Method form of [`either`](crate::either).
    pub fn either<R>(self, on_success: impl FnOnce(T) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Error(error) => on_error(error),
        }
    }

    /// Transform the value, leaving an error untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        self.either(|value| Outcome::Success(f(value)), Outcome::Error)
    }

    /// Transform the error, leaving a value untouched.
    pub fn map_error<E2>(self, f: impl FnOnce(E) -> E2) -> Outcome<T, E2> {
        self.either(Outcome::Success, |error| Outcome::Error(f(error)))
    }

    /// Continue on the success track with `f`, or pass the error through.
    ///
    /// Method form of [`bind`](crate::bind).
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        self.either(f, Outcome::Error)
    }

    /// The value, or `default` on the error track.
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        self.either(|value| value, |_| default)
    }

    /// The value, or one computed from the error.
    #[must_use]
    pub fn value_or_else(self, f: impl FnOnce(E) -> T) -> T {
        self.either(|value| value, f)
    }

    /// Leave the railway and return a plain `Result`, ready for `?`.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome is on the error track.
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E: Any + Send> Outcome<T, E> {
    /// Return the value, or raise the stored error as a panic.
    ///
    /// This is the explicit boundary back into abrupt-failure propagation.
    /// The panic payload is the stored error itself, so a caller that catches
    /// the unwind can downcast it back to `E` unchanged.
    ///
    /// # Panics
    ///
    /// Panics with the stored error as payload when the outcome is on the
    /// error track.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Error(error) => panic::panic_any(error),
        }
    }
}
