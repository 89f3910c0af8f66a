//! Conversions between [`Outcome`] and other outcome representations.
//!
//! Every conversion out of `Outcome` is lossless. Conversions into it are
//! lossless for well-formed input and report a [`BridgeError`] otherwise.

use crate::error::BridgeError;
use crate::fault::Fault;
use crate::outcome::Outcome;
use crate::tagged::TaggedOutcome;

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Error(error) => Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for TaggedOutcome<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Self::Success(value),
            Outcome::Error(error) => Self::Failure(error),
        }
    }
}

impl<T, E: From<BridgeError>> From<TaggedOutcome<T, E>> for Outcome<T, E> {
    fn from(tagged: TaggedOutcome<T, E>) -> Self {
        Self::from_tagged(tagged)
    }
}

impl From<BridgeError> for Fault {
    fn from(error: BridgeError) -> Self {
        Self::new(error)
    }
}

impl<T, E> Outcome<T, E> {
    /// Rebuild an outcome from the parts returned by [`Outcome::deconstruct`].
    ///
    /// # Errors
    ///
    /// Returns a [`BridgeError`] when the parts do not describe exactly one
    /// live track, or when the flag disagrees with the parts.
    pub fn from_parts(
        is_success: bool,
        value: Option<T>,
        error: Option<E>,
    ) -> Result<Self, BridgeError> {
        match (is_success, value, error) {
            (true, Some(value), None) => Ok(Self::Success(value)),
            (false, None, Some(error)) => Ok(Self::Error(error)),
            (_, Some(_), Some(_)) => Err(BridgeError::BothPresent),
            (true, None, None) => Err(BridgeError::MissingValue),
            (false, None, None) => Err(BridgeError::MissingError),
            (flag, _, _) => Err(BridgeError::FlagMismatch { flag }),
        }
    }

    /// Convert a tagged outcome, mapping an unrecognized tag onto the error
    /// track as [`BridgeError::UnrecognizedTag`].
    ///
    /// An unrecognized tag means the producer knows a variant this crate
    /// does not, so the conversion is logged at `warn`.
    pub fn from_tagged(tagged: TaggedOutcome<T, E>) -> Self
    where
        E: From<BridgeError>,
    {
        match tagged {
            TaggedOutcome::Success(value) => Self::Success(value),
            TaggedOutcome::Failure(error) => Self::Error(error),
            TaggedOutcome::Unrecognized { tag } => {
                tracing::warn!(tag = %tag, "bridging unrecognized outcome tag onto the error track");
                Self::Error(BridgeError::UnrecognizedTag { tag }.into())
            }
        }
    }
}
