//! Error types raised while moving outcomes between representations.
//!
//! Conversions into `Outcome` are lossless for well-formed input; these
//! variants describe the input that is not.

use thiserror::Error;

/// Failure to bridge a foreign outcome representation into [`Outcome`].
///
/// [`Outcome`]: crate::Outcome
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum BridgeError {
    /// A tagged outcome carried a tag that is neither `Success` nor `Failure`.
    #[error("unrecognized outcome tag '{tag}': expected 'Success' or 'Failure'")]
    UnrecognizedTag { tag: String },

    /// Parts claimed success but carried no value.
    #[error("outcome parts marked successful but no value is present")]
    MissingValue,

    /// Parts claimed failure but carried no error.
    #[error("outcome parts marked failed but no error is present")]
    MissingError,

    /// Parts carried a value and an error at the same time.
    #[error("outcome parts carry both a value and an error")]
    BothPresent,

    /// The success flag disagrees with which part is present.
    #[error("outcome success flag is {flag} but the parts say otherwise")]
    FlagMismatch { flag: bool },
}

impl BridgeError {
    /// Create an unrecognized tag error.
    pub fn unrecognized_tag(tag: impl Into<String>) -> Self {
        Self::UnrecognizedTag { tag: tag.into() }
    }

    /// Short stable name for the variant, suitable for log fields.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnrecognizedTag { .. } => "unrecognized_tag",
            Self::MissingValue => "missing_value",
            Self::MissingError => "missing_error",
            Self::BothPresent => "both_present",
            Self::FlagMismatch { .. } => "flag_mismatch",
        }
    }
}
