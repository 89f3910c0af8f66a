//! The zero-information success marker.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success without a payload.
///
/// Used as `T` in `Outcome<Unit, E>` when an operation succeeds but has
/// nothing to report. Interchangeable with `()` through `From`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit;

impl Unit {
    /// The single value of the type.
    pub const VALUE: Self = Self;
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    fn from((): ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
