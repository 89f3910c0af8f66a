//! A foreign "Success / Failure" tagged union.
//!
//! Producers outside this crate may describe an outcome as a single-entry map
//! keyed by its tag, `{"Success": item}` or `{"Failure": item}`, and may also
//! use tags this crate has never heard of. [`TaggedOutcome`] keeps such a tag
//! instead of rejecting the record, so the decision of what to do with it is
//! made at the bridge.

#[cfg(feature = "serde")]
use std::{fmt, marker::PhantomData};

#[cfg(feature = "serde")]
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, IgnoredAny, MapAccess, Visitor},
    ser::SerializeMap,
};

const SUCCESS: &str = "Success";
const FAILURE: &str = "Failure";

/// A three-state outcome as produced by foreign code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TaggedOutcome<T, E> {
    /// Tagged `Success`.
    Success(T),
    /// Tagged `Failure`.
    Failure(E),
    /// Any other tag. Its item is not kept.
    Unrecognized {
        /// The tag as it appeared on the wire.
        tag: String,
    },
}

impl<T, E> TaggedOutcome<T, E> {
    /// The tag this value is written with.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Success(_) => SUCCESS,
            Self::Failure(_) => FAILURE,
            Self::Unrecognized { tag } => tag,
        }
    }

    /// Transform a `Failure` item, keeping the other variants.
    pub fn map_failure<E2>(self, f: impl FnOnce(E) -> E2) -> TaggedOutcome<T, E2> {
        match self {
            Self::Success(value) => TaggedOutcome::Success(value),
            Self::Failure(error) => TaggedOutcome::Failure(f(error)),
            Self::Unrecognized { tag } => TaggedOutcome::Unrecognized { tag },
        }
    }
}

#[cfg(feature = "serde")]
impl<T: Serialize, E: Serialize> Serialize for TaggedOutcome<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::Success(value) => map.serialize_entry(SUCCESS, value)?,
            Self::Failure(error) => map.serialize_entry(FAILURE, error)?,
            Self::Unrecognized { tag } => map.serialize_entry(tag, &())?,
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, T, E> Deserialize<'de> for TaggedOutcome<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TaggedVisitor(PhantomData))
    }
}

#[cfg(feature = "serde")]
struct TaggedVisitor<T, E>(PhantomData<fn() -> (T, E)>);

#[cfg(feature = "serde")]
impl<'de, T, E> Visitor<'de> for TaggedVisitor<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    type Value = TaggedOutcome<T, E>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map with exactly one entry keyed by the outcome tag")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let Some(tag) = map.next_key::<String>()? else {
            return Err(de::Error::invalid_length(0, &self));
        };

        let decoded = match tag.as_str() {
            SUCCESS => TaggedOutcome::Success(map.next_value()?),
            FAILURE => TaggedOutcome::Failure(map.next_value()?),
            _ => {
                map.next_value::<IgnoredAny>()?;
                TaggedOutcome::Unrecognized { tag }
            }
        };

        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom("expected exactly one outcome tag"));
        }
        Ok(decoded)
    }
}
