//! Serialization support for [`Maybe`].
//!
//! A present value is encoded as the bare value and an absent one as the
//! format's null. Decoding is the reverse; a struct field that is missing
//! altogether also decodes to `Absent`.
//!
//! A `T` that itself encodes as null (`()`, a nested `Maybe`) is ambiguous:
//! `Maybe::present(())` encodes as `null` and decodes back as `Absent`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::maybe::Maybe;

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Maybe::Present(value) => serializer.serialize_some(value),
            Maybe::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        if value.is_none() {
            tracing::trace!("decoded null as an absent value");
        }
        Ok(value.into())
    }
}
