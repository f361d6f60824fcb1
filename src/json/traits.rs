//! Trait definitions for JSON readable types.

use serde_json::Value;

use super::error::JsonResult;

/// Trait for builders that can be populated from a JSON object.
///
/// Every member present in the object marks the corresponding field as set,
/// so a builder read from a partial document reproduces exactly the fields
/// the document carried.
pub trait ReadJson: Sized {
    /// Read a JSON value into a new builder.
    fn read_json(value: &Value) -> JsonResult<Self>;

    /// Convenience method to read a builder from JSON text.
    fn read_json_str(text: &str) -> JsonResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::read_json(&value)
    }
}

/// Implements `Deserialize` for value objects by reading the document into
/// the builder and building it.
macro_rules! impl_deserialize {
    ($($object:ty => $builder:ty),+ $(,)?) => {
        $(
            impl<'de> serde::Deserialize<'de> for $object {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    use serde::de::Error;

                    let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                    let builder = <$builder as $crate::json::ReadJson>::read_json(&value)
                        .map_err(D::Error::custom)?;
                    builder.build().map_err(D::Error::custom)
                }
            }
        )+
    };
}

pub(crate) use impl_deserialize;
