//! Presence-driven JSON object writer.
//!
//! Fields are written only when they are in the presence set of the object,
//! so an object built with a single setter call produces a payload with a
//! single member (plus `kind` for objects with an identity).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::presence::{Field, FieldSet};

/// Writes the present fields of one object.
pub(crate) struct ObjectWriter<'a, M, F: Field> {
    map: M,
    fields: &'a FieldSet<F>,
}

/// Start writing an object. `kind` is written first when given.
pub(crate) fn begin<'a, S, F>(
    serializer: S,
    fields: &'a FieldSet<F>,
    kind: Option<&'static str>,
) -> Result<ObjectWriter<'a, S::SerializeMap, F>, S::Error>
where
    S: Serializer,
    F: Field,
{
    let mut map = serializer.serialize_map(None)?;
    if let Some(kind) = kind {
        map.serialize_entry("kind", kind)?;
    }
    Ok(ObjectWriter { map, fields })
}

impl<M, F> ObjectWriter<'_, M, F>
where
    M: SerializeMap,
    F: Field,
{
    /// Write `value` under the key of `field` if the field is present.
    pub(crate) fn field<T>(&mut self, field: F, value: &T) -> Result<(), M::Error>
    where
        T: Serialize + ?Sized,
    {
        if self.fields.contains(field) {
            self.map.serialize_entry(field.name(), value)?;
        }
        Ok(())
    }

    /// Write an optional value if the field is present and the value exists.
    pub(crate) fn optional<T>(&mut self, field: F, value: Option<&T>) -> Result<(), M::Error>
    where
        T: Serialize + ?Sized,
    {
        match value {
            Some(value) => self.field(field, value),
            None => Ok(()),
        }
    }

    /// Write a timestamp as an RFC 3339 string in UTC.
    pub(crate) fn timestamp(&mut self, field: F, value: Option<&DateTime<Utc>>) -> Result<(), M::Error> {
        match value {
            Some(value) => self.field(field, &value.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => Ok(()),
        }
    }

    pub(crate) fn end(self) -> Result<M::Ok, M::Error> {
        self.map.end()
    }
}
