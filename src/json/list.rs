//! JSON support for collections of objects with an identity.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::types::{List, ListKind};

/// Plain lists are written as arrays. Lists that are links, or that carry
/// an `href`, are written as list objects with their `kind`.
impl<T> Serialize for List<T>
where
    T: Serialize + ListKind,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !self.has_envelope() {
            return self.items.serialize(serializer);
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", self.kind())?;
        if !self.href.is_empty() {
            map.serialize_entry("href", &self.href)?;
        }
        if !self.items.is_empty() {
            map.serialize_entry("items", &self.items)?;
        }
        map.end()
    }
}
