//! JSON marshaling of the value objects.
//!
//! Writing is driven by presence: a field is emitted only when it was set on
//! the builder the object came from, so a builder with a single setter call
//! produces a minimal payload suitable for a partial update. Reading does the
//! inverse and marks exactly the members found in the document as present.
//!
//! ```rust
//! use ocm_clusters::builders::ClusterBuilder;
//! use ocm_clusters::json;
//! use ocm_clusters::presence::Presence;
//! use ocm_clusters::types::ClusterField;
//!
//! let patch = ClusterBuilder::new().display_name("renamed").build().unwrap();
//! assert_eq!(
//!     json::marshal(&patch).unwrap(),
//!     r#"{"kind":"Cluster","display_name":"renamed"}"#
//! );
//!
//! let cluster = json::unmarshal::<ClusterBuilder>(r#"{"multi_az":false}"#).unwrap();
//! assert!(cluster.is_set(ClusterField::MultiAz));
//! assert!(!cluster.is_set(ClusterField::Name));
//! ```

/// Error types for JSON operations.
pub mod error;
/// Trait implemented by builders that can be read from JSON.
pub mod traits;

pub(crate) mod reader;
pub(crate) mod writer;

mod add_on;
mod cloud;
mod cluster;
mod identity_provider;
mod list;
mod machine_pool;
mod version;

#[cfg(test)]
mod tests;

use serde::Serialize;
use serde_json::Value;

use crate::builders::ObjectBuilder;

pub use error::{JsonError, JsonResult};
pub use traits::ReadJson;

/// Write an object as compact JSON text.
pub fn marshal<T: Serialize>(object: &T) -> JsonResult<String> {
    Ok(serde_json::to_string(object)?)
}

/// Write an object as indented JSON text.
pub fn marshal_pretty<T: Serialize>(object: &T) -> JsonResult<String> {
    Ok(serde_json::to_string_pretty(object)?)
}

/// Read a single object from JSON text and build it.
pub fn unmarshal<B>(text: &str) -> JsonResult<B::Object>
where
    B: ReadJson + ObjectBuilder,
{
    Ok(B::read_json_str(text)?.build()?)
}

/// Read a JSON array of objects and build each of them, in order.
///
/// The first element that cannot be read or built aborts the whole list.
pub fn unmarshal_list<B>(text: &str) -> JsonResult<Vec<B::Object>>
where
    B: ReadJson + ObjectBuilder,
{
    let value: Value = serde_json::from_str(text)?;
    let items = value
        .as_array()
        .ok_or_else(|| JsonError::invalid_type("", "array of objects"))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let builder = B::read_json(item).map_err(|err| err.within(&format!("[{}]", index)))?;
            build_element(&builder, index)
        })
        .collect()
}

/// Build element `index` of a document array, tagging a failure with its position.
fn build_element<B: ObjectBuilder>(builder: &B, index: usize) -> JsonResult<B::Object> {
    Ok(builder.build().map_err(|err| err.nested_at("", index))?)
}
