//! Presence-tracked builders for the clusters management resources.
//!
//! Every resource type has a builder that accumulates field assignments,
//! remembers which fields were explicitly set, and materializes an immutable
//! value object on [`build`](ObjectBuilder::build). Nested objects are set
//! through their own builders and are built recursively; the first nested
//! failure aborts the whole build.
//!
//! ```rust
//! use ocm_clusters::builders::*;
//! use ocm_clusters::presence::Presence;
//! use ocm_clusters::types::ClusterField;
//!
//! let cluster = ClusterBuilder::new()
//!     .name("test")
//!     .multi_az(false)
//!     .region(CloudRegionBuilder::new().id("us-east-1"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(cluster.name(), "test");
//! // Explicitly set to `false`, so still present.
//! assert!(cluster.is_set(ClusterField::MultiAz));
//! assert!(!cluster.is_set(ClusterField::Managed));
//! ```

/// Error types for the builder API.
pub mod error;
/// Builders for cloud providers and regions.
pub mod cloud;
/// Builder for numeric values with units.
pub mod value;
/// Builder for versions.
pub mod version;
/// Builder for the node layout of a cluster.
pub mod nodes;
/// Builders for machine pools and their parts.
pub mod machine_pool;
/// Builder for identity providers.
pub mod identity_provider;
/// Builder for add-ons.
pub mod add_on;
/// Builder for clusters.
pub mod cluster;
/// Builder for collections of objects with an identity.
pub mod list;

#[cfg(test)]
mod tests;

use crate::presence::Presence;

// Re-export builders at module level
pub use add_on::AddOnBuilder;
pub use cloud::{CloudProviderBuilder, CloudRegionBuilder};
pub use cluster::ClusterBuilder;
pub use error::{BuildError, BuildResult};
pub use identity_provider::IdentityProviderBuilder;
pub use list::ListBuilder;
pub use machine_pool::{MachinePoolAutoscalingBuilder, MachinePoolBuilder, TaintBuilder};
pub use nodes::ClusterNodesBuilder;
pub use value::ValueBuilder;
pub use version::VersionBuilder;

/// Operations shared by every builder, for code that is generic over the
/// resource type.
pub trait ObjectBuilder: Clone + Default + Presence {
    /// The value object produced by the builder.
    type Object: Presence;

    /// Materialize a value object from the current state of the builder.
    fn build(&self) -> BuildResult<Self::Object>;

    /// Discard the state of the builder and mirror `object` instead.
    fn copy_from(self, object: &Self::Object) -> Self;
}

macro_rules! impl_object_builder {
    ($($builder:ident => $object:ty),+ $(,)?) => {
        $(
            impl ObjectBuilder for $builder {
                type Object = $object;

                fn build(&self) -> BuildResult<$object> {
                    $builder::build(self)
                }

                fn copy_from(self, object: &$object) -> Self {
                    $builder::copy_from(self, object)
                }
            }

            impl From<&$object> for $builder {
                fn from(object: &$object) -> Self {
                    $builder::new().copy_from(object)
                }
            }
        )+
    };
}

impl_object_builder! {
    ValueBuilder => crate::types::Value,
    CloudProviderBuilder => crate::types::CloudProvider,
    CloudRegionBuilder => crate::types::CloudRegion,
    VersionBuilder => crate::types::Version,
    ClusterNodesBuilder => crate::types::ClusterNodes,
    MachinePoolAutoscalingBuilder => crate::types::MachinePoolAutoscaling,
    TaintBuilder => crate::types::Taint,
    MachinePoolBuilder => crate::types::MachinePool,
    IdentityProviderBuilder => crate::types::IdentityProvider,
    AddOnBuilder => crate::types::AddOn,
    ClusterBuilder => crate::types::Cluster,
}

/// Implements [`Presence`] for builders, which all keep their set in `fields`.
macro_rules! impl_presence {
    ($($builder:ty => $field:ty),+ $(,)?) => {
        $(
            impl Presence for $builder {
                type Field = $field;

                fn fields(&self) -> &crate::presence::FieldSet<$field> {
                    &self.fields
                }
            }
        )+
    };
}

impl_presence! {
    ValueBuilder => crate::types::ValueField,
    CloudProviderBuilder => crate::types::CloudProviderField,
    CloudRegionBuilder => crate::types::CloudRegionField,
    VersionBuilder => crate::types::VersionField,
    ClusterNodesBuilder => crate::types::ClusterNodesField,
    MachinePoolAutoscalingBuilder => crate::types::MachinePoolAutoscalingField,
    TaintBuilder => crate::types::TaintField,
    MachinePoolBuilder => crate::types::MachinePoolField,
    IdentityProviderBuilder => crate::types::IdentityProviderField,
    AddOnBuilder => crate::types::AddOnField,
    ClusterBuilder => crate::types::ClusterField,
}

/// Setters shared by the builders of objects with an identity.
macro_rules! class_setters {
    ($field:ident) => {
        /// Mark the object as a link; it is then written with its link kind.
        pub fn link(mut self, value: bool) -> Self {
            self.link = value;
            self
        }

        /// Set the identifier of the object.
        pub fn id(mut self, value: impl Into<String>) -> Self {
            self.id = value.into();
            self.fields.insert($field::Id);
            self
        }

        /// Set the link to the object.
        pub fn href(mut self, value: impl Into<String>) -> Self {
            self.href = value.into();
            self.fields.insert($field::Href);
            self
        }
    };
}

pub(crate) use class_setters;

/// Build an optional nested builder, reporting failures under `field`.
pub(crate) fn build_nested<B>(field: &'static str, builder: Option<&B>) -> BuildResult<Option<B::Object>>
where
    B: ObjectBuilder,
{
    builder
        .map(|builder| builder.build().map_err(|err| err.nested(field)))
        .transpose()
}

/// Build every element of a repeated field in order, stopping at the first failure.
pub(crate) fn build_list<B>(field: &'static str, builders: &[B]) -> BuildResult<Vec<B::Object>>
where
    B: ObjectBuilder,
{
    builders
        .iter()
        .enumerate()
        .map(|(index, builder)| builder.build().map_err(|err| err.nested_at(field, index)))
        .collect()
}

/// Wrap every element of a repeated field in a fresh builder.
pub(crate) fn copy_list<B>(objects: &[B::Object]) -> Vec<B>
where
    B: ObjectBuilder,
{
    objects
        .iter()
        .map(|object| B::default().copy_from(object))
        .collect()
}
