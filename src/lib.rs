//! Resource model of the clusters management API.
//!
//! The crate provides immutable value objects for clusters and the resources
//! they reference, builders that remember which fields were explicitly set,
//! and (with the `serde` feature) a JSON codec that writes only those fields.
//!
//! ```rust
//! use ocm_clusters::builders::{ClusterBuilder, ValueBuilder};
//! use ocm_clusters::presence::Presence;
//! use ocm_clusters::types::ClusterField;
//!
//! let patch = ClusterBuilder::new()
//!     .node_drain_grace_period(ValueBuilder::new().unit("minutes").value(30.0))
//!     .build()
//!     .unwrap();
//!
//! assert!(patch.is_set(ClusterField::NodeDrainGracePeriod));
//! assert_eq!(patch.fields().len(), 1);
//! ```

pub mod builders;
pub mod enums;
#[cfg(feature = "serde")]
pub mod json;
pub mod presence;
pub mod types;

pub use builders::{BuildError, BuildResult, ObjectBuilder};
pub use enums::{AddOnInstallMode, ClusterState, IdentityProviderMappingMethod, IdentityProviderType};
pub use presence::{Field, FieldSet, Presence};
pub use types::{
    AddOn, CloudProvider, CloudRegion, Cluster, ClusterNodes, IdentityProvider, List, ListKind,
    MachinePool, MachinePoolAutoscaling, Taint, Value, Version,
};
