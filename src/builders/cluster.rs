//! Builder for clusters.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use super::add_on::AddOnBuilder;
use super::cloud::{CloudProviderBuilder, CloudRegionBuilder};
use super::error::{BuildResult, check_timestamp};
use super::identity_provider::IdentityProviderBuilder;
use super::list::ListBuilder;
use super::machine_pool::MachinePoolBuilder;
use super::nodes::ClusterNodesBuilder;
use super::value::ValueBuilder;
use super::version::VersionBuilder;
use super::{build_nested, class_setters};
use crate::enums::ClusterState;
use crate::presence::{Field, FieldSet};
use crate::types::{Cluster, ClusterField};

/// Builder for [`Cluster`] objects.
///
/// This is the top-level builder of the resource model; every other builder
/// can be reached from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterBuilder {
    pub(crate) fields: FieldSet<ClusterField>,
    link: bool,
    id: String,
    href: String,
    addons: ListBuilder<AddOnBuilder>,
    cloud_provider: Option<CloudProviderBuilder>,
    creation_timestamp: Option<DateTime<Utc>>,
    display_name: String,
    expiration_timestamp: Option<DateTime<Utc>>,
    external_id: String,
    identity_providers: ListBuilder<IdentityProviderBuilder>,
    machine_pools: ListBuilder<MachinePoolBuilder>,
    managed: bool,
    multi_az: bool,
    name: String,
    node_drain_grace_period: Option<ValueBuilder>,
    nodes: Option<ClusterNodesBuilder>,
    properties: BTreeMap<String, String>,
    region: Option<CloudRegionBuilder>,
    state: Option<ClusterState>,
    version: Option<VersionBuilder>,
}

impl ClusterBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    class_setters!(ClusterField);

    /// Replace the installed add-ons collection, including its link and `href`.
    pub fn addons_list(mut self, value: ListBuilder<AddOnBuilder>) -> Self {
        self.addons = value;
        self.fields.insert(ClusterField::Addons);
        self
    }

    /// Replace the installed add-ons.
    pub fn addons<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = AddOnBuilder>,
    {
        self.addons = ListBuilder::new().items(values);
        self.fields.insert(ClusterField::Addons);
        self
    }

    /// Append an installed add-on.
    pub fn add_addon(mut self, value: AddOnBuilder) -> Self {
        self.addons.push(value);
        self.fields.insert(ClusterField::Addons);
        self
    }

    /// Set the cloud provider. Passing `None` unsets it.
    pub fn cloud_provider(mut self, value: impl Into<Option<CloudProviderBuilder>>) -> Self {
        self.cloud_provider = value.into();
        self.fields
            .set(ClusterField::CloudProvider, self.cloud_provider.is_some());
        self
    }

    /// Set the creation timestamp.
    pub fn creation_timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.creation_timestamp = Some(value);
        self.fields.insert(ClusterField::CreationTimestamp);
        self
    }

    /// Set the name shown in user interfaces.
    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = value.into();
        self.fields.insert(ClusterField::DisplayName);
        self
    }

    /// Set the expiration timestamp.
    pub fn expiration_timestamp(mut self, value: DateTime<Utc>) -> Self {
        self.expiration_timestamp = Some(value);
        self.fields.insert(ClusterField::ExpirationTimestamp);
        self
    }

    /// Set the identifier assigned by the cluster itself.
    pub fn external_id(mut self, value: impl Into<String>) -> Self {
        self.external_id = value.into();
        self.fields.insert(ClusterField::ExternalId);
        self
    }

    /// Replace the identity providers collection, including its link and `href`.
    pub fn identity_providers_list(mut self, value: ListBuilder<IdentityProviderBuilder>) -> Self {
        self.identity_providers = value;
        self.fields.insert(ClusterField::IdentityProviders);
        self
    }

    /// Replace the identity providers.
    pub fn identity_providers<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = IdentityProviderBuilder>,
    {
        self.identity_providers = ListBuilder::new().items(values);
        self.fields.insert(ClusterField::IdentityProviders);
        self
    }

    /// Append an identity provider.
    pub fn add_identity_provider(mut self, value: IdentityProviderBuilder) -> Self {
        self.identity_providers.push(value);
        self.fields.insert(ClusterField::IdentityProviders);
        self
    }

    /// Replace the machine pools collection, including its link and `href`.
    pub fn machine_pools_list(mut self, value: ListBuilder<MachinePoolBuilder>) -> Self {
        self.machine_pools = value;
        self.fields.insert(ClusterField::MachinePools);
        self
    }

    /// Replace the machine pools.
    pub fn machine_pools<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = MachinePoolBuilder>,
    {
        self.machine_pools = ListBuilder::new().items(values);
        self.fields.insert(ClusterField::MachinePools);
        self
    }

    /// Append a machine pool.
    pub fn add_machine_pool(mut self, value: MachinePoolBuilder) -> Self {
        self.machine_pools.push(value);
        self.fields.insert(ClusterField::MachinePools);
        self
    }

    /// Set whether the cluster is managed by the service.
    pub fn managed(mut self, value: bool) -> Self {
        self.managed = value;
        self.fields.insert(ClusterField::Managed);
        self
    }

    /// Set whether the cluster spans multiple availability zones.
    pub fn multi_az(mut self, value: bool) -> Self {
        self.multi_az = value;
        self.fields.insert(ClusterField::MultiAz);
        self
    }

    /// Set the name of the cluster.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = value.into();
        self.fields.insert(ClusterField::Name);
        self
    }

    /// Set the node drain grace period. Passing `None` unsets it.
    pub fn node_drain_grace_period(mut self, value: impl Into<Option<ValueBuilder>>) -> Self {
        self.node_drain_grace_period = value.into();
        self.fields.set(
            ClusterField::NodeDrainGracePeriod,
            self.node_drain_grace_period.is_some(),
        );
        self
    }

    /// Set the node layout. Passing `None` unsets it.
    pub fn nodes(mut self, value: impl Into<Option<ClusterNodesBuilder>>) -> Self {
        self.nodes = value.into();
        self.fields.set(ClusterField::Nodes, self.nodes.is_some());
        self
    }

    /// Replace the user defined properties. Passing `None` unsets them.
    pub fn properties(mut self, value: impl Into<Option<BTreeMap<String, String>>>) -> Self {
        let value = value.into();
        self.fields.set(ClusterField::Properties, value.is_some());
        self.properties = value.unwrap_or_default();
        self
    }

    /// Add a single property, keeping the existing ones.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self.fields.insert(ClusterField::Properties);
        self
    }

    /// Set the region. Passing `None` unsets it.
    pub fn region(mut self, value: impl Into<Option<CloudRegionBuilder>>) -> Self {
        self.region = value.into();
        self.fields.set(ClusterField::Region, self.region.is_some());
        self
    }

    /// Set the overall state.
    pub fn state(mut self, value: ClusterState) -> Self {
        self.state = Some(value);
        self.fields.insert(ClusterField::State);
        self
    }

    /// Set the version. Passing `None` unsets it.
    pub fn version(mut self, value: impl Into<Option<VersionBuilder>>) -> Self {
        self.version = value.into();
        self.fields.set(ClusterField::Version, self.version.is_some());
        self
    }

    /// Discard the current state and mirror `object`.
    ///
    /// Nested objects are wrapped in fresh builders, so later changes to this
    /// builder never reach `object`.
    pub fn copy_from(self, object: &Cluster) -> Self {
        Self {
            fields: object.fields.clone(),
            link: object.link,
            id: object.id.clone(),
            href: object.href.clone(),
            addons: ListBuilder::<AddOnBuilder>::copy_of(&object.addons),
            cloud_provider: object.cloud_provider.as_ref().map(CloudProviderBuilder::from),
            creation_timestamp: object.creation_timestamp,
            display_name: object.display_name.clone(),
            expiration_timestamp: object.expiration_timestamp,
            external_id: object.external_id.clone(),
            identity_providers: ListBuilder::<IdentityProviderBuilder>::copy_of(&object.identity_providers),
            machine_pools: ListBuilder::<MachinePoolBuilder>::copy_of(&object.machine_pools),
            managed: object.managed,
            multi_az: object.multi_az,
            name: object.name.clone(),
            node_drain_grace_period: object.node_drain_grace_period.as_ref().map(ValueBuilder::from),
            nodes: object.nodes.as_ref().map(ClusterNodesBuilder::from),
            properties: object.properties.clone(),
            region: object.region.as_ref().map(CloudRegionBuilder::from),
            state: object.state.clone(),
            version: object.version.as_ref().map(VersionBuilder::from),
        }
    }

    /// Build the cluster.
    ///
    /// # Errors
    ///
    /// Fails with the first invalid timestamp or nested builder failure, in
    /// field order. No partially built cluster is returned.
    pub fn build(&self) -> BuildResult<Cluster> {
        Ok(Cluster {
            fields: self.fields.clone(),
            link: self.link,
            id: self.id.clone(),
            href: self.href.clone(),
            addons: self.addons.build(ClusterField::Addons.name())?,
            cloud_provider: build_nested(
                ClusterField::CloudProvider.name(),
                self.cloud_provider.as_ref(),
            )?,
            creation_timestamp: check_timestamp(
                ClusterField::CreationTimestamp.name(),
                self.creation_timestamp,
            )?,
            display_name: self.display_name.clone(),
            expiration_timestamp: check_timestamp(
                ClusterField::ExpirationTimestamp.name(),
                self.expiration_timestamp,
            )?,
            external_id: self.external_id.clone(),
            identity_providers: self
                .identity_providers
                .build(ClusterField::IdentityProviders.name())?,
            machine_pools: self.machine_pools.build(ClusterField::MachinePools.name())?,
            managed: self.managed,
            multi_az: self.multi_az,
            name: self.name.clone(),
            node_drain_grace_period: build_nested(
                ClusterField::NodeDrainGracePeriod.name(),
                self.node_drain_grace_period.as_ref(),
            )?,
            nodes: build_nested(ClusterField::Nodes.name(), self.nodes.as_ref())?,
            properties: self.properties.clone(),
            region: build_nested(ClusterField::Region.name(), self.region.as_ref())?,
            state: self.state.clone(),
            version: build_nested(ClusterField::Version.name(), self.version.as_ref())?,
        })
    }
}
