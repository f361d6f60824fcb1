//! JSON support for clusters, their node layout and unit values.

use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use super::error::JsonResult;
use super::reader;
use super::traits::{ReadJson, impl_deserialize};
use super::writer;
use crate::builders::{
    AddOnBuilder, CloudProviderBuilder, CloudRegionBuilder, ClusterBuilder, ClusterNodesBuilder,
    IdentityProviderBuilder, MachinePoolBuilder, ValueBuilder, VersionBuilder,
};
use crate::enums::ClusterState;
use crate::presence::Field;
use crate::types::{Cluster, ClusterField, ClusterNodes, ClusterNodesField, Value, ValueField};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, None)?;
        state.field(ValueField::Unit, &self.unit)?;
        state.field(ValueField::Value, &self.value)?;
        state.end()
    }
}

impl ReadJson for ValueBuilder {
    fn read_json(value: &JsonValue) -> JsonResult<Self> {
        let mut builder = ValueBuilder::new();
        for (key, value) in reader::entries(value, "Value")? {
            let Some(field) = ValueField::from_name(key) else {
                reader::skip("Value", key);
                continue;
            };
            builder = match field {
                ValueField::Unit => builder.unit(reader::string(key, value)?),
                ValueField::Value => builder.value(reader::float(key, value)?),
            };
        }
        Ok(builder)
    }
}

impl Serialize for ClusterNodes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, None)?;
        state.field(ClusterNodesField::AvailabilityZones, &self.availability_zones)?;
        state.field(ClusterNodesField::Compute, &self.compute)?;
        state.field(ClusterNodesField::ComputeLabels, &self.compute_labels)?;
        state.field(ClusterNodesField::Infra, &self.infra)?;
        state.field(ClusterNodesField::Master, &self.master)?;
        state.end()
    }
}

impl ReadJson for ClusterNodesBuilder {
    fn read_json(value: &JsonValue) -> JsonResult<Self> {
        let mut builder = ClusterNodesBuilder::new();
        for (key, value) in reader::entries(value, "ClusterNodes")? {
            let Some(field) = ClusterNodesField::from_name(key) else {
                reader::skip("ClusterNodes", key);
                continue;
            };
            builder = match field {
                ClusterNodesField::AvailabilityZones => {
                    builder.availability_zones(reader::strings(key, value)?)
                }
                ClusterNodesField::Compute => builder.compute(reader::integer(key, value)?),
                ClusterNodesField::ComputeLabels => {
                    builder.compute_labels(reader::string_map(key, value)?)
                }
                ClusterNodesField::Infra => builder.infra(reader::integer(key, value)?),
                ClusterNodesField::Master => builder.master(reader::integer(key, value)?),
            };
        }
        Ok(builder)
    }
}

impl Serialize for Cluster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, Some(self.kind()))?;
        state.field(ClusterField::Id, &self.id)?;
        state.field(ClusterField::Href, &self.href)?;
        state.field(ClusterField::Addons, &self.addons)?;
        state.optional(ClusterField::CloudProvider, self.cloud_provider.as_ref())?;
        state.timestamp(ClusterField::CreationTimestamp, self.creation_timestamp.as_ref())?;
        state.field(ClusterField::DisplayName, &self.display_name)?;
        state.timestamp(ClusterField::ExpirationTimestamp, self.expiration_timestamp.as_ref())?;
        state.field(ClusterField::ExternalId, &self.external_id)?;
        state.field(ClusterField::IdentityProviders, &self.identity_providers)?;
        state.field(ClusterField::MachinePools, &self.machine_pools)?;
        state.field(ClusterField::Managed, &self.managed)?;
        state.field(ClusterField::MultiAz, &self.multi_az)?;
        state.field(ClusterField::Name, &self.name)?;
        state.optional(
            ClusterField::NodeDrainGracePeriod,
            self.node_drain_grace_period.as_ref(),
        )?;
        state.optional(ClusterField::Nodes, self.nodes.as_ref())?;
        state.field(ClusterField::Properties, &self.properties)?;
        state.optional(ClusterField::Region, self.region.as_ref())?;
        state.optional(ClusterField::State, self.state.as_ref())?;
        state.optional(ClusterField::Version, self.version.as_ref())?;
        state.end()
    }
}

impl ReadJson for ClusterBuilder {
    fn read_json(value: &JsonValue) -> JsonResult<Self> {
        let mut builder = ClusterBuilder::new();
        for (key, value) in reader::entries(value, Cluster::KIND)? {
            if key == "kind" {
                builder = builder.link(reader::is_link(value, Cluster::LINK_KIND)?);
                continue;
            }
            let Some(field) = ClusterField::from_name(key) else {
                reader::skip(Cluster::KIND, key);
                continue;
            };
            builder = match field {
                ClusterField::Id => builder.id(reader::string(key, value)?),
                ClusterField::Href => builder.href(reader::string(key, value)?),
                ClusterField::Addons => {
                    builder.addons_list(reader::list::<AddOnBuilder>(key, value)?)
                }
                ClusterField::CloudProvider => {
                    builder.cloud_provider(reader::object::<CloudProviderBuilder>(key, value)?)
                }
                ClusterField::CreationTimestamp => {
                    builder.creation_timestamp(reader::timestamp(key, value)?)
                }
                ClusterField::DisplayName => builder.display_name(reader::string(key, value)?),
                ClusterField::ExpirationTimestamp => {
                    builder.expiration_timestamp(reader::timestamp(key, value)?)
                }
                ClusterField::ExternalId => builder.external_id(reader::string(key, value)?),
                ClusterField::IdentityProviders => builder.identity_providers_list(
                    reader::list::<IdentityProviderBuilder>(key, value)?,
                ),
                ClusterField::MachinePools => {
                    builder.machine_pools_list(reader::list::<MachinePoolBuilder>(key, value)?)
                }
                ClusterField::Managed => builder.managed(reader::boolean(key, value)?),
                ClusterField::MultiAz => builder.multi_az(reader::boolean(key, value)?),
                ClusterField::Name => builder.name(reader::string(key, value)?),
                ClusterField::NodeDrainGracePeriod => builder
                    .node_drain_grace_period(reader::object::<ValueBuilder>(key, value)?),
                ClusterField::Nodes => {
                    builder.nodes(reader::object::<ClusterNodesBuilder>(key, value)?)
                }
                ClusterField::Properties => builder.properties(reader::string_map(key, value)?),
                ClusterField::Region => {
                    builder.region(reader::object::<CloudRegionBuilder>(key, value)?)
                }
                ClusterField::State => {
                    builder.state(ClusterState::from(reader::string(key, value)?.as_str()))
                }
                ClusterField::Version => {
                    builder.version(reader::object::<VersionBuilder>(key, value)?)
                }
            };
        }
        Ok(builder)
    }
}

impl_deserialize! {
    Value => ValueBuilder,
    ClusterNodes => ClusterNodesBuilder,
    Cluster => ClusterBuilder,
}
