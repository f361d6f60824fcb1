//! JSON support for machine pools, autoscaling bounds and taints.

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::error::JsonResult;
use super::reader;
use super::traits::{ReadJson, impl_deserialize};
use super::writer;
use crate::builders::{ClusterBuilder, MachinePoolAutoscalingBuilder, MachinePoolBuilder, TaintBuilder};
use crate::presence::Field;
use crate::types::{
    MachinePool, MachinePoolAutoscaling, MachinePoolAutoscalingField, MachinePoolField, Taint,
    TaintField,
};

impl Serialize for MachinePoolAutoscaling {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, None)?;
        state.field(MachinePoolAutoscalingField::MaxReplicas, &self.max_replicas)?;
        state.field(MachinePoolAutoscalingField::MinReplicas, &self.min_replicas)?;
        state.end()
    }
}

impl ReadJson for MachinePoolAutoscalingBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = MachinePoolAutoscalingBuilder::new();
        for (key, value) in reader::entries(value, "MachinePoolAutoscaling")? {
            let Some(field) = MachinePoolAutoscalingField::from_name(key) else {
                reader::skip("MachinePoolAutoscaling", key);
                continue;
            };
            builder = match field {
                MachinePoolAutoscalingField::MaxReplicas => {
                    builder.max_replicas(reader::integer(key, value)?)
                }
                MachinePoolAutoscalingField::MinReplicas => {
                    builder.min_replicas(reader::integer(key, value)?)
                }
            };
        }
        Ok(builder)
    }
}

impl Serialize for Taint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, None)?;
        state.field(TaintField::Effect, &self.effect)?;
        state.field(TaintField::Key, &self.key)?;
        state.field(TaintField::Value, &self.value)?;
        state.end()
    }
}

impl ReadJson for TaintBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = TaintBuilder::new();
        for (key, value) in reader::entries(value, "Taint")? {
            let Some(field) = TaintField::from_name(key) else {
                reader::skip("Taint", key);
                continue;
            };
            builder = match field {
                TaintField::Effect => builder.effect(reader::string(key, value)?),
                TaintField::Key => builder.key(reader::string(key, value)?),
                TaintField::Value => builder.value(reader::string(key, value)?),
            };
        }
        Ok(builder)
    }
}

impl Serialize for MachinePool {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = writer::begin(serializer, &self.fields, Some(self.kind()))?;
        state.field(MachinePoolField::Id, &self.id)?;
        state.field(MachinePoolField::Href, &self.href)?;
        state.optional(MachinePoolField::Autoscaling, self.autoscaling.as_ref())?;
        state.field(MachinePoolField::AvailabilityZones, &self.availability_zones)?;
        state.optional(MachinePoolField::Cluster, self.cluster.as_deref())?;
        state.field(MachinePoolField::InstanceType, &self.instance_type)?;
        state.field(MachinePoolField::Labels, &self.labels)?;
        state.field(MachinePoolField::Replicas, &self.replicas)?;
        state.field(MachinePoolField::Taints, &self.taints)?;
        state.end()
    }
}

impl ReadJson for MachinePoolBuilder {
    fn read_json(value: &Value) -> JsonResult<Self> {
        let mut builder = MachinePoolBuilder::new();
        for (key, value) in reader::entries(value, MachinePool::KIND)? {
            if key == "kind" {
                builder = builder.link(reader::is_link(value, MachinePool::LINK_KIND)?);
                continue;
            }
            let Some(field) = MachinePoolField::from_name(key) else {
                reader::skip(MachinePool::KIND, key);
                continue;
            };
            builder = match field {
                MachinePoolField::Id => builder.id(reader::string(key, value)?),
                MachinePoolField::Href => builder.href(reader::string(key, value)?),
                MachinePoolField::Autoscaling => builder
                    .autoscaling(reader::object::<MachinePoolAutoscalingBuilder>(key, value)?),
                MachinePoolField::AvailabilityZones => {
                    builder.availability_zones(reader::strings(key, value)?)
                }
                MachinePoolField::Cluster => {
                    builder.cluster(reader::object::<ClusterBuilder>(key, value)?)
                }
                MachinePoolField::InstanceType => {
                    builder.instance_type(reader::string(key, value)?)
                }
                MachinePoolField::Labels => builder.labels(reader::string_map(key, value)?),
                MachinePoolField::Replicas => builder.replicas(reader::integer(key, value)?),
                MachinePoolField::Taints => {
                    builder.taints(reader::objects::<TaintBuilder>(key, value)?)
                }
            };
        }
        Ok(builder)
    }
}

impl_deserialize! {
    MachinePoolAutoscaling => MachinePoolAutoscalingBuilder,
    Taint => TaintBuilder,
    MachinePool => MachinePoolBuilder,
}
