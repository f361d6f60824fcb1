//! Builders for machine pools, their autoscaling bounds and node taints.

use std::collections::BTreeMap;

use super::cluster::ClusterBuilder;
use super::error::BuildResult;
use super::{build_list, build_nested, class_setters, copy_list};
use crate::presence::{Field, FieldSet};
use crate::types::{
    MachinePool, MachinePoolAutoscaling, MachinePoolAutoscalingField, MachinePoolField, Taint,
    TaintField,
};

/// Builder for [`MachinePoolAutoscaling`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MachinePoolAutoscalingBuilder {
    pub(crate) fields: FieldSet<MachinePoolAutoscalingField>,
    max_replicas: i32,
    min_replicas: i32,
}

impl MachinePoolAutoscalingBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upper bound of replicas.
    pub fn max_replicas(mut self, value: i32) -> Self {
        self.max_replicas = value;
        self.fields.insert(MachinePoolAutoscalingField::MaxReplicas);
        self
    }

    /// Set the lower bound of replicas.
    pub fn min_replicas(mut self, value: i32) -> Self {
        self.min_replicas = value;
        self.fields.insert(MachinePoolAutoscalingField::MinReplicas);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &MachinePoolAutoscaling) -> Self {
        Self {
            fields: object.fields.clone(),
            max_replicas: object.max_replicas,
            min_replicas: object.min_replicas,
        }
    }

    /// Build the autoscaling bounds.
    pub fn build(&self) -> BuildResult<MachinePoolAutoscaling> {
        Ok(MachinePoolAutoscaling {
            fields: self.fields.clone(),
            max_replicas: self.max_replicas,
            min_replicas: self.min_replicas,
        })
    }
}

/// Builder for [`Taint`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaintBuilder {
    pub(crate) fields: FieldSet<TaintField>,
    effect: String,
    key: String,
    value: String,
}

impl TaintBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the effect, e.g. `NoSchedule`.
    pub fn effect(mut self, value: impl Into<String>) -> Self {
        self.effect = value.into();
        self.fields.insert(TaintField::Effect);
        self
    }

    /// Set the key.
    pub fn key(mut self, value: impl Into<String>) -> Self {
        self.key = value.into();
        self.fields.insert(TaintField::Key);
        self
    }

    /// Set the value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.fields.insert(TaintField::Value);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &Taint) -> Self {
        Self {
            fields: object.fields.clone(),
            effect: object.effect.clone(),
            key: object.key.clone(),
            value: object.value.clone(),
        }
    }

    /// Build the taint.
    pub fn build(&self) -> BuildResult<Taint> {
        Ok(Taint {
            fields: self.fields.clone(),
            effect: self.effect.clone(),
            key: self.key.clone(),
            value: self.value.clone(),
        })
    }
}

/// Builder for [`MachinePool`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MachinePoolBuilder {
    pub(crate) fields: FieldSet<MachinePoolField>,
    link: bool,
    id: String,
    href: String,
    autoscaling: Option<MachinePoolAutoscalingBuilder>,
    availability_zones: Vec<String>,
    cluster: Option<Box<ClusterBuilder>>,
    instance_type: String,
    labels: BTreeMap<String, String>,
    replicas: i32,
    taints: Vec<TaintBuilder>,
}

impl MachinePoolBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    class_setters!(MachinePoolField);

    /// Set the autoscaling bounds. Passing `None` unsets them.
    pub fn autoscaling(mut self, value: impl Into<Option<MachinePoolAutoscalingBuilder>>) -> Self {
        self.autoscaling = value.into();
        self.fields
            .set(MachinePoolField::Autoscaling, self.autoscaling.is_some());
        self
    }

    /// Replace the availability zones.
    pub fn availability_zones<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones = values.into_iter().map(Into::into).collect();
        self.fields.insert(MachinePoolField::AvailabilityZones);
        self
    }

    /// Set the cluster the pool belongs to. Passing `None` unsets it.
    pub fn cluster(mut self, value: impl Into<Option<ClusterBuilder>>) -> Self {
        self.cluster = value.into().map(Box::new);
        self.fields
            .set(MachinePoolField::Cluster, self.cluster.is_some());
        self
    }

    /// Set the instance type of the nodes.
    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.instance_type = value.into();
        self.fields.insert(MachinePoolField::InstanceType);
        self
    }

    /// Replace the node labels. Passing `None` unsets them.
    pub fn labels(mut self, value: impl Into<Option<BTreeMap<String, String>>>) -> Self {
        let value = value.into();
        self.fields.set(MachinePoolField::Labels, value.is_some());
        self.labels = value.unwrap_or_default();
        self
    }

    /// Add a single node label, keeping the existing ones.
    pub fn label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self.fields.insert(MachinePoolField::Labels);
        self
    }

    /// Set the number of nodes.
    pub fn replicas(mut self, value: i32) -> Self {
        self.replicas = value;
        self.fields.insert(MachinePoolField::Replicas);
        self
    }

    /// Replace the taints.
    pub fn taints<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = TaintBuilder>,
    {
        self.taints = values.into_iter().collect();
        self.fields.insert(MachinePoolField::Taints);
        self
    }

    /// Append a taint.
    pub fn add_taint(mut self, value: TaintBuilder) -> Self {
        self.taints.push(value);
        self.fields.insert(MachinePoolField::Taints);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &MachinePool) -> Self {
        Self {
            fields: object.fields.clone(),
            link: object.link,
            id: object.id.clone(),
            href: object.href.clone(),
            autoscaling: object
                .autoscaling
                .as_ref()
                .map(MachinePoolAutoscalingBuilder::from),
            availability_zones: object.availability_zones.clone(),
            cluster: object
                .cluster
                .as_deref()
                .map(|cluster| Box::new(ClusterBuilder::from(cluster))),
            instance_type: object.instance_type.clone(),
            labels: object.labels.clone(),
            replicas: object.replicas,
            taints: copy_list::<TaintBuilder>(&object.taints),
        }
    }

    /// Build the machine pool.
    ///
    /// # Errors
    ///
    /// Fails with the first failure of a nested builder.
    pub fn build(&self) -> BuildResult<MachinePool> {
        Ok(MachinePool {
            fields: self.fields.clone(),
            link: self.link,
            id: self.id.clone(),
            href: self.href.clone(),
            autoscaling: build_nested(
                MachinePoolField::Autoscaling.name(),
                self.autoscaling.as_ref(),
            )?,
            availability_zones: self.availability_zones.clone(),
            cluster: build_nested(MachinePoolField::Cluster.name(), self.cluster.as_deref())?
                .map(Box::new),
            instance_type: self.instance_type.clone(),
            labels: self.labels.clone(),
            replicas: self.replicas,
            taints: build_list(MachinePoolField::Taints.name(), &self.taints)?,
        })
    }
}
