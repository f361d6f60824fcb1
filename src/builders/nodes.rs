//! Builder for the node layout of a cluster.

use std::collections::BTreeMap;

use super::error::BuildResult;
use crate::presence::FieldSet;
use crate::types::{ClusterNodes, ClusterNodesField};

/// Builder for [`ClusterNodes`] objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterNodesBuilder {
    pub(crate) fields: FieldSet<ClusterNodesField>,
    availability_zones: Vec<String>,
    compute: i32,
    compute_labels: BTreeMap<String, String>,
    infra: i32,
    master: i32,
}

impl ClusterNodesBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the availability zones.
    pub fn availability_zones<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.availability_zones = values.into_iter().map(Into::into).collect();
        self.fields.insert(ClusterNodesField::AvailabilityZones);
        self
    }

    /// Set the number of compute nodes.
    pub fn compute(mut self, value: i32) -> Self {
        self.compute = value;
        self.fields.insert(ClusterNodesField::Compute);
        self
    }

    /// Replace the compute node labels. Passing `None` unsets them.
    pub fn compute_labels(mut self, value: impl Into<Option<BTreeMap<String, String>>>) -> Self {
        let value = value.into();
        self.fields
            .set(ClusterNodesField::ComputeLabels, value.is_some());
        self.compute_labels = value.unwrap_or_default();
        self
    }

    /// Set the number of infrastructure nodes.
    pub fn infra(mut self, value: i32) -> Self {
        self.infra = value;
        self.fields.insert(ClusterNodesField::Infra);
        self
    }

    /// Set the number of control plane nodes.
    pub fn master(mut self, value: i32) -> Self {
        self.master = value;
        self.fields.insert(ClusterNodesField::Master);
        self
    }

    /// Discard the current state and mirror `object`.
    pub fn copy_from(self, object: &ClusterNodes) -> Self {
        Self {
            fields: object.fields.clone(),
            availability_zones: object.availability_zones.clone(),
            compute: object.compute,
            compute_labels: object.compute_labels.clone(),
            infra: object.infra,
            master: object.master,
        }
    }

    /// Build the node layout.
    pub fn build(&self) -> BuildResult<ClusterNodes> {
        Ok(ClusterNodes {
            fields: self.fields.clone(),
            availability_zones: self.availability_zones.clone(),
            compute: self.compute,
            compute_labels: self.compute_labels.clone(),
            infra: self.infra,
            master: self.master,
        })
    }
}
