//! Immutable value objects of the clusters management API.
//!
//! Values are created through the builders in [`crate::builders`]. Every
//! object remembers which of its fields were explicitly assigned; unassigned
//! fields read as their zero value.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::enums::{AddOnInstallMode, ClusterState, IdentityProviderMappingMethod, IdentityProviderType};
use crate::presence::{FieldSet, Presence, fields};

macro_rules! impl_presence {
    ($($object:ty => $field:ty),+ $(,)?) => {
        $(
            impl Presence for $object {
                type Field = $field;

                fn fields(&self) -> &FieldSet<$field> {
                    &self.fields
                }
            }
        )+
    };
}

/// Getters shared by every object that has an identity (`kind`, `id`, `href`).
macro_rules! impl_class {
    ($($object:ident => $kind:literal),+ $(,)?) => {
        $(
            impl $object {
                /// Value of the `kind` attribute of a complete object.
                pub const KIND: &'static str = $kind;
                /// Value of the `kind` attribute of a link to the object.
                pub const LINK_KIND: &'static str = concat!($kind, "Link");

                /// Returns `true` if this is a link (only `id` and `href` are meaningful).
                pub fn link(&self) -> bool {
                    self.link
                }

                /// The `kind` attribute this object is written with.
                pub fn kind(&self) -> &'static str {
                    if self.link { Self::LINK_KIND } else { Self::KIND }
                }

                /// Identifier of the object.
                pub fn id(&self) -> &str {
                    &self.id
                }

                /// Link to the object.
                pub fn href(&self) -> &str {
                    &self.href
                }
            }

            impl ListKind for $object {
                const LIST_KIND: &'static str = concat!($kind, "List");
                const LIST_LINK_KIND: &'static str = concat!($kind, "ListLink");
            }
        )+
    };
}

/// Kinds used when objects of a type are carried in a list.
pub trait ListKind {
    /// Value of the `kind` attribute of a complete list.
    const LIST_KIND: &'static str;
    /// Value of the `kind` attribute of a link to the list.
    const LIST_LINK_KIND: &'static str;
}

/// Collection of objects with an identity.
///
/// A list retrieved from the server may be a link, carrying only the `href`
/// of the collection and no items.
#[derive(Debug, Clone, PartialEq)]
pub struct List<T> {
    pub(crate) link: bool,
    pub(crate) href: String,
    pub(crate) items: Vec<T>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            link: false,
            href: String::new(),
            items: Vec::new(),
        }
    }
}

impl<T> List<T> {
    /// Returns `true` if this is a link to the collection.
    pub fn link(&self) -> bool {
        self.link
    }

    /// Link to the collection.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Items of the list, in order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the list has to be written with its `kind` and `href`
    /// rather than as a plain array.
    pub(crate) fn has_envelope(&self) -> bool {
        self.link || !self.href.is_empty()
    }
}

impl<T: ListKind> List<T> {
    /// The `kind` attribute this list is written with.
    pub fn kind(&self) -> &'static str {
        if self.link { T::LIST_LINK_KIND } else { T::LIST_KIND }
    }
}

fields! {
    /// Fields of [`Value`].
    pub enum ValueField {
        Unit => "unit",
        Value => "value",
    }
}

/// Numeric value with a unit, for example a grace period of `60 minutes`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
    pub(crate) fields: FieldSet<ValueField>,
    pub(crate) unit: String,
    pub(crate) value: f64,
}

impl Value {
    /// Unit of the value.
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Numeric magnitude.
    pub fn value(&self) -> f64 {
        self.value
    }
}

fields! {
    /// Fields of [`CloudProvider`].
    pub enum CloudProviderField {
        Id => "id",
        Href => "href",
        DisplayName => "display_name",
        Name => "name",
    }
}

/// A cloud provider, such as `aws` or `gcp`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CloudProvider {
    pub(crate) fields: FieldSet<CloudProviderField>,
    pub(crate) link: bool,
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) display_name: String,
    pub(crate) name: String,
}

impl CloudProvider {
    /// Human friendly name of the provider.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Short name of the provider.
    pub fn name(&self) -> &str {
        &self.name
    }
}

fields! {
    /// Fields of [`CloudRegion`].
    pub enum CloudRegionField {
        Id => "id",
        Href => "href",
        CloudProvider => "cloud_provider",
        DisplayName => "display_name",
        Enabled => "enabled",
        Name => "name",
        SupportsMultiAz => "supports_multi_az",
    }
}

/// A region of a cloud provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CloudRegion {
    pub(crate) fields: FieldSet<CloudRegionField>,
    pub(crate) link: bool,
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) cloud_provider: Option<CloudProvider>,
    pub(crate) display_name: String,
    pub(crate) enabled: bool,
    pub(crate) name: String,
    pub(crate) supports_multi_az: bool,
}

impl CloudRegion {
    /// Provider the region belongs to.
    pub fn cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    /// Human friendly name of the region.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether clusters can be created in the region.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Short name of the region, e.g. `us-east-1`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the region has enough availability zones for multi-AZ clusters.
    pub fn supports_multi_az(&self) -> bool {
        self.supports_multi_az
    }
}

fields! {
    /// Fields of [`Version`].
    pub enum VersionField {
        Id => "id",
        Href => "href",
        ChannelGroup => "channel_group",
        Default => "default",
        Enabled => "enabled",
        EndOfLifeTimestamp => "end_of_life_timestamp",
        RawId => "raw_id",
    }
}

/// An OpenShift version clusters can be installed with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Version {
    pub(crate) fields: FieldSet<VersionField>,
    pub(crate) link: bool,
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) channel_group: String,
    pub(crate) default: bool,
    pub(crate) enabled: bool,
    pub(crate) end_of_life_timestamp: Option<DateTime<Utc>>,
    pub(crate) raw_id: String,
}

impl Version {
    /// Channel group of the version, e.g. `stable`.
    pub fn channel_group(&self) -> &str {
        &self.channel_group
    }

    /// Whether this is the version used when none is requested.
    pub fn default_version(&self) -> bool {
        self.default
    }

    /// Whether clusters can be installed with this version.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// When the version stops being supported.
    pub fn end_of_life_timestamp(&self) -> Option<DateTime<Utc>> {
        self.end_of_life_timestamp
    }

    /// Version number without prefix, e.g. `4.14.3`.
    pub fn raw_id(&self) -> &str {
        &self.raw_id
    }
}

fields! {
    /// Fields of [`ClusterNodes`].
    pub enum ClusterNodesField {
        AvailabilityZones => "availability_zones",
        Compute => "compute",
        ComputeLabels => "compute_labels",
        Infra => "infra",
        Master => "master",
    }
}

/// Node counts and placement of a cluster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterNodes {
    pub(crate) fields: FieldSet<ClusterNodesField>,
    pub(crate) availability_zones: Vec<String>,
    pub(crate) compute: i32,
    pub(crate) compute_labels: BTreeMap<String, String>,
    pub(crate) infra: i32,
    pub(crate) master: i32,
}

impl ClusterNodes {
    /// Availability zones the nodes are spread over.
    pub fn availability_zones(&self) -> &[String] {
        &self.availability_zones
    }

    /// Number of compute nodes.
    pub fn compute(&self) -> i32 {
        self.compute
    }

    /// Labels applied to the compute nodes.
    pub fn compute_labels(&self) -> &BTreeMap<String, String> {
        &self.compute_labels
    }

    /// Number of infrastructure nodes.
    pub fn infra(&self) -> i32 {
        self.infra
    }

    /// Number of control plane nodes.
    pub fn master(&self) -> i32 {
        self.master
    }
}

fields! {
    /// Fields of [`MachinePoolAutoscaling`].
    pub enum MachinePoolAutoscalingField {
        MaxReplicas => "max_replicas",
        MinReplicas => "min_replicas",
    }
}

/// Autoscaling bounds of a machine pool.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MachinePoolAutoscaling {
    pub(crate) fields: FieldSet<MachinePoolAutoscalingField>,
    pub(crate) max_replicas: i32,
    pub(crate) min_replicas: i32,
}

impl MachinePoolAutoscaling {
    /// Upper bound of replicas.
    pub fn max_replicas(&self) -> i32 {
        self.max_replicas
    }

    /// Lower bound of replicas.
    pub fn min_replicas(&self) -> i32 {
        self.min_replicas
    }
}

fields! {
    /// Fields of [`Taint`].
    pub enum TaintField {
        Effect => "effect",
        Key => "key",
        Value => "value",
    }
}

/// A node taint applied to the nodes of a machine pool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Taint {
    pub(crate) fields: FieldSet<TaintField>,
    pub(crate) effect: String,
    pub(crate) key: String,
    pub(crate) value: String,
}

impl Taint {
    /// Effect of the taint, e.g. `NoSchedule`.
    pub fn effect(&self) -> &str {
        &self.effect
    }

    /// Key of the taint.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Value of the taint.
    pub fn value(&self) -> &str {
        &self.value
    }
}

fields! {
    /// Fields of [`MachinePool`].
    pub enum MachinePoolField {
        Id => "id",
        Href => "href",
        Autoscaling => "autoscaling",
        AvailabilityZones => "availability_zones",
        Cluster => "cluster",
        InstanceType => "instance_type",
        Labels => "labels",
        Replicas => "replicas",
        Taints => "taints",
    }
}

/// A group of identically configured compute nodes of a cluster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MachinePool {
    pub(crate) fields: FieldSet<MachinePoolField>,
    pub(crate) link: bool,
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) autoscaling: Option<MachinePoolAutoscaling>,
    pub(crate) availability_zones: Vec<String>,
    pub(crate) cluster: Option<Box<Cluster>>,
    pub(crate) instance_type: String,
    pub(crate) labels: BTreeMap<String, String>,
    pub(crate) replicas: i32,
    pub(crate) taints: Vec<Taint>,
}

impl MachinePool {
    /// Autoscaling bounds, when the pool autoscales.
    pub fn autoscaling(&self) -> Option<&MachinePoolAutoscaling> {
        self.autoscaling.as_ref()
    }

    /// Availability zones of the pool.
    pub fn availability_zones(&self) -> &[String] {
        &self.availability_zones
    }

    /// Cluster the pool belongs to, usually a link.
    pub fn cluster(&self) -> Option<&Cluster> {
        self.cluster.as_deref()
    }

    /// Instance type of the nodes, e.g. `m5.xlarge`.
    pub fn instance_type(&self) -> &str {
        &self.instance_type
    }

    /// Labels applied to the nodes.
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// Number of nodes.
    pub fn replicas(&self) -> i32 {
        self.replicas
    }

    /// Taints applied to the nodes.
    pub fn taints(&self) -> &[Taint] {
        &self.taints
    }
}

fields! {
    /// Fields of [`IdentityProvider`].
    pub enum IdentityProviderField {
        Id => "id",
        Href => "href",
        Challenge => "challenge",
        Login => "login",
        MappingMethod => "mapping_method",
        Name => "name",
        Type => "type",
    }
}

/// An identity provider users of a cluster log in with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IdentityProvider {
    pub(crate) fields: FieldSet<IdentityProviderField>,
    pub(crate) link: bool,
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) challenge: bool,
    pub(crate) login: bool,
    pub(crate) mapping_method: Option<IdentityProviderMappingMethod>,
    pub(crate) name: String,
    pub(crate) type_: Option<IdentityProviderType>,
}

impl IdentityProvider {
    /// Whether the provider supports challenge based authentication.
    pub fn challenge(&self) -> bool {
        self.challenge
    }

    /// Whether the provider supports interactive login.
    pub fn login(&self) -> bool {
        self.login
    }

    /// How identities are mapped to users.
    pub fn mapping_method(&self) -> Option<&IdentityProviderMappingMethod> {
        self.mapping_method.as_ref()
    }

    /// Name of the provider.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type of the provider.
    pub fn type_(&self) -> Option<&IdentityProviderType> {
        self.type_.as_ref()
    }
}

fields! {
    /// Fields of [`AddOn`].
    pub enum AddOnField {
        Id => "id",
        Href => "href",
        Description => "description",
        Enabled => "enabled",
        InstallMode => "install_mode",
        Name => "name",
        ResourceCost => "resource_cost",
        TargetNamespace => "target_namespace",
    }
}

/// An add-on that can be installed in a cluster.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddOn {
    pub(crate) fields: FieldSet<AddOnField>,
    pub(crate) link: bool,
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) description: String,
    pub(crate) enabled: bool,
    pub(crate) install_mode: Option<AddOnInstallMode>,
    pub(crate) name: String,
    pub(crate) resource_cost: f64,
    pub(crate) target_namespace: String,
}

impl AddOn {
    /// Description of the add-on.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the add-on can be installed.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Namespaces watched by the add-on operator.
    pub fn install_mode(&self) -> Option<&AddOnInstallMode> {
        self.install_mode.as_ref()
    }

    /// Name of the add-on.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Quota units consumed by one installation.
    pub fn resource_cost(&self) -> f64 {
        self.resource_cost
    }

    /// Namespace the add-on is installed into.
    pub fn target_namespace(&self) -> &str {
        &self.target_namespace
    }
}

fields! {
    /// Fields of [`Cluster`].
    pub enum ClusterField {
        Id => "id",
        Href => "href",
        Addons => "addons",
        CloudProvider => "cloud_provider",
        CreationTimestamp => "creation_timestamp",
        DisplayName => "display_name",
        ExpirationTimestamp => "expiration_timestamp",
        ExternalId => "external_id",
        IdentityProviders => "identity_providers",
        MachinePools => "machine_pools",
        Managed => "managed",
        MultiAz => "multi_az",
        Name => "name",
        NodeDrainGracePeriod => "node_drain_grace_period",
        Nodes => "nodes",
        Properties => "properties",
        Region => "region",
        State => "state",
        Version => "version",
    }
}

/// Definition of an OpenShift cluster.
///
/// When a cluster is retrieved, references such as `cloud_provider` are
/// usually links containing only `kind`, `id` and `href`. When a cluster is
/// created, they only need to carry the identifier of the referenced object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cluster {
    pub(crate) fields: FieldSet<ClusterField>,
    pub(crate) link: bool,
    pub(crate) id: String,
    pub(crate) href: String,
    pub(crate) addons: List<AddOn>,
    pub(crate) cloud_provider: Option<CloudProvider>,
    pub(crate) creation_timestamp: Option<DateTime<Utc>>,
    pub(crate) display_name: String,
    pub(crate) expiration_timestamp: Option<DateTime<Utc>>,
    pub(crate) external_id: String,
    pub(crate) identity_providers: List<IdentityProvider>,
    pub(crate) machine_pools: List<MachinePool>,
    pub(crate) managed: bool,
    pub(crate) multi_az: bool,
    pub(crate) name: String,
    pub(crate) node_drain_grace_period: Option<Value>,
    pub(crate) nodes: Option<ClusterNodes>,
    pub(crate) properties: BTreeMap<String, String>,
    pub(crate) region: Option<CloudRegion>,
    pub(crate) state: Option<ClusterState>,
    pub(crate) version: Option<Version>,
}

impl Cluster {
    /// Add-ons installed in the cluster.
    pub fn addons(&self) -> &[AddOn] {
        &self.addons.items
    }

    /// The `addons` collection, including its link and `href`.
    pub fn addons_list(&self) -> &List<AddOn> {
        &self.addons
    }

    /// Cloud provider the cluster runs on.
    pub fn cloud_provider(&self) -> Option<&CloudProvider> {
        self.cloud_provider.as_ref()
    }

    /// When the cluster was created.
    pub fn creation_timestamp(&self) -> Option<DateTime<Utc>> {
        self.creation_timestamp
    }

    /// Name shown in user interfaces.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// When the cluster will be deleted automatically.
    pub fn expiration_timestamp(&self) -> Option<DateTime<Utc>> {
        self.expiration_timestamp
    }

    /// Identifier assigned by the cluster itself.
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Identity providers configured for the cluster.
    pub fn identity_providers(&self) -> &[IdentityProvider] {
        &self.identity_providers.items
    }

    /// The `identity_providers` collection, including its link and `href`.
    pub fn identity_providers_list(&self) -> &List<IdentityProvider> {
        &self.identity_providers
    }

    /// Additional machine pools of the cluster.
    pub fn machine_pools(&self) -> &[MachinePool] {
        &self.machine_pools.items
    }

    /// The `machine_pools` collection, including its link and `href`.
    pub fn machine_pools_list(&self) -> &List<MachinePool> {
        &self.machine_pools
    }

    /// Whether the cluster is managed by the service.
    pub fn managed(&self) -> bool {
        self.managed
    }

    /// Whether the cluster spans multiple availability zones.
    pub fn multi_az(&self) -> bool {
        self.multi_az
    }

    /// Name of the cluster, unique per owner.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How long node drains may take during upgrades.
    pub fn node_drain_grace_period(&self) -> Option<&Value> {
        self.node_drain_grace_period.as_ref()
    }

    /// Node layout of the cluster.
    pub fn nodes(&self) -> Option<&ClusterNodes> {
        self.nodes.as_ref()
    }

    /// Free form user defined properties.
    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    /// Region the cluster runs in.
    pub fn region(&self) -> Option<&CloudRegion> {
        self.region.as_ref()
    }

    /// Overall state of the cluster.
    pub fn state(&self) -> Option<&ClusterState> {
        self.state.as_ref()
    }

    /// Version the cluster runs.
    pub fn version(&self) -> Option<&Version> {
        self.version.as_ref()
    }
}

impl_class! {
    CloudProvider => "CloudProvider",
    CloudRegion => "CloudRegion",
    Version => "Version",
    MachinePool => "MachinePool",
    IdentityProvider => "IdentityProvider",
    AddOn => "AddOn",
    Cluster => "Cluster",
}

impl_presence! {
    Value => ValueField,
    CloudProvider => CloudProviderField,
    CloudRegion => CloudRegionField,
    Version => VersionField,
    ClusterNodes => ClusterNodesField,
    MachinePoolAutoscaling => MachinePoolAutoscalingField,
    Taint => TaintField,
    MachinePool => MachinePoolField,
    IdentityProvider => IdentityProviderField,
    AddOn => AddOnField,
    Cluster => ClusterField,
}
