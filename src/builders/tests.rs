//! Tests for the builder API.

use super::*;
use crate::enums::{ClusterState, IdentityProviderType};
use crate::presence::{FieldSet, Presence};
use crate::types::*;
use chrono::{TimeZone, Utc};
use std::collections::BTreeMap;

#[cfg(test)]
mod builder_tests {
    use super::*;

    fn sample_cluster() -> ClusterBuilder {
        ClusterBuilder::new()
            .id("123")
            .href("/api/clusters_mgmt/v1/clusters/123")
            .name("test")
            .display_name("Test cluster")
            .state(ClusterState::Ready)
            .managed(true)
            .multi_az(false)
            .creation_timestamp(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap())
            .property("owner", "alice")
            .cloud_provider(CloudProviderBuilder::new().link(true).id("aws"))
            .region(
                CloudRegionBuilder::new()
                    .id("us-east-1")
                    .cloud_provider(CloudProviderBuilder::new().id("aws")),
            )
            .version(VersionBuilder::new().id("openshift-v4.14.3").raw_id("4.14.3"))
            .nodes(
                ClusterNodesBuilder::new()
                    .compute(3)
                    .master(3)
                    .availability_zones(["us-east-1a"]),
            )
            .node_drain_grace_period(ValueBuilder::new().unit("minutes").value(60.0))
            .add_machine_pool(
                MachinePoolBuilder::new()
                    .id("workers")
                    .replicas(3)
                    .label("tier", "gold")
                    .add_taint(TaintBuilder::new().key("dedicated").effect("NoSchedule"))
                    .cluster(ClusterBuilder::new().link(true).id("123")),
            )
            .add_identity_provider(
                IdentityProviderBuilder::new()
                    .name("github")
                    .type_(IdentityProviderType::Github),
            )
            .add_addon(AddOnBuilder::new().id("logging").resource_cost(1.5))
    }

    #[test]
    fn test_cluster_builder_example_scenario() {
        let cluster = ClusterBuilder::new()
            .name("test")
            .region(CloudRegionBuilder::new().id("us-east-1"))
            .add_machine_pool(MachinePoolBuilder::new().replicas(3))
            .add_machine_pool(MachinePoolBuilder::new().replicas(5))
            .build()
            .unwrap();

        assert_eq!(cluster.name(), "test");
        assert_eq!(cluster.region().unwrap().id(), "us-east-1");
        let replicas: Vec<_> = cluster.machine_pools().iter().map(|p| p.replicas()).collect();
        assert_eq!(replicas, vec![3, 5]);

        let expected: FieldSet<ClusterField> =
            [ClusterField::Name, ClusterField::Region, ClusterField::MachinePools]
                .into_iter()
                .collect();
        assert_eq!(cluster.fields(), &expected);
    }

    #[test]
    fn test_zero_values_are_present() {
        let cluster = ClusterBuilder::new()
            .name("")
            .managed(false)
            .machine_pools(Vec::new())
            .build()
            .unwrap();

        assert!(cluster.is_set(ClusterField::Name));
        assert!(cluster.is_set(ClusterField::Managed));
        assert!(cluster.is_set(ClusterField::MachinePools));
        assert_eq!(cluster.name(), "");
        assert!(!cluster.managed());
        assert!(cluster.machine_pools().is_empty());
    }

    #[test]
    fn test_unset_fields_read_as_zero_values() {
        let cluster = ClusterBuilder::new().build().unwrap();

        assert!(cluster.fields().is_empty());
        for field in <ClusterField as crate::presence::Field>::ALL {
            assert!(!cluster.is_set(*field), "{:?} should not be set", field);
        }
        assert_eq!(cluster.id(), "");
        assert_eq!(cluster.name(), "");
        assert!(!cluster.multi_az());
        assert!(cluster.region().is_none());
        assert!(cluster.state().is_none());
        assert!(cluster.creation_timestamp().is_none());
        assert!(cluster.properties().is_empty());
        assert!(cluster.addons().is_empty());
    }

    #[test]
    fn test_none_clears_nested_field() {
        let builder = ClusterBuilder::new()
            .region(CloudRegionBuilder::new().id("us-east-1"))
            .nodes(ClusterNodesBuilder::new().compute(3));
        assert!(builder.is_set(ClusterField::Region));

        let cluster = builder.region(None).properties(None).build().unwrap();
        assert!(!cluster.is_set(ClusterField::Region));
        assert!(!cluster.is_set(ClusterField::Properties));
        assert!(cluster.region().is_none());
        assert!(cluster.is_set(ClusterField::Nodes));
    }

    #[test]
    fn test_link_does_not_mark_presence() {
        let region = CloudRegionBuilder::new()
            .link(true)
            .id("us-east-1")
            .href("/api/clusters_mgmt/v1/cloud_providers/aws/regions/us-east-1")
            .build()
            .unwrap();

        assert!(region.link());
        assert_eq!(region.kind(), CloudRegion::LINK_KIND);
        assert_eq!(region.kind(), "CloudRegionLink");
        assert_eq!(region.fields().names(), vec!["id", "href"]);

        let provider = CloudProviderBuilder::new().name("aws").build().unwrap();
        assert_eq!(provider.kind(), "CloudProvider");
    }

    #[test]
    fn test_copy_from_reproduces_object() {
        let original = sample_cluster().build().unwrap();
        let copy = ClusterBuilder::new().copy_from(&original).build().unwrap();

        assert_eq!(copy, original);
        assert_eq!(copy.fields(), original.fields());
        assert_eq!(
            copy.machine_pools()[0].fields(),
            original.machine_pools()[0].fields()
        );
        assert_eq!(
            copy.machine_pools()[0].cluster().unwrap().fields(),
            original.machine_pools()[0].cluster().unwrap().fields()
        );
    }

    #[test]
    fn test_copy_from_discards_previous_state() {
        let original = ClusterBuilder::new().name("original").build().unwrap();
        let copy = ClusterBuilder::new()
            .display_name("stale")
            .managed(true)
            .copy_from(&original)
            .build()
            .unwrap();

        assert_eq!(copy, original);
        assert!(!copy.is_set(ClusterField::DisplayName));
        assert!(!copy.is_set(ClusterField::Managed));
    }

    #[test]
    fn test_builder_is_independent_after_copy() {
        let original = sample_cluster().build().unwrap();
        let snapshot = original.clone();

        let builder = ClusterBuilder::from(&original);
        let first = builder.build().unwrap();
        let builder = builder
            .name("changed")
            .property("owner", "bob")
            .add_machine_pool(MachinePoolBuilder::new().replicas(9));
        let second = builder.build().unwrap();

        assert_eq!(original, snapshot);
        assert_eq!(first, snapshot);
        assert_eq!(second.name(), "changed");
        assert_eq!(second.properties()["owner"], "bob");
        assert_eq!(second.machine_pools().len(), 2);
        assert_eq!(first.machine_pools().len(), 1);
    }

    #[test]
    fn test_list_setter_copies_caller_data() {
        let mut zones = vec!["us-east-1a".to_string(), "us-east-1b".to_string()];
        let builder = MachinePoolBuilder::new().availability_zones(zones.iter());
        zones[0] = "eu-west-1a".to_string();
        zones.push("eu-west-1b".to_string());

        let pool = builder.build().unwrap();
        assert_eq!(pool.availability_zones(), ["us-east-1a", "us-east-1b"]);
    }

    #[test]
    fn test_map_setter_copies_caller_data() {
        let mut labels = BTreeMap::new();
        labels.insert("tier".to_string(), "gold".to_string());
        let builder = MachinePoolBuilder::new().labels(labels.clone());
        labels.insert("zone".to_string(), "a".to_string());

        let pool = builder.build().unwrap();
        assert_eq!(pool.labels().len(), 1);
        assert_eq!(pool.labels()["tier"], "gold");
    }

    #[test]
    fn test_nested_failure_propagates() {
        let result = ClusterBuilder::new()
            .name("broken")
            .node_drain_grace_period(ValueBuilder::new().unit("minutes").value(f64::NAN))
            .build();

        let err = result.unwrap_err();
        assert_eq!(err.path(), "node_drain_grace_period.value");
        match err.root_cause() {
            BuildError::InvalidValue { field, .. } => assert_eq!(*field, "value"),
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    fn test_list_element_failure_aborts_build() {
        let result = ClusterBuilder::new()
            .add_addon(AddOnBuilder::new().id("ok").resource_cost(1.0))
            .add_addon(AddOnBuilder::new().id("bad").resource_cost(f64::INFINITY))
            .add_addon(AddOnBuilder::new().id("never-built").resource_cost(f64::NAN))
            .build();

        let err = result.unwrap_err();
        assert_eq!(err.path(), "addons[1].resource_cost");
        match &err {
            BuildError::Nested { field, index, .. } => {
                assert_eq!(*field, "addons");
                assert_eq!(*index, Some(1));
            }
            other => panic!("Expected Nested error, got {:?}", other),
        }
    }

    #[test]
    fn test_deep_failure_reports_full_path() {
        let broken_cluster = ClusterBuilder::new()
            .node_drain_grace_period(ValueBuilder::new().value(f64::NEG_INFINITY));
        let err = ClusterBuilder::new()
            .add_machine_pool(MachinePoolBuilder::new().replicas(1))
            .add_machine_pool(MachinePoolBuilder::new().cluster(broken_cluster))
            .build()
            .unwrap_err();

        assert_eq!(
            err.path(),
            "machine_pools[1].cluster.node_drain_grace_period.value"
        );
        assert_eq!(
            err.to_string(),
            "Invalid value for field 'machine_pools[1].cluster.node_drain_grace_period.value': -inf is not a finite number"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_build_is_repeatable() {
        let builder = sample_cluster();
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.fields(), second.fields());
    }

    #[test]
    fn test_failed_build_leaves_builder_usable() {
        let builder = ClusterBuilder::new()
            .name("retry")
            .node_drain_grace_period(ValueBuilder::new().value(f64::NAN));
        assert!(builder.build().is_err());

        let cluster = builder
            .node_drain_grace_period(ValueBuilder::new().unit("minutes").value(30.0))
            .build()
            .unwrap();
        assert_eq!(cluster.name(), "retry");
        assert_eq!(cluster.node_drain_grace_period().unwrap().value(), 30.0);
    }

    #[test]
    fn test_machine_pool_builder() {
        let pool = MachinePoolBuilder::new()
            .id("gpu")
            .instance_type("g4dn.xlarge")
            .autoscaling(MachinePoolAutoscalingBuilder::new().min_replicas(0).max_replicas(4))
            .taints(vec![
                TaintBuilder::new().key("nvidia.com/gpu").effect("NoSchedule"),
                TaintBuilder::new().key("dedicated").value("ml").effect("NoExecute"),
            ])
            .build()
            .unwrap();

        assert_eq!(pool.instance_type(), "g4dn.xlarge");
        let autoscaling = pool.autoscaling().unwrap();
        assert_eq!(autoscaling.min_replicas(), 0);
        assert!(autoscaling.is_set(MachinePoolAutoscalingField::MinReplicas));
        assert_eq!(pool.taints().len(), 2);
        assert_eq!(pool.taints()[1].value(), "ml");
        assert!(!pool.taints()[0].is_set(TaintField::Value));
        assert!(!pool.is_set(MachinePoolField::Replicas));
    }

    #[test]
    fn test_version_builder() {
        let eol = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let version = VersionBuilder::new()
            .id("openshift-v4.14.3")
            .raw_id("4.14.3")
            .channel_group("stable")
            .default_version(false)
            .end_of_life_timestamp(eol)
            .build()
            .unwrap();

        assert_eq!(version.raw_id(), "4.14.3");
        assert!(!version.default_version());
        assert!(version.is_set(VersionField::Default));
        assert!(!version.is_set(VersionField::Enabled));
        assert_eq!(version.end_of_life_timestamp(), Some(eol));
    }

    #[test]
    fn test_builder_tracks_presence_before_build() {
        let builder = ClusterNodesBuilder::new().compute(0).compute_labels(BTreeMap::new());

        assert!(builder.is_set(ClusterNodesField::Compute));
        assert!(builder.is_set(ClusterNodesField::ComputeLabels));
        assert!(!builder.is_set(ClusterNodesField::Infra));
    }

    #[test]
    fn test_timestamp_outside_rfc3339_range_fails() {
        let far_future = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        let err = ClusterBuilder::new()
            .name("test")
            .creation_timestamp(far_future)
            .build()
            .unwrap_err();

        assert_eq!(err.path(), "creation_timestamp");
        assert!(matches!(err, BuildError::InvalidValue { field: "creation_timestamp", .. }));

        let before_year_zero = Utc.with_ymd_and_hms(-1, 12, 31, 0, 0, 0).unwrap();
        let err = ClusterBuilder::new()
            .version(VersionBuilder::new().end_of_life_timestamp(before_year_zero))
            .build()
            .unwrap_err();

        assert_eq!(err.path(), "version.end_of_life_timestamp");
        assert!(matches!(err.root_cause(), BuildError::InvalidValue { .. }));
    }

    #[test]
    fn test_list_link_has_href_and_no_items() {
        let cluster = ClusterBuilder::new()
            .id("123")
            .machine_pools_list(
                ListBuilder::new()
                    .link(true)
                    .href("/api/clusters_mgmt/v1/clusters/123/machine_pools"),
            )
            .build()
            .unwrap();

        assert!(cluster.is_set(ClusterField::MachinePools));
        assert!(cluster.machine_pools().is_empty());

        let pools = cluster.machine_pools_list();
        assert!(pools.link());
        assert_eq!(pools.kind(), "MachinePoolListLink");
        assert_eq!(pools.href(), "/api/clusters_mgmt/v1/clusters/123/machine_pools");

        assert_eq!(ClusterBuilder::from(&cluster).build().unwrap(), cluster);
    }

    #[test]
    fn test_list_builder_reports_element_failures() {
        let err = ClusterBuilder::new()
            .addons_list(
                ListBuilder::new()
                    .href("/api/clusters_mgmt/v1/clusters/123/addons")
                    .add_item(AddOnBuilder::new().id("logging"))
                    .add_item(AddOnBuilder::new().resource_cost(f64::INFINITY)),
            )
            .build()
            .unwrap_err();

        assert_eq!(err.path(), "addons[1].resource_cost");
    }
}
