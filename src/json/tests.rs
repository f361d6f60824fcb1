//! Tests for JSON marshaling.

use super::*;
use crate::builders::*;
use crate::enums::{AddOnInstallMode, ClusterState, IdentityProviderMappingMethod, IdentityProviderType};
use crate::presence::{FieldSet, Presence};
use crate::types::*;
use anyhow::Result;
use assert_json_diff::assert_json_eq;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn sample_cluster() -> ClusterBuilder {
    ClusterBuilder::new()
        .id("123")
        .href("/api/clusters_mgmt/v1/clusters/123")
        .name("test")
        .state(ClusterState::Ready)
        .multi_az(false)
        .creation_timestamp(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap())
        .property("owner", "alice")
        .region(
            CloudRegionBuilder::new()
                .id("us-east-1")
                .cloud_provider(CloudProviderBuilder::new().link(true).id("aws")),
        )
        .version(
            VersionBuilder::new()
                .id("openshift-v4.14.3")
                .default_version(true)
                .end_of_life_timestamp(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()),
        )
        .nodes(ClusterNodesBuilder::new().compute(3).availability_zones(["us-east-1a"]))
        .node_drain_grace_period(ValueBuilder::new().unit("minutes").value(60.0))
        .add_machine_pool(
            MachinePoolBuilder::new()
                .id("workers")
                .replicas(0)
                .autoscaling(MachinePoolAutoscalingBuilder::new().min_replicas(1).max_replicas(4))
                .label("tier", "gold")
                .add_taint(TaintBuilder::new().key("dedicated").effect("NoSchedule"))
                .cluster(ClusterBuilder::new().link(true).id("123")),
        )
        .add_identity_provider(
            IdentityProviderBuilder::new()
                .name("github")
                .type_(IdentityProviderType::Github)
                .mapping_method(IdentityProviderMappingMethod::Claim)
                .challenge(false),
        )
        .add_addon(
            AddOnBuilder::new()
                .id("logging")
                .resource_cost(1.5)
                .install_mode(AddOnInstallMode::OwnNamespace),
        )
}

#[cfg(test)]
mod marshal_tests {
    use super::*;

    #[test]
    fn test_marshal_writes_only_present_fields() -> Result<()> {
        let cluster = sample_cluster().build()?;

        assert_json_eq!(
            serde_json::to_value(&cluster)?,
            json!({
                "kind": "Cluster",
                "id": "123",
                "href": "/api/clusters_mgmt/v1/clusters/123",
                "addons": [{
                    "kind": "AddOn",
                    "id": "logging",
                    "install_mode": "own_namespace",
                    "resource_cost": 1.5
                }],
                "creation_timestamp": "2021-03-04T05:06:07Z",
                "identity_providers": [{
                    "kind": "IdentityProvider",
                    "challenge": false,
                    "mapping_method": "claim",
                    "name": "github",
                    "type": "GithubIdentityProvider"
                }],
                "machine_pools": [{
                    "kind": "MachinePool",
                    "id": "workers",
                    "autoscaling": {"max_replicas": 4, "min_replicas": 1},
                    "cluster": {"kind": "ClusterLink", "id": "123"},
                    "labels": {"tier": "gold"},
                    "replicas": 0,
                    "taints": [{"effect": "NoSchedule", "key": "dedicated"}]
                }],
                "multi_az": false,
                "name": "test",
                "node_drain_grace_period": {"unit": "minutes", "value": 60.0},
                "nodes": {"availability_zones": ["us-east-1a"], "compute": 3},
                "properties": {"owner": "alice"},
                "region": {
                    "kind": "CloudRegion",
                    "id": "us-east-1",
                    "cloud_provider": {"kind": "CloudProviderLink", "id": "aws"}
                },
                "state": "ready",
                "version": {
                    "kind": "Version",
                    "id": "openshift-v4.14.3",
                    "default": true,
                    "end_of_life_timestamp": "2025-01-01T00:00:00Z"
                }
            })
        );

        Ok(())
    }

    #[test]
    fn test_marshal_patch_payload() -> Result<()> {
        let patch = ClusterBuilder::new()
            .node_drain_grace_period(ValueBuilder::new().value(30.0))
            .build()?;

        assert_eq!(
            marshal(&patch)?,
            r#"{"kind":"Cluster","node_drain_grace_period":{"value":30.0}}"#
        );

        Ok(())
    }

    #[test]
    fn test_marshal_empty_objects() -> Result<()> {
        assert_json_eq!(
            serde_json::to_value(ClusterBuilder::new().build()?)?,
            json!({"kind": "Cluster"})
        );
        assert_json_eq!(serde_json::to_value(ValueBuilder::new().build()?)?, json!({}));

        Ok(())
    }

    #[test]
    fn test_marshal_empty_list_when_set() -> Result<()> {
        let cluster = ClusterBuilder::new()
            .addons(Vec::<AddOnBuilder>::new())
            .build()?;

        assert_json_eq!(
            serde_json::to_value(&cluster)?,
            json!({"kind": "Cluster", "addons": []})
        );

        Ok(())
    }

    #[test]
    fn test_marshal_link_kind() -> Result<()> {
        let version = VersionBuilder::new()
            .link(true)
            .id("openshift-v4.14.3")
            .href("/api/clusters_mgmt/v1/versions/openshift-v4.14.3")
            .build()?;

        assert_json_eq!(
            serde_json::to_value(&version)?,
            json!({
                "kind": "VersionLink",
                "id": "openshift-v4.14.3",
                "href": "/api/clusters_mgmt/v1/versions/openshift-v4.14.3"
            })
        );

        Ok(())
    }

    #[test]
    fn test_marshal_list_link() -> Result<()> {
        let cluster = ClusterBuilder::new()
            .machine_pools_list(
                ListBuilder::new()
                    .link(true)
                    .href("/api/clusters_mgmt/v1/clusters/123/machine_pools"),
            )
            .addons_list(
                ListBuilder::new()
                    .href("/api/clusters_mgmt/v1/clusters/123/addons")
                    .add_item(AddOnBuilder::new().id("logging")),
            )
            .build()?;

        assert_json_eq!(
            serde_json::to_value(&cluster)?,
            json!({
                "kind": "Cluster",
                "addons": {
                    "kind": "AddOnList",
                    "href": "/api/clusters_mgmt/v1/clusters/123/addons",
                    "items": [{"kind": "AddOn", "id": "logging"}]
                },
                "machine_pools": {
                    "kind": "MachinePoolListLink",
                    "href": "/api/clusters_mgmt/v1/clusters/123/machine_pools"
                }
            })
        );

        Ok(())
    }

    #[test]
    fn test_marshal_unknown_enum_value() -> Result<()> {
        let cluster = ClusterBuilder::new()
            .state(ClusterState::from("migrating"))
            .build()?;

        assert_json_eq!(
            serde_json::to_value(&cluster)?,
            json!({"kind": "Cluster", "state": "migrating"})
        );

        Ok(())
    }

    #[test]
    fn test_marshal_pretty_is_same_document() -> Result<()> {
        let cluster = sample_cluster().build()?;
        let compact: serde_json::Value = serde_json::from_str(&marshal(&cluster)?)?;
        let pretty: serde_json::Value = serde_json::from_str(&marshal_pretty(&cluster)?)?;

        assert_json_eq!(compact, pretty);
        Ok(())
    }
}

#[cfg(test)]
mod unmarshal_tests {
    use super::*;

    #[test]
    fn test_unmarshal_marks_exactly_the_members_found() -> Result<()> {
        let cluster = unmarshal::<ClusterBuilder>(
            r#"{"kind": "Cluster", "name": "", "managed": false, "nodes": {"compute": 0}}"#,
        )?;

        let expected: FieldSet<ClusterField> =
            [ClusterField::Name, ClusterField::Managed, ClusterField::Nodes]
                .into_iter()
                .collect();
        assert_eq!(cluster.fields(), &expected);
        assert!(!cluster.link());
        assert_eq!(cluster.name(), "");

        let nodes = cluster.nodes().unwrap();
        assert!(nodes.is_set(ClusterNodesField::Compute));
        assert!(!nodes.is_set(ClusterNodesField::Master));

        Ok(())
    }

    #[test]
    fn test_unmarshal_ignores_unknown_members_and_nulls() -> Result<()> {
        let cluster = unmarshal::<ClusterBuilder>(
            r#"{"name": "test", "api": {"url": "https://example.com"}, "display_name": null}"#,
        )?;

        assert_eq!(cluster.fields().names(), vec!["name"]);
        Ok(())
    }

    #[test]
    fn test_unmarshal_link() -> Result<()> {
        let provider = unmarshal::<CloudProviderBuilder>(
            r#"{"kind": "CloudProviderLink", "id": "aws", "href": "/api/clusters_mgmt/v1/cloud_providers/aws"}"#,
        )?;

        assert!(provider.link());
        assert_eq!(provider.kind(), "CloudProviderLink");
        assert_eq!(provider.id(), "aws");
        assert!(!provider.is_set(CloudProviderField::Name));

        Ok(())
    }

    #[test]
    fn test_unmarshal_enums() -> Result<()> {
        let provider = unmarshal::<IdentityProviderBuilder>(
            r#"{"type": "LDAPIdentityProvider", "mapping_method": "somewhere_else"}"#,
        )?;

        assert_eq!(provider.type_(), Some(&IdentityProviderType::Ldap));
        assert_eq!(
            provider.mapping_method(),
            Some(&IdentityProviderMappingMethod::Other("somewhere_else".to_string()))
        );

        Ok(())
    }

    #[test]
    fn test_unmarshal_timestamp_offset_is_normalized() -> Result<()> {
        let cluster =
            unmarshal::<ClusterBuilder>(r#"{"creation_timestamp": "2021-03-04T07:06:07+02:00"}"#)?;

        assert_eq!(
            cluster.creation_timestamp(),
            Some(Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap())
        );
        Ok(())
    }

    #[test]
    fn test_unmarshal_reports_path_of_wrong_type() {
        let err = unmarshal::<ClusterBuilder>(
            r#"{"machine_pools": [{"replicas": 1}, {"replicas": "three"}]}"#,
        )
        .unwrap_err();

        assert_eq!(err.path(), Some("machine_pools[1].replicas"));
        assert_eq!(
            err.to_string(),
            "Invalid type for field 'machine_pools[1].replicas': expected 32-bit integer"
        );
    }

    #[test]
    fn test_unmarshal_reports_path_in_nested_object() {
        let err = unmarshal::<ClusterBuilder>(r#"{"region": {"cloud_provider": {"name": 7}}}"#)
            .unwrap_err();

        assert_eq!(err.path(), Some("region.cloud_provider.name"));
    }

    #[test]
    fn test_unmarshal_reports_invalid_timestamp() {
        let err = unmarshal::<VersionBuilder>(r#"{"end_of_life_timestamp": "tomorrow"}"#)
            .unwrap_err();

        assert!(matches!(err, JsonError::InvalidValue { .. }));
        assert_eq!(err.path(), Some("end_of_life_timestamp"));
    }

    #[test]
    fn test_unmarshal_rejects_non_objects() {
        let err = unmarshal::<ClusterBuilder>("[]").unwrap_err();
        assert_eq!(err.to_string(), "Invalid document: expected object");

        let err = unmarshal::<ClusterBuilder>("{").unwrap_err();
        assert!(matches!(err, JsonError::Syntax(_)));
    }

    #[test]
    fn test_unmarshal_list() -> Result<()> {
        let pools = unmarshal_list::<MachinePoolBuilder>(
            r#"[{"id": "a", "replicas": 2}, {"id": "b", "kind": "MachinePoolLink"}]"#,
        )?;

        assert_eq!(pools.len(), 2);
        assert_eq!(pools[0].replicas(), 2);
        assert!(pools[1].link());

        let err = unmarshal_list::<MachinePoolBuilder>(r#"[{"id": "a"}, {"taints": {}}]"#)
            .unwrap_err();
        assert_eq!(err.path(), Some("[1].taints"));

        Ok(())
    }

    #[test]
    fn test_unmarshal_list_element_build_failure_has_index() {
        let builder = AddOnBuilder::new().id("logging").resource_cost(f64::NAN);
        let err = build_element(&builder, 1).unwrap_err();

        match err {
            JsonError::Build(err) => {
                assert_eq!(err.path(), "[1].resource_cost");
                assert!(matches!(err.root_cause(), BuildError::InvalidValue { .. }));
            }
            other => panic!("Expected a build error, got {:?}", other),
        }
    }

    #[test]
    fn test_unmarshal_list_link() -> Result<()> {
        let cluster = unmarshal::<ClusterBuilder>(
            r#"{
                "kind": "Cluster",
                "id": "1",
                "machine_pools": {
                    "kind": "MachinePoolListLink",
                    "href": "/api/clusters_mgmt/v1/clusters/1/machine_pools"
                }
            }"#,
        )?;

        assert!(cluster.is_set(ClusterField::MachinePools));
        let pools = cluster.machine_pools_list();
        assert!(pools.link());
        assert_eq!(pools.href(), "/api/clusters_mgmt/v1/clusters/1/machine_pools");
        assert!(pools.is_empty());

        assert_eq!(unmarshal::<ClusterBuilder>(&marshal(&cluster)?)?, cluster);

        Ok(())
    }

    #[test]
    fn test_unmarshal_list_object_with_items() -> Result<()> {
        let cluster = unmarshal::<ClusterBuilder>(
            r#"{
                "identity_providers": {
                    "kind": "IdentityProviderList",
                    "href": "/api/clusters_mgmt/v1/clusters/1/identity_providers",
                    "page": 1,
                    "items": [{"name": "github"}, {"name": "google"}]
                }
            }"#,
        )?;

        let providers = cluster.identity_providers_list();
        assert!(!providers.link());
        assert_eq!(providers.kind(), "IdentityProviderList");
        assert_eq!(cluster.identity_providers()[1].name(), "google");

        let err = unmarshal::<ClusterBuilder>(
            r#"{"machine_pools": {"items": [{"id": "a"}, {"replicas": "two"}]}}"#,
        )
        .unwrap_err();
        assert_eq!(err.path(), Some("machine_pools.items[1].replicas"));

        let err = unmarshal::<ClusterBuilder>(r#"{"addons": "logging"}"#).unwrap_err();
        assert_eq!(err.path(), Some("addons"));

        Ok(())
    }

    #[test]
    fn test_deserialize_through_serde() -> Result<()> {
        let add_on: AddOn = serde_json::from_str(r#"{"kind": "AddOn", "resource_cost": 0}"#)?;

        assert!(add_on.is_set(AddOnField::ResourceCost));
        assert_eq!(add_on.resource_cost(), 0.0);

        let err = serde_json::from_str::<AddOn>(r#"{"enabled": "yes"}"#).unwrap_err();
        assert!(err.to_string().contains("'enabled'"));

        Ok(())
    }

    #[test]
    fn test_round_trip_preserves_presence() -> Result<()> {
        let original = sample_cluster().build()?;
        let text = marshal(&original)?;
        let decoded = unmarshal::<ClusterBuilder>(&text)?;

        assert_eq!(decoded, original);
        assert_eq!(decoded.machine_pools()[0].fields(), original.machine_pools()[0].fields());
        assert!(decoded.machine_pools()[0].cluster().unwrap().link());

        Ok(())
    }

    #[test]
    fn test_read_json_builder_can_be_extended() -> Result<()> {
        let builder = ClusterBuilder::read_json(&json!({"name": "test"}))?;
        let cluster = builder.multi_az(true).build()?;

        assert_json_eq!(
            serde_json::to_value(&cluster)?,
            json!({"kind": "Cluster", "multi_az": true, "name": "test"})
        );

        Ok(())
    }
}
