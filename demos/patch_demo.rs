/// Demonstrates JSON payloads driven by field presence.
///
/// A builder with a single setter call marshals to a single member, which is
/// what a partial update (PATCH) request expects.
use ocm_clusters::builders::*;
use ocm_clusters::json::{self, JsonResult};
use ocm_clusters::presence::Presence;

fn main() -> JsonResult<()> {
    println!("=== Partial Update Demo ===\n");

    println!("1. Patch payload for the node drain grace period:");
    let patch = ClusterBuilder::new()
        .node_drain_grace_period(ValueBuilder::new().unit("minutes").value(60.0))
        .build()?;
    println!("   {}\n", json::marshal(&patch)?);

    println!("2. Scaling a machine pool down to zero:");
    let patch = MachinePoolBuilder::new().replicas(0).build()?;
    println!("   {}\n", json::marshal(&patch)?);

    println!("3. Reading a server response:");
    let response = r#"{
        "kind": "Cluster",
        "id": "123",
        "name": "mycluster",
        "managed": true,
        "display_name": null,
        "api": {"url": "https://api.example.com:6443"}
    }"#;
    let cluster = json::unmarshal::<ClusterBuilder>(response)?;
    println!("   Present fields: {:?}", cluster.fields());
    println!("   Re-marshaled:\n{}", json::marshal_pretty(&cluster)?);

    Ok(())
}
