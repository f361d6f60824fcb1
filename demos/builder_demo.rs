/// Demonstrates the presence-tracked builder API.
///
/// This example builds a cluster description with nested objects, shows which
/// fields ended up present, and edits a copy without touching the original.
use ocm_clusters::builders::*;
use ocm_clusters::enums::ClusterState;
use ocm_clusters::presence::Presence;
use ocm_clusters::types::ClusterField;

fn main() -> BuildResult<()> {
    println!("=== Cluster Builder Demo ===\n");

    // Example 1: A cluster with a region and two machine pools
    println!("1. Building a cluster:");

    let cluster = ClusterBuilder::new()
        .name("test")
        .multi_az(false)
        .region(CloudRegionBuilder::new().id("us-east-1"))
        .add_machine_pool(MachinePoolBuilder::new().id("workers").replicas(3))
        .add_machine_pool(MachinePoolBuilder::new().id("infra").replicas(5))
        .build()?;

    println!("   Kind: {}", cluster.kind());
    println!("   Present fields: {:?}", cluster.fields());
    println!("   Machine pools: {}", cluster.machine_pools().len());
    println!(
        "   multi_az set: {} (value {})",
        cluster.is_set(ClusterField::MultiAz),
        cluster.multi_az()
    );
    println!(
        "   managed set: {} (value {})\n",
        cluster.is_set(ClusterField::Managed),
        cluster.managed()
    );

    // Example 2: Links carry only an identity
    println!("2. Referring to a version by link:");

    let version = VersionBuilder::new()
        .link(true)
        .id("openshift-v4.14.3")
        .href("/api/clusters_mgmt/v1/versions/openshift-v4.14.3")
        .build()?;

    println!("   Kind: {}", version.kind());
    println!("   Href: {}\n", version.href());

    // Example 3: Editing a copy
    println!("3. Editing a copy of an existing cluster:");

    let edited = ClusterBuilder::from(&cluster)
        .state(ClusterState::Hibernating)
        .build()?;

    println!("   Original state set: {}", cluster.is_set(ClusterField::State));
    println!("   Copy state: {:?}\n", edited.state().map(|state| state.as_str()));

    // Example 4: Invalid values are reported with their path
    println!("4. Reporting an invalid nested value:");

    let result = ClusterBuilder::new()
        .add_addon(AddOnBuilder::new().id("logging").resource_cost(f64::INFINITY))
        .build();

    match result {
        Ok(_) => println!("   Unexpectedly built"),
        Err(err) => {
            println!("   Error: {}", err);
            println!("   Path: {}", err.path());
        }
    }

    Ok(())
}
