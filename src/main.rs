use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ocm_clusters::builders::{
    AddOnBuilder, CloudProviderBuilder, CloudRegionBuilder, ClusterBuilder,
    IdentityProviderBuilder, MachinePoolBuilder, ObjectBuilder, VersionBuilder,
};
use ocm_clusters::json::{self, ReadJson};
use ocm_clusters::presence::{Field, Presence};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Inspect clusters management API payloads.
///
/// Reads a JSON document, builds the resource it describes and shows which
/// fields the document actually carried.
#[derive(Parser)]
#[command(name = "ocm-clusters", version, long_about = None)]
struct Cli {
    /// Resource type of the document
    #[arg(short, long, value_enum, default_value_t = Kind::Cluster)]
    kind: Kind,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Print only the names of the fields present in the document
    #[arg(long)]
    fields: bool,

    /// JSON document to read (standard input when absent or `-`)
    file: Option<PathBuf>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Kind {
    Cluster,
    CloudProvider,
    CloudRegion,
    Version,
    MachinePool,
    IdentityProvider,
    AddOn,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per present field
    Text,
    /// The payload as it would be sent back to the server
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    match run(&cli) {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    let text = read_input(cli.file.as_deref())?;
    match cli.kind {
        Kind::Cluster => inspect::<ClusterBuilder>(cli, &text),
        Kind::CloudProvider => inspect::<CloudProviderBuilder>(cli, &text),
        Kind::CloudRegion => inspect::<CloudRegionBuilder>(cli, &text),
        Kind::Version => inspect::<VersionBuilder>(cli, &text),
        Kind::MachinePool => inspect::<MachinePoolBuilder>(cli, &text),
        Kind::IdentityProvider => inspect::<IdentityProviderBuilder>(cli, &text),
        Kind::AddOn => inspect::<AddOnBuilder>(cli, &text),
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}

fn inspect<B>(cli: &Cli, text: &str) -> Result<String>
where
    B: ReadJson + ObjectBuilder,
    B::Object: Serialize,
{
    let object = json::unmarshal::<B>(text).context("Failed to read document")?;
    debug!(fields = object.fields().len(), "document read");

    if cli.fields {
        return Ok(object
            .fields()
            .iter()
            .map(|field| format!("{}\n", field.name()))
            .collect());
    }

    match cli.output {
        OutputFormat::Json => Ok(format!("{}\n", json::marshal_pretty(&object)?)),
        OutputFormat::Text => render_text(&object),
    }
}

fn render_text<T>(object: &T) -> Result<String>
where
    T: Serialize + Presence,
{
    let payload = serde_json::to_value(object)?;
    let kind = payload
        .get("kind")
        .and_then(|kind| kind.as_str())
        .unwrap_or("Object");

    let mut output = format!("{}\n", kind);
    for field in object.fields().iter() {
        if let Some(value) = payload.get(field.name()) {
            output.push_str(&format!("  {}: {}\n", field.name(), value));
        }
    }
    Ok(output)
}
