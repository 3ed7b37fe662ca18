//! Command-line front end over the code system catalog.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use stannum_codes::registry;
use stannum_terminology::VocabularyInfo;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stannum")]
#[command(about = "FHIR terminology code lookup and validation", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every known code system
    Systems {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the full code table of one system
    Expand {
        /// Canonical system URI
        system: String,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve one code to its display label
    Lookup {
        /// Canonical system URI
        system: String,
        /// Wire-format code
        code: String,
    },
    /// Check whether a code is a member of a system
    Validate {
        /// Canonical system URI
        system: String,
        /// Wire-format code
        code: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Systems { json } => systems(json),
        Commands::Expand { system, json } => expand(&system, json),
        Commands::Lookup { system, code } => lookup(&system, &code),
        Commands::Validate { system, code } => validate(&system, &code),
    }
}

fn require_system(system: &str) -> Result<&'static VocabularyInfo> {
    registry::find(system).with_context(|| format!("unknown code system '{system}'"))
}

fn systems(json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = registry::ALL
            .iter()
            .map(|info| {
                serde_json::json!({
                    "name": info.name,
                    "system": info.system,
                    "count": info.len(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for info in registry::ALL {
            println!("{:<26} {:<50} {:>4}", info.name, info.system, info.len());
        }
    }
    Ok(())
}

fn expand(system: &str, json: bool) -> Result<()> {
    let info = require_system(system)?;
    tracing::debug!(system = info.system, count = info.len(), "expanding");

    if json {
        let concepts: Vec<_> = info
            .concepts
            .iter()
            .map(|c| serde_json::json!({ "code": c.code, "display": c.display }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&concepts)?);
    } else {
        for concept in info.concepts {
            println!("{:<32} {}", concept.code, concept.display);
        }
    }
    Ok(())
}

fn lookup(system: &str, code: &str) -> Result<()> {
    let info = require_system(system)?;
    match info.find(code) {
        Some(concept) => {
            println!("{}", concept.display);
            Ok(())
        }
        None => bail!("code '{code}' is not a member of {} ({system})", info.name),
    }
}

fn validate(system: &str, code: &str) -> Result<()> {
    match registry::validate(system, code) {
        Some(verdict) if verdict.valid => {
            match verdict.display {
                Some(display) => println!("ok: {display}"),
                None => println!("ok"),
            }
            Ok(())
        }
        Some(verdict) => bail!(verdict
            .message
            .unwrap_or_else(|| format!("code '{code}' is not valid in {system}"))),
        None => bail!("unknown code system '{system}'"),
    }
}
