// src/main.rs

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use orgsync::overrides::DEFAULT_OBJECT_PATTERN;

/// Default number of names per retrieval batch. The vendor retrieval
/// command slows down sharply on large selectors.
const DEFAULT_CHUNK_SIZE: &str = "20";

#[derive(Parser)]
#[command(name = "orgsync")]
#[command(author, version, about = "Batch metadata sync and object-definition cleanup for Salesforce-style orgs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve the org's metadata inventory in bounded batches
    Pull {
        /// Alias of the org to retrieve from
        #[arg(short, long)]
        target_org: String,
        /// Maximum names per retrieval batch
        #[arg(long, default_value = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,
    },
    /// Install packages present in a source org but missing from a target org
    Clone {
        /// Alias of the org whose installed packages are the reference set
        #[arg(short, long)]
        source_org: String,
        /// Alias of the org to install missing packages into
        #[arg(short, long)]
        target_org: String,
        /// Print the diff without installing anything
        #[arg(long)]
        diff_only: bool,
    },
    /// Strip Flexipage action overrides from retrieved object definitions
    Datamodel {
        /// Glob pattern selecting the object-definition documents
        #[arg(long, default_value = DEFAULT_OBJECT_PATTERN)]
        pattern: String,
        /// Create and switch to this git branch before rewriting
        #[arg(short, long)]
        branch: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pull {
            target_org,
            chunk_size,
        } => commands::cmd_pull(&target_org, chunk_size),
        Commands::Clone {
            source_org,
            target_org,
            diff_only,
        } => commands::cmd_clone(&source_org, &target_org, diff_only),
        Commands::Datamodel { pattern, branch } => {
            commands::cmd_datamodel(&pattern, branch.as_deref())
        }
    }
}
