mod cli;
mod server;
mod tools;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cairn::config::CairnConfig;
use cairn::knowledge::store::NewEntry;

#[derive(Parser)]
#[command(name = "cairn", version, about = "Local knowledge store with relevance-ranked recall, served over MCP")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the MCP server
    Serve {
        /// Transport to use: "stdio" or "http". Defaults to the configured transport.
        #[arg(long)]
        transport: Option<String>,
    },
    /// Store a new entry
    Learn {
        content: String,
        #[arg(long)]
        category: Option<String>,
        /// Tag to attach (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        source: Option<String>,
    },
    /// Search stored entries by relevance
    Search {
        query: String,
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        min_score: Option<f64>,
    },
    /// Show knowledge store statistics
    Stats,
    /// Show category, tag and access patterns
    Patterns,
    /// Show full details for one entry
    Inspect { id: u64 },
    /// Export all entries as JSON to stdout
    Export,
    /// Import entries from a JSON export
    Import { file: PathBuf },
    /// Rebuild the search index from stored entries
    Reindex,
    /// Check the storage files
    Doctor,
    /// Delete all entries and the index
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config (for log level)
    let config = CairnConfig::load()?;

    // Initialize tracing with the configured log level.
    // Log to stderr so stdout stays clean for MCP JSON-RPC.
    let filter = EnvFilter::try_new(&config.server.log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Serve { transport } => {
            let transport = transport.unwrap_or_else(|| config.server.transport.clone());
            match transport.as_str() {
                "stdio" => server::serve_stdio(config).await?,
                "http" => server::serve_http(config).await?,
                other => bail!("unknown transport: {other}. Supported: stdio, http"),
            }
        }
        Command::Learn {
            content,
            category,
            tags,
            source,
        } => cli::learn::learn(
            &config,
            NewEntry {
                content,
                category,
                tags,
                source,
            },
        )?,
        Command::Search {
            query,
            limit,
            category,
            min_score,
        } => cli::search::search(&config, &query, limit, category.as_deref(), min_score)?,
        Command::Stats => cli::stats::stats(&config)?,
        Command::Patterns => cli::patterns::patterns(&config)?,
        Command::Inspect { id } => cli::inspect::inspect(&config, id)?,
        Command::Export => cli::export::export(&config)?,
        Command::Import { file } => cli::import::import(&config, &file)?,
        Command::Reindex => cli::reindex::reindex(&config)?,
        Command::Doctor => cli::doctor::doctor(&config)?,
        Command::Reset { yes } => cli::reset::reset(&config, yes)?,
    }

    Ok(())
}
