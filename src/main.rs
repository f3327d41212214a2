//! # Prep Bank CLI (`prep`)
//!
//! The `prep` binary is a thin adapter over the repository's query
//! surface. It loads the content file, builds the in-memory repository,
//! runs one query, and exits. It adds nothing to the core semantics.
//!
//! ## Usage
//!
//! ```bash
//! prep --data ./data/entries.json <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `prep categories` | List categories with entry counts |
//! | `prep list <category>` | List a category's entries in source order |
//! | `prep get <id>` | Print one entry (question + markdown answer) |
//! | `prep search "<query>"` | Keyword search, question matches first |
//! | `prep check` | Validate the content file and report counts |
//!
//! ## Examples
//!
//! ```bash
//! # Validate a content file
//! prep --data ./data/entries.json check
//!
//! # Browse
//! prep --data ./data/entries.json categories
//! prep --data ./data/entries.json list Docker
//!
//! # Keyword search (AND semantics, case-insensitive, substring per token)
//! prep --data ./data/entries.json search "docker image"
//!
//! # Machine-readable output
//! prep --data ./data/entries.json get 12 --json
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use prep_bank::config::{self, Config};
use prep_bank::models::Entry;
use prep_bank::repository::Repository;
use prep_bank::search::run_search;
use prep_bank::sources::{self, run_check};

/// Prep Bank CLI — an in-memory repository and retrieval layer for
/// interview-prep Q&A content.
///
/// The content file is resolved from `--data` when given, otherwise from
/// the `[content]` section of the TOML config.
#[derive(Parser)]
#[command(
    name = "prep",
    about = "Prep Bank — load-once repository and keyword search over interview-prep Q&A entries",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/prep.toml")]
    config: PathBuf,

    /// Path to the JSON content file; overrides `content.path` from the
    /// config and makes the config file optional.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// List categories in first-seen order, with entry counts.
    Categories,

    /// List a category's entries in source order.
    ///
    /// Category matching is case-sensitive and exact. An unknown category
    /// is a normal outcome, not an error; the command succeeds with an
    /// empty listing.
    List {
        /// Category label, matched exactly.
        category: String,
    },

    /// Print one entry by id.
    Get {
        /// Entry id. Unknown ids fail with a non-zero exit code.
        id: u32,

        /// Emit the entry as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Keyword search over questions and answers.
    ///
    /// The query is split on whitespace into case-insensitive tokens with
    /// AND semantics; each token matches as a substring. Entries matching
    /// in the question rank before answer-only matches. An empty query
    /// lists the whole collection in id order.
    Search {
        /// Search query.
        query: String,

        /// Maximum results to print (default from `search.limit`).
        #[arg(long)]
        limit: Option<usize>,

        /// Emit results as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Validate the content file without running a query.
    ///
    /// Exits non-zero when the file violates an integrity rule
    /// (duplicate id, empty category, empty question).
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = resolve_config(&cli)?;
    let data_path = cli.data.clone().unwrap_or_else(|| config.content.path.clone());

    if let Commands::Check = cli.command {
        return run_check(&data_path);
    }

    let records = sources::read_records(&data_path)?;
    let repo = Repository::load(records)
        .with_context(|| format!("invalid content file: {}", data_path.display()))?;

    match cli.command {
        Commands::Categories => run_categories(&repo),
        Commands::List { category } => run_list(&repo, &category),
        Commands::Get { id, json } => run_get(&repo, id, json),
        Commands::Search { query, limit, json } => {
            run_search(&repo, &query, limit.unwrap_or(config.search.limit), json)
        }
        Commands::Check => unreachable!("handled above"),
    }
}

/// Load the config file, or synthesize a default config when `--data`
/// makes the file optional.
fn resolve_config(cli: &Cli) -> Result<Config> {
    if cli.config.exists() {
        return config::load_config(&cli.config);
    }
    match &cli.data {
        Some(data) => Ok(Config::with_content_path(data.clone())),
        None => bail!(
            "no config file at {} and no --data given",
            cli.config.display()
        ),
    }
}

fn run_categories(repo: &Repository) -> Result<()> {
    println!("{:<24} ENTRIES", "CATEGORY");
    for category in repo.categories() {
        println!("{:<24} {}", category, repo.entries_in(category).count());
    }
    Ok(())
}

fn run_list(repo: &Repository, category: &str) -> Result<()> {
    let mut shown = 0;
    for entry in repo.entries_in(category) {
        println!("[{}] {}", entry.id, entry.question);
        shown += 1;
    }
    if shown == 0 {
        println!("No entries in category '{}'.", category);
    }
    Ok(())
}

fn run_get(repo: &Repository, id: u32, json: bool) -> Result<()> {
    let entry: &Entry = match repo.get(id) {
        Ok(entry) => entry,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    println!("--- Entry {} ---", entry.id);
    println!("category: {}", entry.category);
    println!("question: {}", entry.question);
    println!();
    println!("{}", entry.answer);
    Ok(())
}
