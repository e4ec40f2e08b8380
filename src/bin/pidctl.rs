//! CLI tool for inspecting the resource catalogue and identifier resolution.
//!
//! Talks to the upstream catalogue directly; no running resolver is needed.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the catalogue once and report usable/skipped entries
//! cargo run --bin pidctl -- catalog check
//!
//! # Print every identifier → slug mapping
//! cargo run --bin pidctl -- catalog list
//!
//! # Resolve one identifier to its canonical URL
//! cargo run --bin pidctl -- resolve a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d
//!
//! # Check whether a candidate passes the identifier shape check
//! cargo run --bin pidctl -- shape dna-donation
//! ```
//!
//! # Environment Variables
//!
//! - `PRIMARY_HOST`: canonical host (required unless `--catalog-url` and `--host` are given)
//! - `CATALOG_URL`: catalogue URL (default: `https://<PRIMARY_HOST>/resources.json`)

use pid_resolver::application::services::{DEFAULT_FRESHNESS_WINDOW, PidResolver};
use pid_resolver::domain::decision::{Resolution, resource_url};
use pid_resolver::domain::entities::Snapshot;
use pid_resolver::domain::identifier::is_identifier_shaped;
use pid_resolver::domain::repositories::CatalogSource;
use pid_resolver::infrastructure::catalog::HttpCatalogSource;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for the persistent identifier resolver.
#[derive(Parser)]
#[command(name = "pidctl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Catalogue URL (overrides CATALOG_URL)
    #[arg(long, global = true)]
    catalog_url: Option<String>,

    /// Primary host used in printed URLs (overrides PRIMARY_HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect the upstream catalogue
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Resolve an identifier to its canonical URL
    Resolve {
        /// Identifier, taken verbatim
        identifier: String,
    },

    /// Check a candidate against the identifier shape
    Shape {
        /// Candidate path segment
        candidate: String,
    },
}

/// Catalogue subcommands.
#[derive(Subcommand)]
enum CatalogAction {
    /// Fetch once and report entry counts
    Check,

    /// Print the identifier → slug mapping
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { action } => {
            let (source, _) = connect(cli.catalog_url, cli.host)?;
            handle_catalog_action(action, &source).await?;
        }
        Commands::Resolve { identifier } => {
            let (source, host) = connect(cli.catalog_url, cli.host)?;
            handle_resolve(source, &host, &identifier).await?;
        }
        Commands::Shape { candidate } => handle_shape(&candidate),
    }

    Ok(())
}

/// Builds the catalogue client and settles the primary host.
///
/// Flags take priority over `CATALOG_URL` / `PRIMARY_HOST`.
fn connect(
    catalog_url: Option<String>,
    host: Option<String>,
) -> Result<(HttpCatalogSource, String)> {
    let host = match host {
        Some(host) => host,
        None => std::env::var("PRIMARY_HOST")
            .context("PRIMARY_HOST must be set (or pass --host)")?,
    };
    let catalog_url = catalog_url
        .or_else(|| std::env::var("CATALOG_URL").ok())
        .unwrap_or_else(|| format!("https://{}/resources.json", host));

    let source = HttpCatalogSource::new(catalog_url).context("Failed to build HTTP client")?;

    Ok((source, host))
}

/// Fetches the catalogue and builds a snapshot from it.
async fn fetch_snapshot(source: &HttpCatalogSource) -> Result<Snapshot> {
    println!(
        "{} {}",
        "🔍 Fetching".bright_blue(),
        source.url().bright_white()
    );

    let records = source
        .fetch_catalog()
        .await
        .with_context(|| format!("Failed to fetch catalogue from {}", source.url()))?;

    Ok(Snapshot::build(records))
}

/// Dispatches catalogue commands.
async fn handle_catalog_action(action: CatalogAction, source: &HttpCatalogSource) -> Result<()> {
    let snapshot = fetch_snapshot(source).await?;

    match action {
        CatalogAction::Check => {
            println!("{}", "✅ Catalogue OK".green().bold());
            println!();
            println!(
                "  Usable entries:  {}",
                snapshot.len().to_string().bright_green().bold()
            );

            let skipped = snapshot.skipped().to_string();
            println!(
                "  Skipped entries: {}",
                if snapshot.skipped() == 0 {
                    skipped.bright_black()
                } else {
                    skipped.yellow().bold()
                }
            );
            println!();
        }
        CatalogAction::List => list_entries(&snapshot),
    }

    Ok(())
}

/// Prints every mapping sorted by slug.
///
/// # Output Format
///
/// ```text
///   Identifier                             Slug
///   ──────────────────────────────────────────────────────────────
///   a1b2c3d4-e5f6-4a7b-8c9d-0e1f2a3b4c5d   dna-donation
/// ```
fn list_entries(snapshot: &Snapshot) {
    println!();

    if snapshot.is_empty() {
        println!("{}", "  No usable entries".yellow());
        return;
    }

    let mut entries: Vec<_> = snapshot.iter().collect();
    entries.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(b.0)));

    println!(
        "  {:<38} {}",
        "Identifier".bright_white().bold(),
        "Slug".bright_white().bold()
    );
    println!("  {}", "─".repeat(62).bright_black());

    for (identifier, slug) in &entries {
        let identifier = if is_identifier_shaped(identifier) {
            identifier.bright_black()
        } else {
            identifier.yellow()
        };
        println!("  {:<38} {}", identifier, slug.cyan());
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();
}

/// Resolves one identifier through a fresh resolver.
async fn handle_resolve(source: HttpCatalogSource, host: &str, identifier: &str) -> Result<()> {
    println!(
        "{} {}",
        "🔍 Resolving".bright_blue(),
        identifier.bright_white()
    );

    let resolver = PidResolver::new(Arc::new(source), DEFAULT_FRESHNESS_WINDOW);
    resolver
        .scheduler()
        .refresh()
        .await
        .context("Failed to fetch catalogue")?;

    match resolver.resolve(identifier).await {
        Resolution::Found { slug } => {
            println!("  Slug: {}", slug.cyan());
            println!("  URL:  {}", resource_url(host, &slug).bright_green().bold());
        }
        Resolution::NotFound => {
            println!("{}", "❌ Persistent identifier not found".red());
            if !is_identifier_shaped(identifier) {
                println!(
                    "{}",
                    "⚠️  Candidate is not identifier-shaped either".yellow()
                );
            }
        }
    }

    Ok(())
}

/// Reports whether a candidate passes the identifier shape check.
fn handle_shape(candidate: &str) {
    if is_identifier_shaped(candidate) {
        println!("{} {}", "✅ Identifier-shaped:".green().bold(), candidate);
    } else {
        println!("{} {}", "❌ Not identifier-shaped:".red().bold(), candidate);
        println!(
            "  Expected {}",
            "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx (hex)".bright_black()
        );
    }
}
