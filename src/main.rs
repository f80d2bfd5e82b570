//! Command-line front end for stats-embed.
//!
//! # Usage
//!
//! ```bash
//! # Print the iframe URL for a page location
//! stats-embed resolve "/html/all?page=base&module=Perps"
//!
//! # Render the embedding page
//! stats-embed render "/html/all?page=base" --output index.html
//!
//! # Show the active route table
//! stats-embed routes
//! ```
//!
//! Logs go to stderr; stdout carries only the URL or page.

use stats_embed::config::{self, Config};
use stats_embed::domain::{Location, RouteTarget};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Resolve stats page paths to embedded dashboard URLs.
#[derive(Parser)]
#[command(name = "stats-embed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the iframe URL for a page location
    Resolve {
        /// Page path with optional query, e.g. "/html/all?page=base"
        target: String,
    },

    /// Render the embedding page for a page location
    Render {
        /// Page path with optional query, e.g. "/html/all?page=base"
        target: String,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the active route table
    Routes,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Resolve { target } => resolve(&config, &target)?,
        Commands::Render { target, output } => render(&config, &target, output)?,
        Commands::Routes => list_routes(&config)?,
    }

    Ok(())
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn resolve(config: &Config, target: &str) -> Result<()> {
    let service = config
        .embed_service()
        .context("Failed to build route resolver")?;

    println!("{}", service.frame_src(&Location::parse(target)));
    Ok(())
}

fn render(config: &Config, target: &str, output: Option<PathBuf>) -> Result<()> {
    let service = config
        .embed_service()
        .context("Failed to build route resolver")?;

    let html = service
        .render(&Location::parse(target))
        .context("Failed to render embed page")?;

    match output {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote embed page to {}", path.display());
        }
        None => print!("{html}"),
    }

    Ok(())
}

/// Prints the route table.
///
/// # Output Format
///
/// ```text
/// Routes
///
///   Path       Target                                   Shape
///   ──────────────────────────────────────────────────────────────
///   /          https://synthetix.streamlit.app          url
///   /all       https://synthetix-all.streamlit.app      app
///
///   Fallback:      https://synthetix.streamlit.app{path}
///   Mount prefix:  /html
/// ```
fn list_routes(config: &Config) -> Result<()> {
    let resolver = config.resolver().context("Failed to load route table")?;

    println!("{}", "Routes".bright_blue().bold());
    println!();

    if resolver.routes().is_empty() {
        println!("{}", "  No routes configured".yellow());
    } else {
        println!(
            "  {:<10} {:<40} {:<6}",
            "Path".bright_white().bold(),
            "Target".bright_white().bold(),
            "Shape".bright_white().bold()
        );
        println!("  {}", "─".repeat(62).bright_black());

        for (path, target) in resolver.routes().iter() {
            let shape = match target {
                RouteTarget::Url(_) => "url",
                RouteTarget::App { .. } => "app",
            };
            println!(
                "  {:<10} {:<40} {}",
                path.cyan(),
                target.root(),
                shape.bright_black()
            );
        }
    }

    println!();
    println!(
        "  Fallback:      {}{}",
        resolver.default_base().bright_green(),
        "{path}".bright_black()
    );
    let prefix = if resolver.mount_prefix().is_empty() {
        "disabled".bright_black()
    } else {
        resolver.mount_prefix().normal()
    };
    println!("  Mount prefix:  {prefix}");
    println!();

    Ok(())
}
