//! Docs-Harvest main entry point
//!
//! This is the command-line interface for the Docs-Harvest documentation crawler.

use anyhow::Context;
use clap::Parser;
use docs_harvest::config::{load_config_with_hash, validate, Config, SectionLayout, SiteKind};
use docs_harvest::crawler::Coordinator;
use docs_harvest::output::{print_summary, save_results};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Docs-Harvest: a recursive documentation crawler
///
/// Docs-Harvest starts from a documentation index page, follows the
/// table-of-contents links of every page it reaches, and writes the
/// extracted paragraphs and code blocks as a nested tree.
#[derive(Parser, Debug)]
#[command(name = "docs-harvest")]
#[command(version)]
#[command(about = "A recursive documentation crawler", long_about = None)]
struct Cli {
    /// Built-in site to crawl (ignored when --config is given)
    #[arg(long, value_enum, default_value = "python-docs")]
    site: SiteKind,

    /// Path to a TOML configuration file replacing the built-in preset
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Directory to write the result file to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate the configuration and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docs_harvest=info,warn"),
            1 => EnvFilter::new("docs_harvest=debug,info"),
            2 => EnvFilter::new("docs_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Formats a fatal error as the single diagnostic line logged before exit
///
/// The whole cause chain is kept. Line breaks inside a cause, such as the
/// source excerpt of a TOML parse error, are folded into spaces.
fn error_line(error: &anyhow::Error) -> String {
    let message = format!("{:#}", error);
    let parts: Vec<&str> = message
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    format!("Error in main: {}", parts.join(" "))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = prepare_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Resolves the configuration, applies the command-line overrides and
/// validates the result
fn prepare_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = resolve_config(cli)?;

    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.to_string_lossy().into_owned();
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Loads the configuration file if given, otherwise the selected preset
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            Ok(config)
        }
        None => {
            tracing::debug!("Using built-in preset {:?}", cli.site);
            Ok(cli.site.preset())
        }
    }
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Docs-Harvest Dry Run ===\n");

    println!("Site: {}", config.site.name);
    println!("  Root URL: {}", config.site.root_url);
    match &config.site.layout {
        SectionLayout::PairedTables {
            header_selector,
            table_selector,
            link_selector,
        } => {
            println!(
                "  Sections: headers `{}` paired with tables `{}`",
                header_selector, table_selector
            );
            println!("  Top-level links: `{}`", link_selector);
        }
        SectionLayout::NamedSections {
            sections,
            link_selector,
        } => {
            println!(
                "  Sections ({}), links `{}`:",
                sections.len(), link_selector
            );
            for section in sections {
                println!("    * {}", section);
            }
        }
    }
    match &config.site.child_link_selector {
        Some(selector) => println!("  Child links: `{}` (recursive)", selector),
        None => println!("  Child links: none (top-level pages only)"),
    }

    println!("\nContent:");
    if let Some(required) = &config.site.content.required {
        println!("  Required node: `{}`", required);
    }
    println!("  Paragraphs: {:?}", config.site.content.paragraphs);
    println!("  Code blocks: {:?}", config.site.content.code_blocks);

    println!("\nCrawler:");
    println!(
        "  Request interval: {}ms",
        config.crawler.request_interval_ms
    );
    println!(
        "  Request timeout: {}s",
        config.crawler.request_timeout_secs
    );
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!(
        "  {:?} -> {}",
        config.output.format, config.output.path().display()
    );

    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    println!("Scanning {} starting...", config.site.name);

    let mut coordinator = Coordinator::new(config).context("failed to set up crawler")?;
    let report = coordinator.run().await?;

    let path = save_results(&report.results, &coordinator.config().output)
        .context("failed to save results")?;
    println!("File saved to : {}", path.display());

    print_summary(&report);
    Ok(())
}
