//! Command-line interface definitions for bbplot.

use clap::{Parser, Subcommand};

/// BEAST/BEAGLE performance report generator.
#[derive(Parser)]
#[command(name = "bbplot", version, about)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Path to the configuration file (default: ./bbplot.toml if present).
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Benchmark table to read (overrides the config file).
    #[arg(long, short = 'i', global = true)]
    pub input: Option<String>,

    /// Directory for generated pages and exports (overrides the config file).
    #[arg(long, short = 'o', global = true)]
    pub output_dir: Option<String>,

    /// Suppress progress output; show only errors.
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose output with timings and per-file details.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate chart pages, CSV exports and the landing page.
    Report(ReportArgs),
    /// Print summary tables to the terminal without writing files.
    Summary,
    /// Regenerate index.html from the reports already in the output directory.
    Index,
}

/// Arguments for the `report` subcommand.
#[derive(Parser)]
pub struct ReportArgs {
    /// Report to generate; repeat for several. Defaults to all reports.
    ///
    /// One of: sites-runtime, thread-config, kernel-comparison, speedup, cost.
    #[arg(long, short = 'k')]
    pub kind: Vec<String>,

    /// Skip writing index.html.
    #[arg(long)]
    pub no_index: bool,
}
