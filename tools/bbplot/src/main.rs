//! BEAST/BEAGLE performance report generator.
//!
//! Pipeline: read benchmark.csv → derive columns → group by dataset, cores
//!           and thread configuration → render charts → write CSV exports →
//!           write the landing page.

mod cli;
mod config;
mod report_cmd;
mod verbose;

use anyhow::Result;
use clap::Parser;
use std::path::Path;

use verbose::vprintln;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    verbose::init(verbose::Level::from_flags(cli.quiet, cli.verbose));

    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(cli.config.as_deref().map(Path::new), &cwd)?;
    let resolved = config::resolve(loaded, &cli)?;
    vprintln!("Configuration:");
    if verbose::enabled(verbose::Level::Verbose) {
        config::print_resolved(&resolved);
    }

    match cli.command {
        cli::Command::Report(ref args) => report_cmd::cmd_report(args, &resolved),
        cli::Command::Summary => report_cmd::cmd_summary(&resolved),
        cli::Command::Index => report_cmd::cmd_index(&resolved),
    }
}
