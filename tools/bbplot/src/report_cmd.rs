//! CLI entry points for `bbplot report`, `bbplot summary` and `bbplot index`.
//!
//! Bridges the `beagle_perf` loading, analysis and rendering modules to the
//! command-line interface.

use anyhow::{Context, Result, bail};
use beagle_perf::record::{self, BenchTable, Kernel};
use beagle_perf::report::{self, ReportKind};
use beagle_perf::{analysis, output};

use crate::cli::ReportArgs;
use crate::config::ResolvedConfig;
use crate::verbose::{self, Level, Timer, dprintln, vprintln};

/// Load the benchmark table named by the configuration.
fn load_table(config: &ResolvedConfig) -> Result<BenchTable> {
    let _t = Timer::start("loading benchmark table");
    let table = record::load_csv(&config.input)?;
    if table.is_empty() {
        bail!("benchmark table {} has no rows", config.input.display());
    }
    vprintln!(
        "  loaded {} rows from {}",
        table.len(),
        config.input.display()
    );
    Ok(table)
}

/// Resolve `--kind` arguments, defaulting to every report.
fn selected_kinds(args: &ReportArgs) -> Result<Vec<ReportKind>> {
    if args.kind.is_empty() {
        return Ok(ReportKind::ALL.to_vec());
    }
    let mut kinds = Vec::with_capacity(args.kind.len());
    for name in &args.kind {
        let kind = ReportKind::from_name(name)?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}

/// `bbplot report` — write chart pages, CSV exports and the landing page.
pub fn cmd_report(args: &ReportArgs, config: &ResolvedConfig) -> Result<()> {
    let kinds = selected_kinds(args)?;
    let table = load_table(config)?;

    if verbose::enabled(Level::Normal) {
        output::print_overview(&table, Kernel::BeagleSse);
        let beagle = table.filter_kernel(Kernel::BeagleSse);
        output::print_summary_table(&analysis::group_by_dataset_cores(&beagle), config.summary_rows);
    }

    let out_dir = &config.settings.output_dir;
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(kinds.len());
    for kind in kinds {
        let _t = Timer::start(format!("rendering {kind}"));
        let generated = report::generate(kind, &table, &config.settings)
            .with_context(|| format!("generating {kind} report"))?;
        dprintln!("  {} ({} rows)", generated.chart_path.display(), generated.rows);
        dprintln!("  {}", generated.data_path.display());
        written.push(generated.kind);
    }

    if !args.no_index {
        report::index_page(&written, &config.settings).write(out_dir)?;
        dprintln!("  {}", out_dir.join(beagle_perf::index::INDEX_FILE).display());
    }

    dprintln!("\nWrote {} report(s) to {}", written.len(), out_dir.display());
    Ok(())
}

/// `bbplot summary` — print overview, grouped summary and kernel comparison.
pub fn cmd_summary(config: &ResolvedConfig) -> Result<()> {
    let table = load_table(config)?;

    for kernel in Kernel::ALL {
        output::print_overview(&table, kernel);
    }

    let beagle = table.filter_kernel(Kernel::BeagleSse);
    output::print_summary_table(&analysis::group_by_dataset_cores(&beagle), config.summary_rows);

    println!("  BEAGLE SSE improvement over native:");
    output::print_improvement_table(&analysis::kernel_improvements(&table));
    Ok(())
}

/// `bbplot index` — rebuild `index.html` from chart pages already on disk.
pub fn cmd_index(config: &ResolvedConfig) -> Result<()> {
    let out_dir = &config.settings.output_dir;
    if !out_dir.is_dir() {
        bail!("output directory {} does not exist", out_dir.display());
    }

    let present: Vec<ReportKind> = ReportKind::ALL
        .into_iter()
        .filter(|k| out_dir.join(k.chart_file()).exists())
        .collect();
    vprintln!("  found {} of {} reports", present.len(), ReportKind::ALL.len());

    report::index_page(&present, &config.settings).write(out_dir)?;
    dprintln!("  {}", out_dir.join(beagle_perf::index::INDEX_FILE).display());
    Ok(())
}
