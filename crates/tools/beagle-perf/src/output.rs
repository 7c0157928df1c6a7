//! Terminal output formatting for benchmark tables.

use crate::analysis::{Improvement, SummaryRow};
use crate::record::{BenchTable, Kernel};

/// Print row counts, datasets and core counts for the rows of `kernel`.
pub fn print_overview(table: &BenchTable, kernel: Kernel) {
    let rows = table.filter_kernel(kernel);
    println!("Found {} {} experiments", rows.len(), kernel);
    println!("  Datasets: {}", rows.datasets().join(", "));
    let cores: Vec<String> = rows.core_counts().iter().map(u32::to_string).collect();
    println!("  Core counts: {}", cores.join(", "));
}

/// Print at most `limit` rows of the `(dataset, cores)` summary.
pub fn print_summary_table(rows: &[SummaryRow], limit: usize) {
    if rows.is_empty() {
        println!("  No benchmark results to display.");
        return;
    }

    let width = rows
        .iter()
        .map(|r| r.dataset.len())
        .max()
        .unwrap_or(7)
        .max(7);

    println!();
    println!("  Summary by dataset and cores:");
    println!(
        "  {:<width$}  {:>5}  {:>12}  {:>10}  {:>8}  {:>10}  {:>10}",
        "Dataset", "Cores", "Sites (avg)", "Time (min)", "Speedup", "Cost (cpu)", "Partitions",
    );
    println!(
        "  {:-<width$}  {:->5}  {:->12}  {:->10}  {:->8}  {:->10}  {:->10}",
        "", "", "", "", "", "", "",
    );

    for row in rows.iter().take(limit) {
        println!(
            "  {:<width$}  {:>5}  {:>12.2}  {:>10.2}  {:>8.2}  {:>10.2}  {:>10}",
            row.dataset,
            row.cores,
            row.unique_sites_avg,
            row.run_time_min,
            row.speedup,
            row.cost_cpu_min,
            row.partitions,
        );
    }

    if rows.len() > limit {
        println!("  ... {} more", rows.len() - limit);
    }
    println!();
}

/// Print BEAGLE-over-native improvement per configuration.
pub fn print_improvement_table(rows: &[Improvement]) {
    if rows.is_empty() {
        println!("  No matching native/BEAGLE configurations.");
        return;
    }

    let width = rows
        .iter()
        .map(|r| r.dataset.len())
        .max()
        .unwrap_or(7)
        .max(7);

    println!();
    println!(
        "  {:<width$}  {:>5}  {:>7}  {:>12}  {:>12}  {:>8}",
        "Dataset", "Cores", "Threads", "Native (min)", "BEAGLE (min)", "Gain",
    );
    println!(
        "  {:-<width$}  {:->5}  {:->7}  {:->12}  {:->12}  {:->8}",
        "", "", "", "", "", "",
    );

    for row in rows {
        println!(
            "  {:<width$}  {:>5}  {:>7}  {:>12.2}  {:>12.2}  {:>7.1}%",
            row.dataset,
            row.cores,
            row.thread_combo().to_string(),
            row.native_run_time_min,
            row.beagle_run_time_min,
            row.improvement_pct,
        );
    }
    println!();
}
