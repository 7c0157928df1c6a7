//! Grouping, aggregation and kernel comparison over a results table.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::record::{BenchRecord, BenchTable, Kernel, ThreadCombo};

/// One `(dataset, cores)` group, summarised by its first row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// Dataset name.
    pub dataset: String,
    /// Core count.
    pub cores: u32,
    /// Average unique sites per partition.
    pub unique_sites_avg: f64,
    /// Runtime in minutes.
    pub run_time_min: f64,
    /// Speedup ratio.
    pub speedup: f64,
    /// Cost in CPU-minutes.
    pub cost_cpu_min: f64,
    /// Partition count.
    pub partitions: u32,
}

/// Runtime change of BEAGLE over native for one configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Improvement {
    /// Dataset name.
    pub dataset: String,
    /// Core count.
    pub cores: u32,
    /// BEAST thread pool size.
    pub beast_threads: u32,
    /// BEAGLE thread pool size.
    pub beagle_threads: u32,
    /// Native kernel runtime in minutes.
    pub native_run_time_min: f64,
    /// BEAGLE kernel runtime in minutes.
    pub beagle_run_time_min: f64,
    /// Percent runtime reduction; negative when BEAGLE was slower.
    pub improvement_pct: f64,
}

impl Improvement {
    /// Thread configuration both runs shared.
    pub fn thread_combo(&self) -> ThreadCombo {
        ThreadCombo {
            beast: self.beast_threads,
            beagle: self.beagle_threads,
        }
    }
}

/// Quantity minimised by [`best_per_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Wall-clock runtime.
    RunTime,
    /// CPU-minutes spent.
    Cost,
}

impl Metric {
    fn of(self, record: &BenchRecord) -> f64 {
        match self {
            Metric::RunTime => record.run_time_min,
            Metric::Cost => record.cost_cpu_min,
        }
    }
}

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Percent improvement of `candidate` over `baseline`.
///
/// Returns `None` when the baseline is zero.
pub fn improvement_pct(baseline: f64, candidate: f64) -> Option<f64> {
    if baseline == 0.0 {
        return None;
    }
    Some((baseline - candidate) / baseline * 100.0)
}

/// Group rows by `(dataset, cores)`, keeping the first row of each group.
///
/// Values are rounded to two decimals. Groups are ordered by dataset name,
/// then core count.
pub fn group_by_dataset_cores(table: &BenchTable) -> Vec<SummaryRow> {
    let mut groups: BTreeMap<(&str, u32), &BenchRecord> = BTreeMap::new();
    for record in &table.records {
        groups.entry((record.dataset.as_str(), record.cores)).or_insert(record);
    }

    groups
        .into_values()
        .map(|r| SummaryRow {
            dataset: r.dataset.clone(),
            cores: r.cores,
            unique_sites_avg: round2(r.unique_sites_avg()),
            run_time_min: round2(r.run_time_min),
            speedup: round2(r.speedup),
            cost_cpu_min: round2(r.cost_cpu_min),
            partitions: r.partitions,
        })
        .collect()
}

type ConfigKey<'a> = (&'a str, u32, u32, u32);

fn config_key(record: &BenchRecord) -> ConfigKey<'_> {
    (
        record.dataset.as_str(),
        record.cores,
        record.beast_threads,
        record.beagle_threads,
    )
}

/// Pair native and BEAGLE runs on identical configurations.
///
/// Runs are matched on dataset, core count and both thread pool sizes; the
/// first run of each kernel wins when a configuration repeats. Unpaired
/// runs and zero native runtimes are skipped. Results are ordered by
/// dataset, cores, then thread configuration.
pub fn kernel_improvements(table: &BenchTable) -> Vec<Improvement> {
    let mut native: HashMap<ConfigKey<'_>, f64> = HashMap::new();
    for record in table.records.iter().filter(|r| r.kernel == Kernel::Native) {
        native.entry(config_key(record)).or_insert(record.run_time_min);
    }

    let mut paired: BTreeMap<ConfigKey<'_>, Improvement> = BTreeMap::new();
    for record in table.records.iter().filter(|r| r.kernel == Kernel::BeagleSse) {
        let key = config_key(record);
        let Some(&native_time) = native.get(&key) else {
            continue;
        };
        let Some(pct) = improvement_pct(native_time, record.run_time_min) else {
            continue;
        };
        paired.entry(key).or_insert_with(|| Improvement {
            dataset: record.dataset.clone(),
            cores: record.cores,
            beast_threads: record.beast_threads,
            beagle_threads: record.beagle_threads,
            native_run_time_min: native_time,
            beagle_run_time_min: record.run_time_min,
            improvement_pct: pct,
        });
    }

    paired.into_values().collect()
}

/// The row minimising `metric` for each dataset, in dataset first-appearance
/// order. Ties keep the earlier row.
pub fn best_per_dataset(table: &BenchTable, metric: Metric) -> Vec<&BenchRecord> {
    table
        .datasets()
        .into_iter()
        .filter_map(|dataset| {
            table.dataset_rows(dataset).fold(None, |best: Option<&BenchRecord>, r| match best {
                Some(b) if metric.of(b) <= metric.of(r) => Some(b),
                _ => Some(r),
            })
        })
        .collect()
}
