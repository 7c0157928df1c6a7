//! Benchmark record model and CSV loading.
//!
//! One row of `benchmark.csv` describes a single BEAST run: which dataset,
//! which likelihood kernel, how many cores and threads, and what it cost.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Likelihood kernel the run was measured under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kernel {
    /// BEAST's built-in CPU implementation.
    #[serde(rename = "native")]
    Native,
    /// The BEAGLE library with SSE vectorization.
    #[serde(rename = "beagle_SSE")]
    BeagleSse,
}

impl Kernel {
    /// Both kernels, native first.
    pub const ALL: [Kernel; 2] = [Kernel::Native, Kernel::BeagleSse];

    /// Value as written in the CSV `kernel` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Kernel::Native => "native",
            Kernel::BeagleSse => "beagle_SSE",
        }
    }

    /// Human-readable label for legends.
    pub fn label(self) -> &'static str {
        match self {
            Kernel::Native => "Native",
            Kernel::BeagleSse => "BEAGLE SSE",
        }
    }
}

impl fmt::Display for Kernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `(beast_threads, beagle_threads)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadCombo {
    /// BEAST thread pool size.
    pub beast: u32,
    /// BEAGLE thread pool size.
    pub beagle: u32,
}

impl fmt::Display for ThreadCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B/{}T", self.beast, self.beagle)
    }
}

/// A single benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchRecord {
    /// Dataset name.
    pub dataset: String,
    /// Kernel variant.
    pub kernel: Kernel,
    /// Number of CPU cores allocated.
    pub cores: u32,
    /// BEAST thread pool size.
    pub beast_threads: u32,
    /// BEAGLE thread pool size.
    pub beagle_threads: u32,
    /// Number of alignment partitions.
    pub partitions: u32,
    /// Smallest unique-site count over all partitions.
    pub unique_sites_per_partition_min: f64,
    /// Largest unique-site count over all partitions.
    pub unique_sites_per_partition_max: f64,
    /// Wall-clock runtime in minutes.
    pub run_time_min: f64,
    /// Speedup over the single-core baseline.
    pub speedup: f64,
    /// Compute cost in CPU-minutes.
    pub cost_cpu_min: f64,
}

impl BenchRecord {
    /// Midpoint of the per-partition unique-site bounds.
    pub fn unique_sites_avg(&self) -> f64 {
        (self.unique_sites_per_partition_min + self.unique_sites_per_partition_max) / 2.0
    }

    /// Thread configuration of this run.
    pub fn thread_combo(&self) -> ThreadCombo {
        ThreadCombo {
            beast: self.beast_threads,
            beagle: self.beagle_threads,
        }
    }
}

/// All records loaded from one results file, in file order.
#[derive(Debug, Clone, Default)]
pub struct BenchTable {
    /// Rows in file order.
    pub records: Vec<BenchRecord>,
}

impl BenchTable {
    /// Wrap already-parsed records.
    pub fn new(records: Vec<BenchRecord>) -> Self {
        Self { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows measured under `kernel`.
    #[must_use]
    pub fn filter_kernel(&self, kernel: Kernel) -> BenchTable {
        self.filter(|r| r.kernel == kernel)
    }

    /// Rows run on exactly `cores` cores.
    #[must_use]
    pub fn filter_cores(&self, cores: u32) -> BenchTable {
        self.filter(|r| r.cores == cores)
    }

    /// Rows belonging to `dataset`.
    pub fn dataset_rows<'a>(&'a self, dataset: &'a str) -> impl Iterator<Item = &'a BenchRecord> {
        self.records.iter().filter(move |r| r.dataset == dataset)
    }

    fn filter(&self, pred: impl Fn(&BenchRecord) -> bool) -> BenchTable {
        BenchTable::new(self.records.iter().filter(|&r| pred(r)).cloned().collect())
    }

    /// Distinct dataset names in order of first appearance.
    pub fn datasets(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.dataset.as_str()))
            .map(|r| r.dataset.as_str())
            .collect()
    }

    /// Distinct core counts, ascending.
    pub fn core_counts(&self) -> Vec<u32> {
        let set: BTreeSet<u32> = self.records.iter().map(|r| r.cores).collect();
        set.into_iter().collect()
    }

    /// Distinct thread configurations, ascending.
    pub fn thread_combos(&self) -> Vec<ThreadCombo> {
        let set: BTreeSet<ThreadCombo> = self.records.iter().map(BenchRecord::thread_combo).collect();
        set.into_iter().collect()
    }
}

/// Parse a results table from any reader. The first line must be a header.
pub fn parse_csv<R: Read>(reader: R) -> Result<BenchTable> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in rdr.deserialize::<BenchRecord>().enumerate() {
        // Line numbers are 1-based and the header occupies line 1.
        let row = row.with_context(|| format!("parsing benchmark row at line {}", i + 2))?;
        records.push(row);
    }
    Ok(BenchTable::new(records))
}

/// Load a results table from `path`.
pub fn load_csv(path: &Path) -> Result<BenchTable> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening benchmark table {}", path.display()))?;
    parse_csv(file).with_context(|| format!("reading {}", path.display()))
}
