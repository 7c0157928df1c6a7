//! CSV exports published next to each chart.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::record::{BenchRecord, Kernel};

/// Input columns plus the derived `unique_sites_avg`.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    dataset: &'a str,
    kernel: Kernel,
    cores: u32,
    beast_threads: u32,
    beagle_threads: u32,
    partitions: u32,
    unique_sites_per_partition_min: f64,
    unique_sites_per_partition_max: f64,
    run_time_min: f64,
    speedup: f64,
    cost_cpu_min: f64,
    unique_sites_avg: f64,
}

impl<'a> From<&'a BenchRecord> for ExportRow<'a> {
    fn from(r: &'a BenchRecord) -> Self {
        Self {
            dataset: &r.dataset,
            kernel: r.kernel,
            cores: r.cores,
            beast_threads: r.beast_threads,
            beagle_threads: r.beagle_threads,
            partitions: r.partitions,
            unique_sites_per_partition_min: r.unique_sites_per_partition_min,
            unique_sites_per_partition_max: r.unique_sites_per_partition_max,
            run_time_min: r.run_time_min,
            speedup: r.speedup,
            cost_cpu_min: r.cost_cpu_min,
            unique_sites_avg: r.unique_sites_avg(),
        }
    }
}

/// Serialize `rows` as CSV with a header line to `writer`.
pub fn write_rows<W, T, I>(writer: W, rows: I) -> Result<()>
where
    W: Write,
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row).context("serializing CSV row")?;
    }
    wtr.flush().context("flushing CSV output")?;
    Ok(())
}

/// Write benchmark records, with the derived column, to `writer`.
pub fn write_records<'a, W, I>(writer: W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a BenchRecord>,
{
    write_rows(writer, records.into_iter().map(ExportRow::from))
}

/// Create `path` (and its parent directory) and write `rows` to it as CSV.
pub fn write_csv_file<T, I>(path: &Path, rows: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    let file = std::fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    write_rows(file, rows).with_context(|| format!("writing {}", path.display()))
}

/// Write benchmark records to a CSV file at `path`.
pub fn write_records_file<'a, I>(path: &Path, records: I) -> Result<()>
where
    I: IntoIterator<Item = &'a BenchRecord>,
{
    write_csv_file(path, records.into_iter().map(ExportRow::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis;
    use crate::record::{parse_csv, tests::sample_table};

    #[test]
    fn records_export_adds_derived_column() {
        let table = sample_table();
        let mut buf = Vec::new();
        write_records(&mut buf, &table.records[..1]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("dataset,kernel,cores,"));
        assert!(header.ends_with(",cost_cpu_min,unique_sites_avg"));
        assert_eq!(lines.next().unwrap(), "Benchmark1,native,1,1,1,4,100.0,300.0,40.0,1.0,40.0,200.0");
        assert!(lines.next().is_none());
    }

    #[test]
    fn exported_records_parse_back() {
        let table = sample_table();
        let mut buf = Vec::new();
        write_records(&mut buf, &table.records).unwrap();
        let reparsed = parse_csv(buf.as_slice()).unwrap();
        assert_eq!(reparsed.records, table.records);
    }

    #[test]
    fn improvements_export_columns() {
        let imps = analysis::kernel_improvements(&sample_table());
        let mut buf = Vec::new();
        write_rows(&mut buf, &imps).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with(
            "dataset,cores,beast_threads,beagle_threads,native_run_time_min,beagle_run_time_min,improvement_pct\n"
        ));
        assert_eq!(text.lines().count(), 4);
    }
}
