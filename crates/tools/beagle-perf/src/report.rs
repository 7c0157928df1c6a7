//! The five report variants and the pipeline that writes them.
//!
//! Every report follows the same pass: select rows, build a [`Figure`],
//! write it as a standalone HTML page, and write the rows it plotted as a
//! CSV export. The variants differ only in which columns drive colour,
//! marker symbol and facet, and in which annotations they add.

use anyhow::{Result, bail, ensure};
use serde_json::{Value, json};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::analysis::{self, Improvement, Metric};
use crate::export;
use crate::figure::{
    Annotation, Axis, Figure, Font, Grid, Layout, Line, Marker, PerPoint, Title, Trace, axis_key,
    axis_ref,
};
use crate::html::{self, PlotlySource};
use crate::index::{IndexPage, PageLink};
use crate::record::{BenchRecord, BenchTable, Kernel};
use crate::scale::{self, SIZE_LEGEND};
use crate::style::{Palette, SymbolMap, kernel_color};

/// Tick positions on core-count axes.
const CORE_TICKS: [f64; 6] = [1.0, 2.0, 4.0, 8.0, 16.0, 32.0];

/// Maximum number of facet columns in the speedup grid.
const FACET_COLUMNS: usize = 3;

/// A report variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ReportKind {
    /// Unique sites per partition against runtime, BEAGLE only.
    SitesRuntime,
    /// Runtime by core count with one symbol per thread configuration.
    ThreadConfig,
    /// Percent improvement of BEAGLE over native.
    KernelComparison,
    /// Speedup by core count, one facet per dataset.
    Speedup,
    /// Cost against runtime for both kernels.
    Cost,
}

impl ReportKind {
    /// Every report, in generation order.
    pub const ALL: [ReportKind; 5] = [
        ReportKind::SitesRuntime,
        ReportKind::ThreadConfig,
        ReportKind::KernelComparison,
        ReportKind::Speedup,
        ReportKind::Cost,
    ];

    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::SitesRuntime => "sites-runtime",
            ReportKind::ThreadConfig => "thread-config",
            ReportKind::KernelComparison => "kernel-comparison",
            ReportKind::Speedup => "speedup",
            ReportKind::Cost => "cost",
        }
    }

    /// Look up a report by its command-line name.
    pub fn from_name(name: &str) -> Result<Self> {
        match Self::ALL.into_iter().find(|k| k.name() == name) {
            Some(kind) => Ok(kind),
            None => {
                let expected: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                bail!("unknown report '{name}' (expected: {})", expected.join(", "))
            }
        }
    }

    /// File name of the chart page.
    pub fn chart_file(self) -> &'static str {
        match self {
            ReportKind::SitesRuntime => "sites_vs_runtime_all_cores.html",
            ReportKind::ThreadConfig => "thread_configurations.html",
            ReportKind::KernelComparison => "kernel_improvement.html",
            ReportKind::Speedup => "speedup_by_dataset.html",
            ReportKind::Cost => "cost_vs_runtime.html",
        }
    }

    /// File name of the CSV export.
    pub fn data_file(self) -> &'static str {
        match self {
            ReportKind::SitesRuntime => "all_beagle_experiments_data.csv",
            ReportKind::ThreadConfig => "thread_configurations_data.csv",
            ReportKind::KernelComparison => "kernel_improvement_data.csv",
            ReportKind::Speedup => "speedup_data.csv",
            ReportKind::Cost => "cost_data.csv",
        }
    }

    /// Chart title, also used as the link text on the landing page.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::SitesRuntime => {
                "BEAST/BEAGLE Performance: Sites per Partition vs Runtime (All Configurations)"
            }
            ReportKind::ThreadConfig => "BEAGLE SSE Runtime by Thread Configuration",
            ReportKind::KernelComparison => "BEAGLE SSE Improvement over Native Kernel",
            ReportKind::Speedup => "Speedup by Core Count per Dataset",
            ReportKind::Cost => "Compute Cost vs Runtime",
        }
    }

    /// Link text for the CSV export on the landing page.
    pub fn data_label(self) -> &'static str {
        match self {
            ReportKind::SitesRuntime => "Download complete BEAGLE SSE experiment data (CSV)",
            ReportKind::ThreadConfig => "Download thread configuration data (CSV)",
            ReportKind::KernelComparison => "Download kernel improvement data (CSV)",
            ReportKind::Speedup => "Download speedup data (CSV)",
            ReportKind::Cost => "Download cost data (CSV)",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings shared by all reports.
#[derive(Debug, Clone)]
pub struct ReportSettings {
    /// Directory receiving charts, exports and the landing page.
    pub output_dir: PathBuf,
    /// Core count highlighted with star markers.
    pub highlight_cores: u32,
    /// Where chart pages load plotly.js from.
    pub plotly: PlotlySource,
    /// Dataset colours.
    pub palette: Palette,
    /// Source repository linked from the landing page.
    pub repository: Option<String>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs"),
            highlight_cores: 8,
            plotly: PlotlySource::default(),
            palette: Palette::default(),
            repository: None,
        }
    }
}

/// Files written for one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReport {
    /// Which report.
    pub kind: ReportKind,
    /// Path of the chart page.
    pub chart_path: PathBuf,
    /// Path of the CSV export.
    pub data_path: PathBuf,
    /// Number of rows plotted and exported.
    pub rows: usize,
}

/// Build the chart for `kind` without writing anything.
pub fn build_figure(kind: ReportKind, table: &BenchTable, settings: &ReportSettings) -> Result<Figure> {
    match kind {
        ReportKind::SitesRuntime => sites_runtime(table, settings),
        ReportKind::ThreadConfig => thread_config(table, settings),
        ReportKind::KernelComparison => kernel_comparison(table, settings),
        ReportKind::Speedup => speedup(table),
        ReportKind::Cost => cost(table),
    }
}

/// Build and write the chart page and CSV export for `kind`.
pub fn generate(kind: ReportKind, table: &BenchTable, settings: &ReportSettings) -> Result<GeneratedReport> {
    let figure = build_figure(kind, table, settings)?;
    let chart_path = settings.output_dir.join(kind.chart_file());
    let data_path = settings.output_dir.join(kind.data_file());

    html::write_figure(&chart_path, &figure, kind.title(), &settings.plotly)?;

    let rows = match kind {
        ReportKind::SitesRuntime | ReportKind::ThreadConfig => {
            let beagle = table.filter_kernel(Kernel::BeagleSse);
            export::write_records_file(&data_path, &beagle.records)?;
            beagle.len()
        }
        ReportKind::KernelComparison => {
            let imps = analysis::kernel_improvements(table);
            export::write_csv_file(&data_path, &imps)?;
            imps.len()
        }
        ReportKind::Speedup | ReportKind::Cost => {
            export::write_records_file(&data_path, &table.records)?;
            table.len()
        }
    };

    Ok(GeneratedReport {
        kind,
        chart_path,
        data_path,
        rows,
    })
}

/// Landing page linking `reports`.
pub fn index_page<'a>(
    reports: impl IntoIterator<Item = &'a ReportKind>,
    settings: &ReportSettings,
) -> IndexPage {
    let mut charts = Vec::new();
    let mut downloads = Vec::new();
    let mut star_markers = false;
    for &kind in reports {
        star_markers |= kind == ReportKind::SitesRuntime;
        charts.push(PageLink::new(kind.chart_file(), kind.title()));
        downloads.push(PageLink::new(kind.data_file(), kind.data_label()));
    }
    IndexPage {
        title: IndexPage::DEFAULT_TITLE.into(),
        highlight_cores: settings.highlight_cores,
        star_markers,
        charts,
        downloads,
        repository: settings.repository.clone(),
    }
}

fn beagle_rows(table: &BenchTable) -> Result<BenchTable> {
    let beagle = table.filter_kernel(Kernel::BeagleSse);
    ensure!(!beagle.is_empty(), "no beagle_SSE experiments in benchmark table");
    Ok(beagle)
}

fn xs(rows: &[&BenchRecord], f: impl Fn(&BenchRecord) -> f64) -> Vec<f64> {
    rows.iter().map(|&r| f(r)).collect()
}

fn cores_of(r: &BenchRecord) -> f64 {
    f64::from(r.cores)
}

fn outlined(color: &str) -> Marker {
    Marker {
        color: Some(color.into()),
        line: Some(Line::new(1.0, "black")),
        ..Marker::default()
    }
}

fn core_axis() -> Axis {
    Axis::log("CPU Cores").tickvals(CORE_TICKS.to_vec())
}

/// Unique sites per partition vs runtime, marker size by cores, with the
/// highlighted core count starred.
fn sites_runtime(table: &BenchTable, settings: &ReportSettings) -> Result<Figure> {
    let beagle = beagle_rows(table)?;

    let mut layout = Layout::new(
        Title::centered(ReportKind::SitesRuntime.title(), 20.0),
        Axis::log("Average Unique Sites per Partition").range(1.3, 4.0),
        Axis::log("Run Time (minutes)").range(-0.5, 2.5),
    );
    layout.annotations.push(
        Annotation::text(300f64.log10(), 0.35f64.log10(), "Marker size = Core count")
            .font(Font::sized(10.0, "gray")),
    );
    let mut fig = Figure::new(layout);

    for dataset in beagle.datasets() {
        let rows: Vec<&BenchRecord> = beagle.dataset_rows(dataset).collect();
        let cores: Vec<u32> = rows.iter().map(|r| r.cores).collect();

        let marker = Marker {
            size: Some(PerPoint::Array(scale::marker_sizes(&cores))),
            opacity: Some(0.7),
            ..outlined(settings.palette.color(dataset))
        };
        let trace = Trace::scatter(dataset, xs(&rows, BenchRecord::unique_sites_avg), xs(&rows, |r| r.run_time_min))
            .marker(marker)
            .text(cores.iter().map(|c| format!("{c} cores")).collect())
            .hover(
                "<b>%{fullData.name}</b><br>\
                 Unique sites/partition: %{x:.0f}<br>\
                 Run time: %{y:.2f} min<br>\
                 Cores: %{text}<br>\
                 Speedup: %{customdata[0]:.2f}x<br>\
                 Cost: %{customdata[1]:.1f} cpu-min<br>\
                 Config: %{customdata[2]}B/%{customdata[3]}T threads<extra></extra>",
            )
            .customdata(
                rows.iter()
                    .map(|r| vec![json!(r.speedup), json!(r.cost_cpu_min), json!(r.beast_threads), json!(r.beagle_threads)])
                    .collect(),
            );
        fig.add_trace(trace);
    }

    let highlighted = beagle.filter_cores(settings.highlight_cores);
    if !highlighted.is_empty() {
        let rows: Vec<&BenchRecord> = highlighted.records.iter().collect();
        let n = settings.highlight_cores;
        let trace = Trace::scatter(
            format!("{n}-core (optimal)"),
            xs(&rows, BenchRecord::unique_sites_avg),
            xs(&rows, |r| r.run_time_min),
        )
        .marker(Marker {
            size: Some(PerPoint::Scalar(15.0)),
            symbol: Some(PerPoint::Scalar("star".into())),
            color: Some("gold".into()),
            line: Some(Line::new(2.0, "black")),
            ..Marker::default()
        })
        .text(rows.iter().map(|r| r.dataset.clone()).collect())
        .hover(format!(
            "<b>OPTIMAL {n}-CORE</b><br>\
             Dataset: %{{text}}<br>\
             Unique sites/partition: %{{x:.0f}}<br>\
             Run time: %{{y:.2f}} min<br>\
             Speedup: %{{customdata[0]:.2f}}x<extra></extra>"
        ))
        .customdata(rows.iter().map(|r| vec![json!(r.speedup)]).collect());
        fig.add_trace(Trace {
            showlegend: Some(true),
            ..trace
        });
    }

    let mut legend = Trace::scatter(
        "Core count",
        vec![100.0, 200.0, 400.0, 800.0],
        vec![0.5; SIZE_LEGEND.len()],
    )
    .marker(Marker {
        size: Some(PerPoint::Array(SIZE_LEGEND.iter().map(|&(_, s)| s).collect())),
        ..outlined("lightgray")
    })
    .text(
        SIZE_LEGEND
            .iter()
            .map(|&(c, _)| if c == 1 { "1 core".to_string() } else { format!("{c} cores") })
            .collect(),
    );
    legend.mode = "markers+text".into();
    legend.textposition = Some("top center".into());
    legend.showlegend = Some(false);
    legend.hoverinfo = Some("skip".into());
    fig.add_trace(legend);

    Ok(fig)
}

/// Runtime by core count; colour per dataset, symbol per thread configuration.
fn thread_config(table: &BenchTable, settings: &ReportSettings) -> Result<Figure> {
    let beagle = beagle_rows(table)?;
    let symbols = SymbolMap::new(beagle.thread_combos());

    let mut fig = Figure::new(Layout::new(
        Title::centered(ReportKind::ThreadConfig.title(), 20.0),
        core_axis(),
        Axis::log("Run Time (minutes)"),
    ));

    for dataset in beagle.datasets() {
        for &combo in symbols.combos() {
            let rows: Vec<&BenchRecord> = beagle
                .dataset_rows(dataset)
                .filter(|r| r.thread_combo() == combo)
                .collect();
            if rows.is_empty() {
                continue;
            }
            let trace = Trace::scatter(format!("{dataset} ({combo})"), xs(&rows, cores_of), xs(&rows, |r| r.run_time_min))
                .marker(Marker {
                    size: Some(PerPoint::Scalar(11.0)),
                    symbol: Some(PerPoint::Scalar(symbols.symbol(combo).into())),
                    ..outlined(settings.palette.color(dataset))
                })
                .hover(format!(
                    "<b>{dataset}</b><br>\
                     Cores: %{{x}}<br>\
                     Run time: %{{y:.2f}} min<br>\
                     Threads: {combo}<br>\
                     Speedup: %{{customdata[0]:.2f}}x<extra></extra>"
                ))
                .customdata(rows.iter().map(|r| vec![json!(r.speedup)]).collect())
                .legend_group(dataset, true);
            fig.add_trace(trace);
        }
    }

    Ok(fig)
}

/// Percent runtime improvement of BEAGLE over native per configuration.
fn kernel_comparison(table: &BenchTable, settings: &ReportSettings) -> Result<Figure> {
    let imps = analysis::kernel_improvements(table);
    ensure!(
        !imps.is_empty(),
        "no native/beagle_SSE pairs with matching cores and thread configuration"
    );
    let symbols = SymbolMap::new(imps.iter().map(Improvement::thread_combo));

    let mut yaxis = Axis::linear("Runtime Improvement (%)");
    yaxis.zeroline = Some(true);
    yaxis.zerolinecolor = Some("black".into());

    let mut layout = Layout::new(
        Title::centered(ReportKind::KernelComparison.title(), 20.0),
        core_axis(),
        yaxis,
    );
    layout.annotations.push(
        Annotation::text(0.98, 0.02, "Above 0%: BEAGLE SSE faster than native")
            .refs("paper", "paper")
            .font(Font::sized(10.0, "gray")),
    );
    let mut fig = Figure::new(layout);

    let mut datasets: Vec<&str> = Vec::new();
    for imp in &imps {
        if !datasets.contains(&imp.dataset.as_str()) {
            datasets.push(&imp.dataset);
        }
    }

    for dataset in datasets {
        let rows: Vec<&Improvement> = imps.iter().filter(|i| i.dataset == dataset).collect();
        let trace = Trace::scatter(
            dataset,
            rows.iter().map(|i| f64::from(i.cores)).collect(),
            rows.iter().map(|i| i.improvement_pct).collect(),
        )
        .marker(Marker {
            size: Some(PerPoint::Scalar(12.0)),
            symbol: Some(PerPoint::Array(
                rows.iter().map(|i| symbols.symbol(i.thread_combo()).to_string()).collect(),
            )),
            ..outlined(settings.palette.color(dataset))
        })
        .text(rows.iter().map(|i| i.thread_combo().to_string()).collect())
        .hover(
            "<b>%{fullData.name}</b><br>\
             Cores: %{x}<br>\
             Threads: %{text}<br>\
             Improvement: %{y:.1f}%<br>\
             Native: %{customdata[0]:.2f} min<br>\
             BEAGLE SSE: %{customdata[1]:.2f} min<extra></extra>",
        )
        .customdata(
            rows.iter()
                .map(|i| vec![json!(i.native_run_time_min), json!(i.beagle_run_time_min)])
                .collect(),
        );
        fig.add_trace(trace);
    }

    Ok(fig)
}

/// Speedup by core count, one subplot per dataset, coloured by kernel.
fn speedup(table: &BenchTable) -> Result<Figure> {
    ensure!(!table.is_empty(), "benchmark table is empty");
    let datasets = table.datasets();
    let columns = datasets.len().min(FACET_COLUMNS);
    let grid_rows = datasets.len().div_ceil(columns);

    let mut layout = Layout::new(
        Title::centered(ReportKind::Speedup.title(), 20.0),
        core_axis(),
        Axis::linear("Speedup"),
    );
    layout.grid = Some(Grid {
        rows: grid_rows,
        columns,
        pattern: "independent".into(),
    });
    layout.legend = None;
    layout.height = 400 * u32::try_from(grid_rows).unwrap_or(u32::MAX / 400).max(1);

    let mut fig = Figure::new(layout);
    // Each kernel gets one legend entry, on the first facet it appears in.
    let mut in_legend = BTreeSet::new();

    for (i, dataset) in datasets.iter().enumerate() {
        let n = i + 1;
        if n > 1 {
            fig.layout.extra_axes.insert(axis_key("x", n), core_axis());
            fig.layout.extra_axes.insert(axis_key("y", n), Axis::linear("Speedup"));
        }
        fig.add_annotation(
            Annotation::text(0.5, 1.08, *dataset)
                .refs(format!("{} domain", axis_ref("x", n)), format!("{} domain", axis_ref("y", n)))
                .font(Font::sized(14.0, "black")),
        );

        for kernel in Kernel::ALL {
            let rows: Vec<&BenchRecord> = table
                .dataset_rows(dataset)
                .filter(|r| r.kernel == kernel)
                .collect();
            if rows.is_empty() {
                continue;
            }
            let trace = Trace::scatter(kernel.label(), xs(&rows, cores_of), xs(&rows, |r| r.speedup))
                .marker(Marker {
                    size: Some(PerPoint::Scalar(10.0)),
                    ..outlined(kernel_color(kernel))
                })
                .text(rows.iter().map(|r| r.thread_combo().to_string()).collect())
                .hover(format!(
                    "<b>{dataset} / {}</b><br>\
                     Cores: %{{x}}<br>\
                     Speedup: %{{y:.2f}}x<br>\
                     Threads: %{{text}}<extra></extra>",
                    kernel.label()
                ))
                .legend_group(kernel.as_str(), in_legend.insert(kernel))
                .subplot(n);
            fig.add_trace(trace);
        }
    }

    Ok(fig)
}

/// Cost against runtime for both kernels, annotating each dataset's
/// cheapest run.
fn cost(table: &BenchTable) -> Result<Figure> {
    ensure!(!table.is_empty(), "benchmark table is empty");

    let mut fig = Figure::new(Layout::new(
        Title::centered(ReportKind::Cost.title(), 20.0),
        Axis::log("Run Time (minutes)"),
        Axis::linear("Cost (CPU-minutes)"),
    ));

    for kernel in Kernel::ALL {
        let rows: Vec<&BenchRecord> = table.records.iter().filter(|r| r.kernel == kernel).collect();
        if rows.is_empty() {
            continue;
        }
        let cores: Vec<u32> = rows.iter().map(|r| r.cores).collect();
        let trace = Trace::scatter(kernel.label(), xs(&rows, |r| r.run_time_min), xs(&rows, |r| r.cost_cpu_min))
            .marker(Marker {
                size: Some(PerPoint::Array(scale::marker_sizes(&cores))),
                opacity: Some(0.7),
                ..outlined(kernel_color(kernel))
            })
            .text(rows.iter().map(|r| r.dataset.clone()).collect())
            .hover(
                "<b>%{text}</b><br>\
                 Run time: %{x:.2f} min<br>\
                 Cost: %{y:.1f} cpu-min<br>\
                 Cores: %{customdata[0]}<br>\
                 Config: %{customdata[1]}B/%{customdata[2]}T threads<extra></extra>",
            )
            .customdata(
                rows.iter()
                    .map(|r| -> Vec<Value> { vec![json!(r.cores), json!(r.beast_threads), json!(r.beagle_threads)] })
                    .collect(),
            );
        fig.add_trace(trace);
    }

    for best in analysis::best_per_dataset(table, Metric::Cost) {
        if best.run_time_min <= 0.0 {
            continue;
        }
        fig.add_annotation(
            Annotation::arrow(
                best.run_time_min.log10(),
                best.cost_cpu_min,
                format!("{}: {} cores ({})", best.dataset, best.cores, best.kernel.label()),
            )
            .font(Font::sized(10.0, "black")),
        );
    }

    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::sample_table;

    fn settings() -> ReportSettings {
        ReportSettings::default()
    }

    #[test]
    fn names_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_name(kind.name()).unwrap(), kind);
        }
        let err = ReportKind::from_name("histogram").unwrap_err().to_string();
        assert!(err.contains("unknown report 'histogram'"));
        assert!(err.contains("kernel-comparison"));
    }

    #[test]
    fn sites_runtime_traces() {
        let fig = build_figure(ReportKind::SitesRuntime, &sample_table(), &settings()).unwrap();
        let names: Vec<&str> = fig.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Benchmark1", "DS3", "8-core (optimal)", "Core count"]);

        // Benchmark1 beagle rows run on 1 and 8 cores.
        let b1 = &fig.data[0];
        assert_eq!(b1.x, vec![200.0, 200.0]);
        assert_eq!(b1.text, vec!["1 cores", "8 cores"]);
        assert_eq!(b1.marker.color.as_deref(), Some("#1f77b4"));
        match &b1.marker.size {
            Some(PerPoint::Array(sizes)) => {
                assert!((sizes[1] - scale::MAX_MARKER_SIZE).abs() < 1e-9);
            }
            other => panic!("unexpected marker size {other:?}"),
        }

        let star = &fig.data[2];
        assert_eq!(star.text, vec!["Benchmark1", "DS3"]);
        assert_eq!(star.marker.symbol, Some(PerPoint::Scalar("star".into())));

        assert_eq!(fig.layout.xaxis.range, Some([1.3, 4.0]));
        assert_eq!(fig.layout.annotations.len(), 1);
    }

    #[test]
    fn highlight_trace_skipped_when_absent() {
        let settings = ReportSettings {
            highlight_cores: 64,
            ..settings()
        };
        let fig = build_figure(ReportKind::SitesRuntime, &sample_table(), &settings).unwrap();
        assert!(fig.data.iter().all(|t| !t.name.contains("optimal")));
    }

    #[test]
    fn beagle_reports_need_beagle_rows() {
        let native = sample_table().filter_kernel(Kernel::Native);
        assert!(build_figure(ReportKind::SitesRuntime, &native, &settings()).is_err());
        assert!(build_figure(ReportKind::ThreadConfig, &native, &settings()).is_err());
        assert!(build_figure(ReportKind::KernelComparison, &native, &settings()).is_err());
    }

    #[test]
    fn thread_config_one_trace_per_combination() {
        let fig = build_figure(ReportKind::ThreadConfig, &sample_table(), &settings()).unwrap();
        let names: Vec<&str> = fig.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Benchmark1 (1B/1T)", "Benchmark1 (2B/4T)", "DS3 (2B/4T)", "DS3 (4B/4T)"]);
        assert_eq!(fig.data[0].marker.symbol, Some(PerPoint::Scalar("circle".into())));
        assert_eq!(fig.data[2].marker.symbol, Some(PerPoint::Scalar("square".into())));
        assert_eq!(fig.data[3].marker.symbol, Some(PerPoint::Scalar("diamond".into())));
    }

    #[test]
    fn kernel_comparison_traces() {
        let fig = build_figure(ReportKind::KernelComparison, &sample_table(), &settings()).unwrap();
        assert_eq!(fig.data.len(), 2);
        assert_eq!(fig.data[0].x, vec![1.0, 8.0]);
        assert_eq!(fig.data[0].y, vec![50.0, 50.0]);
        assert_eq!(fig.layout.yaxis.zeroline, Some(true));
    }

    #[test]
    fn speedup_facets_per_dataset() {
        let fig = build_figure(ReportKind::Speedup, &sample_table(), &settings()).unwrap();
        let grid = fig.layout.grid.as_ref().unwrap();
        assert_eq!((grid.rows, grid.columns), (1, 2));
        assert!(fig.layout.extra_axes.contains_key("xaxis2"));
        assert!(fig.layout.extra_axes.contains_key("yaxis2"));
        assert_eq!(fig.data.len(), 4);
        assert_eq!(fig.data[0].xaxis.as_deref(), Some("x"));
        assert_eq!(fig.data[2].xaxis.as_deref(), Some("x2"));
        // One legend entry per kernel.
        assert_eq!(fig.data[0].showlegend, Some(true));
        assert_eq!(fig.data[2].showlegend, Some(false));
        assert_eq!(fig.layout.annotations.len(), 2);
    }

    #[test]
    fn speedup_legend_covers_kernel_missing_from_first_facet() {
        let csv = "\
dataset,kernel,cores,beast_threads,beagle_threads,partitions,unique_sites_per_partition_min,unique_sites_per_partition_max,run_time_min,speedup,cost_cpu_min
DS3,beagle_SSE,8,2,4,2,1000,3000,5.0,3.6,40.0
DS4,native,1,1,1,3,50,150,30.0,1.0,30.0
DS4,beagle_SSE,1,1,1,3,50,150,15.0,2.0,15.0
";
        let table = crate::record::parse_csv(csv.as_bytes()).unwrap();
        let fig = build_figure(ReportKind::Speedup, &table, &settings()).unwrap();
        let entries: Vec<(&str, Option<&str>, Option<bool>)> = fig
            .data
            .iter()
            .map(|t| (t.name.as_str(), t.xaxis.as_deref(), t.showlegend))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("BEAGLE SSE", Some("x"), Some(true)),
                ("Native", Some("x2"), Some(true)),
                ("BEAGLE SSE", Some("x2"), Some(false)),
            ]
        );
    }

    #[test]
    fn cost_annotates_cheapest_run() {
        let fig = build_figure(ReportKind::Cost, &sample_table(), &settings()).unwrap();
        assert_eq!(fig.data.len(), 2);
        let texts: Vec<&str> = fig.layout.annotations.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["Benchmark1: 1 cores (BEAGLE SSE)", "DS3: 8 cores (BEAGLE SSE)"]);
        assert!((fig.layout.annotations[0].x - 20f64.log10()).abs() < 1e-9);
    }

    #[test]
    fn index_links_every_report() {
        let page = index_page(&ReportKind::ALL, &settings());
        assert_eq!(page.charts.len(), 5);
        assert_eq!(page.downloads[0].href, "all_beagle_experiments_data.csv");
        assert_eq!(page.charts[4].href, "cost_vs_runtime.html");
        assert!(page.star_markers);

        let cost_only = index_page(&[ReportKind::Cost], &settings());
        assert!(!cost_only.star_markers);
    }
}
