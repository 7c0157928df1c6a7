//! Configuration loading for bbplot.
//!
//! Reads `bbplot.toml` (or the file named by `--config`), applies defaults
//! for every missing key, validates the result, and layers command-line
//! overrides on top.

use anyhow::{Context, Result, bail, ensure};
use beagle_perf::html::{DEFAULT_PLOTLY_JS, PlotlySource};
use beagle_perf::report::ReportSettings;
use beagle_perf::style::Palette;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "bbplot.toml";

/// Top-level configuration loaded from `bbplot.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub report: ReportConfig,
    /// Dataset colour overrides.
    #[serde(default)]
    pub palette: BTreeMap<String, String>,
}

/// `[report]` section.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output_dir", rename = "output-dir")]
    pub output_dir: String,
    #[serde(default = "default_highlight_cores", rename = "highlight-cores")]
    pub highlight_cores: u32,
    #[serde(default = "default_plotly_js", rename = "plotly-js")]
    pub plotly_js: String,
    /// Local plotly.js file inlined into every page instead of `plotly-js`.
    #[serde(default, rename = "plotly-bundle")]
    pub plotly_bundle: Option<PathBuf>,
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default = "default_summary_rows", rename = "summary-rows")]
    pub summary_rows: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            highlight_cores: default_highlight_cores(),
            plotly_js: default_plotly_js(),
            plotly_bundle: None,
            repository: None,
            summary_rows: default_summary_rows(),
        }
    }
}

fn default_input() -> String {
    "cipres/benchmark.csv".into()
}
fn default_output_dir() -> String {
    "docs".into()
}
fn default_highlight_cores() -> u32 {
    8
}
fn default_plotly_js() -> String {
    DEFAULT_PLOTLY_JS.into()
}
fn default_summary_rows() -> usize {
    15
}

/// Fully resolved settings for one invocation.
#[derive(Debug)]
pub struct ResolvedConfig {
    /// Benchmark table to read.
    pub input: PathBuf,
    /// Maximum rows printed in the summary table.
    pub summary_rows: usize,
    /// Settings handed to the report pipeline.
    pub settings: ReportSettings,
}

/// Parse and validate configuration text.
pub fn parse_config(text: &str) -> Result<ProjectConfig> {
    let config: ProjectConfig = toml::from_str(text).context("parsing configuration")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ProjectConfig) -> Result<()> {
    ensure!(
        config.report.highlight_cores > 0,
        "report.highlight-cores must be at least 1"
    );
    ensure!(
        !config.report.input.trim().is_empty(),
        "report.input must not be empty"
    );
    ensure!(
        !config.report.output_dir.trim().is_empty(),
        "report.output-dir must not be empty"
    );
    ensure!(
        !config.report.plotly_js.trim().is_empty(),
        "report.plotly-js must not be empty"
    );
    for (dataset, color) in &config.palette {
        if color.trim().is_empty() {
            bail!("palette entry '{dataset}' has an empty colour");
        }
    }
    Ok(())
}

/// Load configuration from `explicit`, else `bbplot.toml` in `cwd` if it
/// exists, else defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<ProjectConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !candidate.exists() {
                return Ok(ProjectConfig::default());
            }
            candidate
        }
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}

/// Combine the loaded configuration with command-line overrides.
///
/// Reads the plotly.js bundle when `plotly-bundle` is set.
pub fn resolve(config: ProjectConfig, cli: &Cli) -> Result<ResolvedConfig> {
    let report = config.report;
    let input = cli.input.clone().unwrap_or(report.input);
    let output_dir = cli.output_dir.clone().unwrap_or(report.output_dir);
    let plotly = match &report.plotly_bundle {
        Some(path) => PlotlySource::from_file(path)?,
        None => PlotlySource::Url(report.plotly_js),
    };

    Ok(ResolvedConfig {
        input: PathBuf::from(input),
        summary_rows: report.summary_rows,
        settings: ReportSettings {
            output_dir: PathBuf::from(output_dir),
            highlight_cores: report.highlight_cores,
            plotly,
            palette: Palette::default().with_overrides(config.palette),
            repository: report.repository,
        },
    })
}

/// Print the resolved configuration (verbose mode).
pub fn print_resolved(config: &ResolvedConfig) {
    println!("  input:           {}", config.input.display());
    println!("  output dir:      {}", config.settings.output_dir.display());
    println!("  highlight cores: {}", config.settings.highlight_cores);
    println!("  plotly.js:       {}", config.settings.plotly);
    if let Some(repo) = &config.settings.repository {
        println!("  repository:      {repo}");
    }
}
