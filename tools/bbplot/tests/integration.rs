//! Integration tests for the bbplot binary.
//!
//! These tests invoke bbplot as a subprocess against the benchmark table in
//! `tests/fixtures/` and inspect the files it writes.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path to the compiled bbplot binary.
fn bbplot_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bbplot"))
}

/// Path to the fixture benchmark table.
fn fixture_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/benchmark.csv")
}

/// Fresh scratch directory unique to `name`.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("bbplot-it-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("failed to create scratch directory");
    dir
}

fn run(cwd: &Path, args: &[&str]) -> Output {
    Command::new(bbplot_binary())
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to execute bbplot")
}

fn assert_success(output: &Output, what: &str) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "{what} failed (exit={:?}):\nstdout:\n{stdout}\nstderr:\n{stderr}",
        output.status.code(),
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn report_writes_all_pages_and_exports() {
    let dir = scratch_dir("all");
    let out = dir.join("docs");
    let input = fixture_csv();

    let output = run(
        &dir,
        &["--input", input.to_str().unwrap(), "--output-dir", out.to_str().unwrap(), "report"],
    );
    assert_success(&output, "bbplot report");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 8 beagle_SSE experiments"), "stdout: {stdout}");
    assert!(stdout.contains("Summary by dataset and cores:"), "stdout: {stdout}");

    for file in [
        "sites_vs_runtime_all_cores.html",
        "all_beagle_experiments_data.csv",
        "thread_configurations.html",
        "thread_configurations_data.csv",
        "kernel_improvement.html",
        "kernel_improvement_data.csv",
        "speedup_by_dataset.html",
        "speedup_data.csv",
        "cost_vs_runtime.html",
        "cost_data.csv",
        "index.html",
    ] {
        assert!(out.join(file).exists(), "{file} was not written");
    }

    let index = std::fs::read_to_string(out.join("index.html")).unwrap();
    assert!(index.contains("href=\"sites_vs_runtime_all_cores.html\""));
    assert!(index.contains("href=\"cost_data.csv\""));

    let chart = std::fs::read_to_string(out.join("sites_vs_runtime_all_cores.html")).unwrap();
    assert!(chart.contains("8-core (optimal)"));
    assert!(chart.contains("Plotly.newPlot"));

    // Only beagle_SSE rows are exported for the sites/runtime report.
    let data = std::fs::read_to_string(out.join("all_beagle_experiments_data.csv")).unwrap();
    assert_eq!(data.lines().count(), 1 + 8);
    assert!(data.lines().skip(1).all(|l| l.contains(",beagle_SSE,")));

    let improvement = std::fs::read_to_string(out.join("kernel_improvement_data.csv")).unwrap();
    assert_eq!(improvement.lines().count(), 1 + 5);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn single_kind_without_index() {
    let dir = scratch_dir("single");
    let input = fixture_csv();

    let output = run(
        &dir,
        &["-q", "-i", input.to_str().unwrap(), "-o", "site", "report", "--kind", "speedup", "--no-index"],
    );
    assert_success(&output, "bbplot report --kind speedup");
    assert!(output.stdout.is_empty(), "quiet mode printed output");

    let site = dir.join("site");
    assert!(site.join("speedup_by_dataset.html").exists());
    assert!(!site.join("cost_vs_runtime.html").exists());
    assert!(!site.join("index.html").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn config_file_in_working_directory() {
    let dir = scratch_dir("config");
    let input = fixture_csv();
    std::fs::write(
        dir.join("bbplot.toml"),
        format!(
            "[report]\ninput = {:?}\noutput-dir = \"pages\"\nhighlight-cores = 16\nrepository = \"https://example.org/perf\"\n",
            input.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = run(&dir, &["report", "-k", "sites-runtime"]);
    assert_success(&output, "bbplot report with bbplot.toml");

    let chart = std::fs::read_to_string(dir.join("pages/sites_vs_runtime_all_cores.html")).unwrap();
    assert!(chart.contains("16-core (optimal)"));
    let index = std::fs::read_to_string(dir.join("pages/index.html")).unwrap();
    assert!(index.contains("https://example.org/perf"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn index_lists_existing_reports() {
    let dir = scratch_dir("index");
    let input = fixture_csv();

    let output = run(&dir, &["-i", input.to_str().unwrap(), "report", "-k", "cost", "--no-index"]);
    assert_success(&output, "bbplot report --kind cost");

    let output = run(&dir, &["index"]);
    assert_success(&output, "bbplot index");

    let index = std::fs::read_to_string(dir.join("docs/index.html")).unwrap();
    assert!(index.contains("href=\"cost_vs_runtime.html\""));
    assert!(!index.contains("href=\"speedup_by_dataset.html\""));
    // No sites/runtime chart, so no star markers to describe.
    assert!(!index.contains("gold stars"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn plotly_bundle_inlined_from_config() {
    let dir = scratch_dir("bundle");
    let input = fixture_csv();
    std::fs::write(dir.join("plotly.min.js"), "window.Plotly = { offline: true };").unwrap();
    std::fs::write(
        dir.join("bbplot.toml"),
        format!(
            "[report]\ninput = {:?}\nplotly-bundle = \"plotly.min.js\"\n",
            input.to_str().unwrap()
        ),
    )
    .unwrap();

    let output = run(&dir, &["-q", "report", "-k", "cost", "--no-index"]);
    assert_success(&output, "bbplot report with plotly-bundle");

    let chart = std::fs::read_to_string(dir.join("docs/cost_vs_runtime.html")).unwrap();
    assert!(chart.contains("window.Plotly = { offline: true };"));
    assert!(!chart.contains("cdn.plot.ly"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn summary_prints_tables() {
    let dir = scratch_dir("summary");
    let input = fixture_csv();

    let output = run(&dir, &["--input", input.to_str().unwrap(), "summary"]);
    assert_success(&output, "bbplot summary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 8 beagle_SSE experiments"));
    assert!(stdout.contains("Found 5 native experiments"));
    assert!(stdout.contains("Summary by dataset and cores:"));
    assert!(stdout.contains("Benchmark2"));
    assert!(!dir.join("docs").exists(), "summary should not write files");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unknown_report_kind_fails() {
    let dir = scratch_dir("unknown");
    let input = fixture_csv();

    let output = run(&dir, &["-i", input.to_str().unwrap(), "report", "--kind", "histogram"]);
    assert!(!output.status.success(), "unknown report kind should have failed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown report 'histogram'"), "stderr:\n{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_input_fails() {
    let dir = scratch_dir("missing");

    let output = run(&dir, &["--input", "no/such/file.csv", "report"]);
    assert!(!output.status.success(), "missing input should have failed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no/such/file.csv"), "stderr:\n{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}
