//! Performance analysis and report rendering for BEAST/BEAGLE benchmarks.
//!
//! Loads the benchmark results table, derives summary columns, groups runs
//! by dataset, core count and thread configuration, and renders interactive
//! Plotly scatter charts as standalone HTML pages alongside CSV exports and
//! a landing page linking them together.

pub mod analysis;
pub mod export;
pub mod figure;
pub mod html;
pub mod index;
pub mod output;
pub mod record;
pub mod report;
pub mod scale;
pub mod style;
