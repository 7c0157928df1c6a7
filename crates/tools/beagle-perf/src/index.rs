//! Landing page linking every generated chart and data export.

use anyhow::Result;
use std::fmt::Write as FmtWrite;
use std::path::Path;

use crate::html::{escape, write_page};

/// File name of the landing page inside the output directory.
pub const INDEX_FILE: &str = "index.html";

/// A link to a generated file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    /// File name relative to the index.
    pub href: String,
    /// Link text.
    pub label: String,
}

impl PageLink {
    /// Link to `href` labelled `label`.
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Contents of the landing page.
#[derive(Debug, Clone)]
pub struct IndexPage {
    /// Page heading and document title.
    pub title: String,
    /// Core count highlighted as the recommended configuration.
    pub highlight_cores: u32,
    /// Whether a linked chart marks the highlight core count with stars.
    pub star_markers: bool,
    /// Interactive chart pages.
    pub charts: Vec<PageLink>,
    /// CSV downloads.
    pub downloads: Vec<PageLink>,
    /// Source repository URL, if published.
    pub repository: Option<String>,
}

const STYLE: &str = r"        body {
            font-family: Arial, sans-serif;
            margin: 40px;
            background-color: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background-color: white;
            padding: 30px;
            border-radius: 10px;
            box-shadow: 0 2px 5px rgba(0,0,0,0.1);
        }
        h1 { color: #333; text-align: center; }
        h2 { color: #555; margin-top: 30px; }
        .plot-description {
            background-color: #f8f9fa;
            padding: 15px;
            border-radius: 5px;
            margin: 20px 0;
        }
        .insight {
            background-color: #e9ecef;
            padding: 10px 15px;
            border-left: 4px solid #007bff;
            margin: 10px 0;
        }
        ul { line-height: 1.8; }
        a { color: #007bff; text-decoration: none; }
        a:hover { text-decoration: underline; }";

impl IndexPage {
    /// Default page title.
    pub const DEFAULT_TITLE: &'static str = "BEAST-BEAGLE Performance Analysis";

    /// Render the page as an HTML document.
    pub fn render(&self) -> Result<String> {
        let title = escape(&self.title);
        let mut html = String::with_capacity(4096);

        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html>")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"utf-8\"/>")?;
        writeln!(html, "    <title>{title}</title>")?;
        writeln!(html, "    <style>")?;
        writeln!(html, "{STYLE}")?;
        writeln!(html, "    </style>")?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "    <div class=\"container\">")?;
        writeln!(html, "        <h1>{title}</h1>")?;

        writeln!(html, "        <div class=\"plot-description\">")?;
        writeln!(html, "            <h2>Performance Visualization</h2>")?;
        writeln!(
            html,
            "            <p>These interactive plots relate dataset complexity (unique sites per partition), \
             core count and thread configuration to runtime, speedup and cost for the native and \
             BEAGLE SSE likelihood kernels.</p>"
        )?;
        writeln!(html, "            <ul>")?;
        if self.star_markers {
            writeln!(
                html,
                "                <li>&#11088; Star markers highlight the {}-core configurations</li>",
                self.highlight_cores
            )?;
        }
        writeln!(html, "                <li>Larger circles indicate more cores</li>")?;
        writeln!(html, "                <li>Each color represents a different dataset or kernel</li>")?;
        writeln!(html, "                <li>Hover over points for detailed performance metrics</li>")?;
        writeln!(html, "            </ul>")?;
        writeln!(html, "        </div>")?;

        writeln!(html, "        <h2>Interactive Plots</h2>")?;
        if self.charts.is_empty() {
            writeln!(html, "        <p>No charts have been generated yet.</p>")?;
        } else {
            writeln!(html, "        <ul>")?;
            for link in &self.charts {
                writeln!(
                    html,
                    "            <li><a href=\"{}\">&#128202; {}</a></li>",
                    escape(&link.href),
                    escape(&link.label)
                )?;
            }
            writeln!(html, "        </ul>")?;
        }

        if self.star_markers {
            writeln!(html, "        <div class=\"insight\">")?;
            writeln!(
                html,
                "            <strong>Key Insight:</strong> The {}-core configuration (gold stars) provides the best balance \
                 between performance and computational cost across all datasets.",
                self.highlight_cores
            )?;
            writeln!(html, "        </div>")?;
        }

        if !self.downloads.is_empty() {
            writeln!(html, "        <h2>Data Download</h2>")?;
            writeln!(html, "        <ul>")?;
            for link in &self.downloads {
                writeln!(
                    html,
                    "            <li><a href=\"{}\">&#128229; {}</a></li>",
                    escape(&link.href),
                    escape(&link.label)
                )?;
            }
            writeln!(html, "        </ul>")?;
        }

        if let Some(repo) = &self.repository {
            writeln!(html, "        <h2>Repository</h2>")?;
            writeln!(
                html,
                "        <p>View the complete analysis and source code on <a href=\"{}\">GitHub</a></p>",
                escape(repo)
            )?;
        }

        writeln!(html, "    </div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")?;

        Ok(html)
    }

    /// Render and write the page as `index.html` inside `dir`.
    pub fn write(&self, dir: &Path) -> Result<()> {
        write_page(&dir.join(INDEX_FILE), &self.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> IndexPage {
        IndexPage {
            title: IndexPage::DEFAULT_TITLE.into(),
            highlight_cores: 8,
            star_markers: true,
            charts: vec![PageLink::new("sites_vs_runtime_all_cores.html", "Sites vs runtime")],
            downloads: vec![PageLink::new("all_beagle_experiments_data.csv", "All BEAGLE data")],
            repository: None,
        }
    }

    #[test]
    fn links_charts_and_downloads() {
        let html = page().render().unwrap();
        assert!(html.contains("<title>BEAST-BEAGLE Performance Analysis</title>"));
        assert!(html.contains("href=\"sites_vs_runtime_all_cores.html\""));
        assert!(html.contains("href=\"all_beagle_experiments_data.csv\""));
        assert!(html.contains("The 8-core configuration"));
        assert!(!html.contains("<h2>Repository</h2>"));
    }

    #[test]
    fn star_notes_need_a_star_chart() {
        let mut p = page();
        p.star_markers = false;
        p.charts = vec![PageLink::new("cost_vs_runtime.html", "Cost")];
        let html = p.render().unwrap();
        assert!(!html.contains("Star markers"));
        assert!(!html.contains("gold stars"));
        assert!(!html.contains("Key Insight"));
        assert!(html.contains("href=\"cost_vs_runtime.html\""));
    }

    #[test]
    fn repository_section_when_configured() {
        let mut p = page();
        p.repository = Some("https://example.org/repo".into());
        let html = p.render().unwrap();
        assert!(html.contains("<a href=\"https://example.org/repo\">GitHub</a>"));
    }

    #[test]
    fn empty_chart_list() {
        let mut p = page();
        p.charts.clear();
        p.downloads.clear();
        let html = p.render().unwrap();
        assert!(html.contains("No charts have been generated yet."));
        assert!(!html.contains("Data Download"));
    }
}
