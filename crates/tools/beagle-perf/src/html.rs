//! Standalone HTML pages embedding a Plotly figure.

use anyhow::{Context, Result, ensure};
use std::fmt::{self, Write as FmtWrite};
use std::path::Path;

use crate::figure::Figure;

/// Default plotly.js bundle loaded by generated pages.
pub const DEFAULT_PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Where chart pages load plotly.js from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlotlySource {
    /// Referenced by URL; pages need network access to render.
    Url(String),
    /// Library source embedded in every page, viewable offline.
    Inline(String),
}

impl PlotlySource {
    /// Read a local plotly.js bundle for inlining.
    pub fn from_file(path: &Path) -> Result<Self> {
        let js = std::fs::read_to_string(path)
            .with_context(|| format!("reading plotly.js bundle {}", path.display()))?;
        ensure!(!js.trim().is_empty(), "plotly.js bundle {} is empty", path.display());
        Ok(PlotlySource::Inline(js))
    }
}

impl Default for PlotlySource {
    fn default() -> Self {
        PlotlySource::Url(DEFAULT_PLOTLY_JS.into())
    }
}

impl fmt::Display for PlotlySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotlySource::Url(url) => f.write_str(url),
            PlotlySource::Inline(js) => write!(f, "inline ({} bytes)", js.len()),
        }
    }
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serialize `figure` as JSON that is safe to inline in a `<script>` block.
fn figure_json(figure: &Figure) -> Result<String> {
    let json = serde_json::to_string(figure).context("serializing figure to JSON")?;
    Ok(json.replace("</", "<\\/"))
}

/// Render a complete HTML document showing `figure`.
pub fn render_figure_page(figure: &Figure, title: &str, plotly: &PlotlySource) -> Result<String> {
    let json = figure_json(figure)?;
    let bundle_len = match plotly {
        PlotlySource::Url(_) => 0,
        PlotlySource::Inline(js) => js.len(),
    };
    let mut html = String::with_capacity(json.len() + bundle_len + 1024);

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\"/>")?;
    writeln!(html, "<title>{}</title>", escape(title))?;
    match plotly {
        PlotlySource::Url(src) => {
            writeln!(html, "<script src=\"{}\" charset=\"utf-8\"></script>", escape(src))?;
        }
        PlotlySource::Inline(js) => {
            writeln!(html, "<script type=\"text/javascript\">")?;
            writeln!(html, "{}", js.replace("</script", "<\\/script"))?;
            writeln!(html, "</script>")?;
        }
    }
    writeln!(html, "</head>")?;
    writeln!(html, "<body style=\"margin:0;background:white;\">")?;
    writeln!(
        html,
        "<div id=\"chart\" style=\"width:{}px;height:{}px;\"></div>",
        figure.layout.width, figure.layout.height
    )?;
    writeln!(html, "<script type=\"text/javascript\">")?;
    writeln!(html, "var figure = {json};")?;
    writeln!(
        html,
        "Plotly.newPlot(\"chart\", figure.data, figure.layout, {{\"responsive\": true}});"
    )?;
    writeln!(html, "</script>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

/// Write `contents` to `path`, creating parent directories as needed.
pub fn write_page(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Render `figure` and write it to `path`.
pub fn write_figure(path: &Path, figure: &Figure, title: &str, plotly: &PlotlySource) -> Result<()> {
    let html = render_figure_page(figure, title, plotly)?;
    write_page(path, &html)
}
