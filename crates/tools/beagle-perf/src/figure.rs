//! A typed subset of the Plotly figure schema.
//!
//! Only the attributes the reports use are modelled. Every optional field is
//! omitted from the serialized JSON when unset so that Plotly applies its own
//! defaults.

// Field names mirror Plotly attribute names.
#![allow(missing_docs)]

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A value that is either shared by all points or given per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PerPoint<T> {
    /// Same value for every point.
    Scalar(T),
    /// One value per point.
    Array(Vec<T>),
}

/// Font settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Font {
    /// Font of the given size and colour.
    pub fn sized(size: f64, color: impl Into<String>) -> Self {
        Self {
            family: None,
            size: Some(size),
            color: Some(color.into()),
        }
    }
}

/// Marker outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub width: f64,
    pub color: String,
}

impl Line {
    /// Solid outline.
    pub fn new(width: f64, color: impl Into<String>) -> Self {
        Self {
            width,
            color: color.into(),
        }
    }
}

/// Scatter marker style.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<PerPoint<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<PerPoint<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
}

/// A single scatter trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub mode: String,
    pub name: String,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub customdata: Vec<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legendgroup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
}

impl Trace {
    /// Markers-only scatter trace named `name`.
    pub fn scatter(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            kind: "scatter",
            x,
            y,
            mode: "markers".into(),
            name: name.into(),
            marker: Marker::default(),
            text: Vec::new(),
            textposition: None,
            hovertemplate: None,
            hoverinfo: None,
            customdata: Vec::new(),
            showlegend: None,
            legendgroup: None,
            xaxis: None,
            yaxis: None,
        }
    }

    #[must_use]
    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn text(mut self, text: Vec<String>) -> Self {
        self.text = text;
        self
    }

    #[must_use]
    pub fn hover(mut self, template: impl Into<String>) -> Self {
        self.hovertemplate = Some(template.into());
        self
    }

    #[must_use]
    pub fn customdata(mut self, rows: Vec<Vec<Value>>) -> Self {
        self.customdata = rows;
        self
    }

    #[must_use]
    pub fn legend_group(mut self, group: impl Into<String>, show: bool) -> Self {
        self.legendgroup = Some(group.into());
        self.showlegend = Some(show);
        self
    }

    /// Place the trace on the subplot with 1-based index `n`.
    #[must_use]
    pub fn subplot(mut self, n: usize) -> Self {
        self.xaxis = Some(axis_ref("x", n));
        self.yaxis = Some(axis_ref("y", n));
        self
    }
}

/// Axis reference for subplot `n`: `x`, `x2`, `x3`, ...
pub fn axis_ref(prefix: &str, n: usize) -> String {
    if n <= 1 {
        prefix.to_string()
    } else {
        format!("{prefix}{n}")
    }
}

/// Layout key for subplot `n`'s axis: `xaxis`, `xaxis2`, ...
pub fn axis_key(prefix: &str, n: usize) -> String {
    format!("{}axis{}", prefix, if n <= 1 { String::new() } else { n.to_string() })
}

/// Chart or axis title.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Title {
    /// Plain title text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Title centred above the plot area.
    pub fn centered(text: impl Into<String>, size: f64) -> Self {
        Self {
            text: text.into(),
            x: Some(0.5),
            xanchor: Some("center".into()),
            font: Some(Font {
                size: Some(size),
                ..Font::default()
            }),
        }
    }
}

/// Axis settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Visible range; in log10 units for log axes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zerolinecolor: Option<String>,
}

impl Axis {
    /// Linear axis with a light grid and no zero line.
    pub fn linear(title: impl Into<String>) -> Self {
        Self {
            title: Some(Title::new(title)),
            gridcolor: Some("lightgray".into()),
            showgrid: Some(true),
            zeroline: Some(false),
            ..Self::default()
        }
    }

    /// Logarithmic axis with a light grid and no zero line.
    pub fn log(title: impl Into<String>) -> Self {
        Self {
            kind: Some("log".into()),
            ..Self::linear(title)
        }
    }

    #[must_use]
    pub fn range(mut self, lo: f64, hi: f64) -> Self {
        self.range = Some([lo, hi]);
        self
    }

    #[must_use]
    pub fn tickvals(mut self, vals: Vec<f64>) -> Self {
        self.tickvals = Some(vals);
        self
    }
}

/// Legend box placement and style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub xanchor: String,
    pub yanchor: String,
    pub bgcolor: String,
    pub bordercolor: String,
    pub borderwidth: f64,
}

impl Legend {
    /// Boxed legend in the top-left corner of the plot area.
    pub fn top_left() -> Self {
        Self {
            x: 0.02,
            y: 0.98,
            xanchor: "left".into(),
            yanchor: "top".into(),
            bgcolor: "rgba(255, 255, 255, 0.9)".into(),
            bordercolor: "black".into(),
            borderwidth: 1.0,
        }
    }
}

/// Free text placed on the chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowhead: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Annotation {
    /// Text at data coordinates without an arrow.
    ///
    /// On log axes Plotly expects annotation coordinates in log10 units.
    pub fn text(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            ..Self::default()
        }
    }

    /// Text pointing at a data point with an arrow.
    pub fn arrow(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            showarrow: true,
            arrowhead: Some(2),
            ..Self::text(x, y, text)
        }
    }

    /// Position relative to the given axis references, e.g. `paper` or
    /// `x2 domain`.
    #[must_use]
    pub fn refs(mut self, xref: impl Into<String>, yref: impl Into<String>) -> Self {
        self.xref = Some(xref.into());
        self.yref = Some(yref.into());
        self
    }

    #[must_use]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

/// Subplot grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    pub rows: usize,
    pub columns: usize,
    pub pattern: String,
}

/// Figure layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    /// Axes of subplots beyond the first, keyed `xaxis2`, `yaxis2`, ...
    #[serde(flatten)]
    pub extra_axes: BTreeMap<String, Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<Grid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub plot_bgcolor: String,
    pub paper_bgcolor: String,
    pub hovermode: String,
    pub width: u32,
    pub height: u32,
    pub font: Font,
}

impl Layout {
    /// White 1200x800 layout with the report font.
    pub fn new(title: Title, xaxis: Axis, yaxis: Axis) -> Self {
        Self {
            title,
            xaxis,
            yaxis,
            extra_axes: BTreeMap::new(),
            grid: None,
            annotations: Vec::new(),
            legend: Some(Legend::top_left()),
            plot_bgcolor: "white".into(),
            paper_bgcolor: "white".into(),
            hovermode: "closest".into(),
            width: 1200,
            height: 800,
            font: Font {
                family: Some("Arial".into()),
                size: Some(12.0),
                color: None,
            },
        }
    }
}

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// Empty figure with `layout`.
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    /// Append a trace.
    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    /// Append an annotation.
    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.layout.annotations.push(annotation);
    }
}
