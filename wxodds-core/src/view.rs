//! Pure rendering of dashboard state into a view description.
//!
//! Nothing here touches the DOM. The Dioxus components draw exactly what
//! these structs describe and the CLI prints them, so chart geometry and
//! fallbacks can be tested natively.

use crate::dashboard::Dashboard;
use crate::map::MapState;
use crate::metric::{select_metrics, MetricId};
use crate::query::{format_date, Query};
use crate::response::{SeriesPoint, WeatherResponse};
use serde::Serialize;

/// Pixel height of a 100% bar.
pub const BAR_MAX_HEIGHT: f64 = 180.0;

/// Number of most recent points shown on the trend chart.
pub const TREND_WINDOW: usize = 6;

// Trend chart geometry: a fixed drawing area inside the SVG margins.
pub const TREND_WIDTH: f64 = 480.0;
pub const TREND_HEIGHT: f64 = 160.0;
pub const TREND_MARGIN_LEFT: f64 = 40.0;
pub const TREND_MARGIN_RIGHT: f64 = 40.0;
pub const TREND_MARGIN_TOP: f64 = 30.0;
pub const TREND_MARGIN_BOTTOM: f64 = 40.0;

pub const TREND_PLACEHOLDER: &str = "No trend data available";
pub const NO_EXTREMES_HEADLINE: &str = "No extreme conditions expected";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub metric: MetricId,
    pub label: &'static str,
    pub color: &'static str,
    pub percent: f64,
    /// Bar height in pixels, proportional to `percent`.
    pub height: f64,
    /// Literal percentage, e.g. `72%`.
    pub value_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartView {
    pub bars: Vec<Bar>,
    pub max_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub name: &'static str,
    pub color: &'static str,
    /// Scale maximum for this series (at least 1).
    pub max: f64,
    pub points: Vec<TrendPoint>,
    /// SVG path data through `points`.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChartView {
    /// Full SVG width including margins.
    pub width: f64,
    /// Full SVG height including margins.
    pub height: f64,
    pub series: Vec<TrendSeries>,
    pub axis_labels: Vec<AxisLabel>,
    /// Set only when there is nothing to plot.
    pub placeholder: Option<String>,
    /// Always present; drawn after everything else.
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryCard {
    pub headline: String,
    pub body: String,
    pub confidence: Option<String>,
}

impl SummaryCard {
    pub fn text(&self) -> String {
        let mut text = format!("{}\n{}", self.headline, self.body);
        if let Some(confidence) = &self.confidence {
            text.push('\n');
            text.push_str(confidence);
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    /// `"{place} on {date}"` line shown under each chart title.
    pub caption: String,
    pub bars: BarChartView,
    pub trend: TrendChartView,
    pub summary: SummaryCard,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub loading: bool,
    pub map: MapState,
    /// `None` until the first successful query.
    pub report: Option<ReportView>,
}

/// Describe everything the dashboard shows for the given state.
pub fn render(state: &Dashboard) -> DashboardView {
    DashboardView {
        loading: state.is_loading(),
        map: state.map().clone(),
        report: state
            .report()
            .map(|report| render_report(&report.query, &report.response)),
    }
}

pub fn render_report(query: &Query, response: &WeatherResponse) -> ReportView {
    ReportView {
        caption: render_caption(query, response),
        bars: render_bars(response, &query.selected),
        trend: render_trend(&response.time_series),
        summary: render_summary(query, response),
    }
}

/// One bar per selected metric (all metrics when none are selected).
pub fn render_bars(response: &WeatherResponse, selected: &[MetricId]) -> BarChartView {
    let bars = select_metrics(selected)
        .into_iter()
        .map(|def| {
            let percent = response.probability(def);
            Bar {
                metric: def.id,
                label: def.label,
                color: def.color,
                percent,
                height: percent / 100.0 * BAR_MAX_HEIGHT,
                value_label: format_percent(percent),
            }
        })
        .collect();
    BarChartView {
        bars,
        max_height: BAR_MAX_HEIGHT,
    }
}

struct TrackedSeries {
    name: &'static str,
    color: &'static str,
    value: fn(&SeriesPoint) -> f64,
}

const TRACKED_SERIES: [TrackedSeries; 2] = [
    TrackedSeries {
        name: "Hot",
        color: "#e74c3c",
        value: |p| p.hot,
    },
    TrackedSeries {
        name: "Wet",
        color: "#1abc9c",
        value: |p| p.wet,
    },
];

/// Trend chart over the last [`TREND_WINDOW`] points.
///
/// Each series is scaled against its own maximum, so the two lines compare
/// by shape only.
pub fn render_trend(points: &[SeriesPoint]) -> TrendChartView {
    let window = &points[points.len().saturating_sub(TREND_WINDOW)..];
    let baseline = TREND_MARGIN_TOP + TREND_HEIGHT;

    let (series, axis_labels, placeholder) = if window.is_empty() {
        (Vec::new(), Vec::new(), Some(TREND_PLACEHOLDER.to_string()))
    } else {
        let series = TRACKED_SERIES
            .iter()
            .map(|tracked| {
                let values: Vec<f64> = window.iter().map(tracked.value).collect();
                let max = values.iter().copied().fold(1.0, f64::max);
                let points: Vec<TrendPoint> = values
                    .iter()
                    .enumerate()
                    .map(|(i, &value)| TrendPoint {
                        x: x_position(i, window.len()),
                        y: baseline - value / max * TREND_HEIGHT,
                        value,
                    })
                    .collect();
                TrendSeries {
                    name: tracked.name,
                    color: tracked.color,
                    max,
                    path: svg_path(&points),
                    points,
                }
            })
            .collect();
        let labels = window
            .iter()
            .enumerate()
            .map(|(i, p)| AxisLabel {
                x: x_position(i, window.len()),
                y: baseline + 18.0,
                text: p.date.clone(),
            })
            .collect();
        (series, labels, None)
    };

    let legend = TRACKED_SERIES
        .iter()
        .enumerate()
        .map(|(i, tracked)| LegendEntry {
            label: tracked.name,
            color: tracked.color,
            x: TREND_MARGIN_LEFT + i as f64 * 70.0,
            y: 10.0,
        })
        .collect();

    TrendChartView {
        width: TREND_MARGIN_LEFT + TREND_WIDTH + TREND_MARGIN_RIGHT,
        height: TREND_MARGIN_TOP + TREND_HEIGHT + TREND_MARGIN_BOTTOM,
        series,
        axis_labels,
        placeholder,
        legend,
    }
}

/// Horizontal center of the trend drawing area.
pub fn trend_center_x() -> f64 {
    TREND_MARGIN_LEFT + TREND_WIDTH / 2.0
}

fn x_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        trend_center_x()
    } else {
        TREND_MARGIN_LEFT + index as f64 * TREND_WIDTH / (count - 1) as f64
    }
}

fn svg_path(points: &[TrendPoint]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let cmd = if i == 0 { 'M' } else { 'L' };
            format!("{cmd}{:.2},{:.2}", p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Place and date the server answered for, falling back to what was asked.
fn answered_for(query: &Query, response: &WeatherResponse) -> (String, String) {
    let city = response
        .resolved_city()
        .map(str::to_string)
        .unwrap_or_else(|| query.city.clone());
    let date = response
        .date
        .clone()
        .unwrap_or_else(|| format_date(&query.date));
    (city, date)
}

pub fn render_caption(query: &Query, response: &WeatherResponse) -> String {
    let (city, date) = answered_for(query, response);
    format!("{city} on {date}")
}

pub fn render_summary(query: &Query, response: &WeatherResponse) -> SummaryCard {
    let (city, date) = answered_for(query, response);

    let entries: Vec<(&str, f64)> = select_metrics(&query.selected)
        .into_iter()
        .map(|def| (def.label, response.probability(def)))
        .collect();

    // First metric wins ties, matching table order.
    let top = entries
        .iter()
        .copied()
        .fold(None::<(&str, f64)>, |best, entry| match best {
            Some(b) if b.1 >= entry.1 => Some(b),
            _ => Some(entry),
        });
    let headline = match top {
        Some((label, pct)) if pct > 0.0 => {
            format!("Highest risk: {label} ({})", format_percent(pct))
        }
        _ => NO_EXTREMES_HEADLINE.to_string(),
    };

    let listed = entries
        .iter()
        .map(|(label, pct)| format!("{} {label}", format_percent(*pct)))
        .collect::<Vec<_>>()
        .join(", ");

    SummaryCard {
        headline,
        body: format!("{city} on {date}: {listed}"),
        confidence: response
            .confidence
            .map(|c| format!("Confidence: {}", format_percent((c * 10.0).round() / 10.0))),
    }
}

/// `72.0` -> `72%`, `12.5` -> `12.5%`
pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}
