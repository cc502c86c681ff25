//! Plain-text rendering of a report for the terminal.

use std::fmt::Write;
use wxodds_core::dashboard::Report;
use wxodds_core::view::{render_report, BarChartView, TREND_WINDOW};

/// Width of a 100% bar in characters.
const BAR_WIDTH: usize = 40;

pub fn report_text(report: &Report) -> String {
    let view = render_report(&report.query, &report.response);
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.summary.text());
    out.push('\n');
    out.push_str(&bars_text(&view.bars));
    out.push('\n');

    let series = &report.response.time_series;
    let window = &series[series.len().saturating_sub(TREND_WINDOW)..];
    if window.is_empty() {
        if let Some(placeholder) = &view.trend.placeholder {
            let _ = writeln!(out, "{placeholder}");
        }
    } else {
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>8} {:>8} {:>8}",
            "month", "hot", "cold", "wet", "windy"
        );
        for p in window {
            let _ = writeln!(
                out,
                "{:<10} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
                p.date, p.hot, p.cold, p.wet, p.windy
            );
        }
    }
    out
}

pub fn bars_text(view: &BarChartView) -> String {
    let mut out = String::new();
    for bar in &view.bars {
        let filled = (bar.percent.clamp(0.0, 100.0) / 100.0 * BAR_WIDTH as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:<14} {:<width$} {}",
            bar.label,
            "#".repeat(filled),
            bar.value_label,
            width = BAR_WIDTH
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use wxodds_core::query::Query;
    use wxodds_core::response::WeatherResponse;
    use wxodds_core::view::render_bars;

    fn report(body: &str) -> Report {
        Report {
            query: Query::from_inputs(
                "Karachi",
                "",
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                vec![],
            ),
            response: WeatherResponse::from_json(body).unwrap(),
        }
    }

    #[test]
    fn bars_scale_to_width() {
        let resp = WeatherResponse::from_json(r#"{"probabilities": {"very_hot": 50}}"#).unwrap();
        let text = bars_text(&render_bars(&resp, &[]));
        let hot = text.lines().next().unwrap();
        assert!(hot.starts_with("Very Hot"));
        assert_eq!(hot.matches('#').count(), BAR_WIDTH / 2);
        assert!(hot.ends_with("50%"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn report_includes_summary_and_trend_table() {
        let text = report_text(&report(
            r#"{"probabilities": {"very_hot": 72},
                "time_series": [{"date": "2024-12", "hot": 24.5, "cold": 24.5, "wet": 0.2, "windy": 3.1}]}"#,
        ));
        assert!(text.contains("72% Very Hot"));
        assert!(text.contains("2024-12"));
        assert!(text.contains("3.1"));
    }

    #[test]
    fn report_without_series_shows_placeholder() {
        let text = report_text(&report("{}"));
        assert!(text.contains(wxodds_core::view::TREND_PLACEHOLDER));
    }
}
