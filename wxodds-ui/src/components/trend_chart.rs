//! Short multi-series trend chart drawn as inline SVG.

use dioxus::prelude::*;
use wxodds_core::view::TrendChartView;

#[component]
pub fn TrendChart(view: TrendChartView) -> Element {
    let view_box = format!("0 0 {} {}", view.width, view.height);
    let center_x = view.width / 2.0;
    let center_y = view.height / 2.0;

    rsx! {
        svg {
            width: "100%",
            view_box: "{view_box}",
            style: "max-width: {view.width}px; background: #fafafa; border-radius: 8px;",
            if let Some(placeholder) = view.placeholder.as_ref() {
                text {
                    x: "{center_x}",
                    y: "{center_y}",
                    text_anchor: "middle",
                    fill: "#888",
                    font_size: "14",
                    "{placeholder}"
                }
            }
            for series in view.series.iter() {
                g {
                    key: "{series.name}",
                    path {
                        d: "{series.path}",
                        fill: "none",
                        stroke: "{series.color}",
                        stroke_width: "2",
                    }
                    for point in series.points.iter() {
                        circle {
                            cx: "{point.x}",
                            cy: "{point.y}",
                            r: "3",
                            fill: "{series.color}",
                        }
                    }
                }
            }
            for label in view.axis_labels.iter() {
                text {
                    x: "{label.x}",
                    y: "{label.y}",
                    text_anchor: "middle",
                    fill: "#555",
                    font_size: "11",
                    "{label.text}"
                }
            }
            for entry in view.legend.iter() {
                LegendSwatch {
                    key: "{entry.label}",
                    label: entry.label.to_string(),
                    color: entry.color.to_string(),
                    x: entry.x,
                    y: entry.y,
                }
            }
        }
    }
}

#[component]
fn LegendSwatch(label: String, color: String, x: f64, y: f64) -> Element {
    let text_x = x + 16.0;
    let text_y = y + 10.0;
    rsx! {
        rect {
            x: "{x}",
            y: "{y}",
            width: "12",
            height: "12",
            fill: "{color}",
        }
        text {
            x: "{text_x}",
            y: "{text_y}",
            font_size: "12",
            fill: "#333",
            "{label}"
        }
    }
}
