//! Probability bar chart.

use dioxus::prelude::*;
use wxodds_core::view::BarChartView;

/// Draws one bar per entry of the view, tallest at 100%.
#[component]
pub fn BarChart(view: BarChartView) -> Element {
    let plot_height = view.max_height + 24.0;

    rsx! {
        div {
            style: "display: flex; align-items: flex-end; justify-content: center; gap: 16px; height: {plot_height}px; padding: 8px; border-bottom: 1px solid #ccc;",
            for bar in view.bars.iter() {
                div {
                    key: "{bar.metric}",
                    style: "display: flex; flex-direction: column; align-items: center; width: 72px;",
                    span {
                        style: "font-size: 12px; font-weight: bold; margin-bottom: 4px;",
                        "{bar.value_label}"
                    }
                    div {
                        title: "{bar.label}: {bar.value_label}",
                        style: "width: 44px; height: {bar.height}px; background: {bar.color}; border-radius: 4px 4px 0 0;",
                    }
                }
            }
        }
        div {
            style: "display: flex; justify-content: center; gap: 16px; padding: 4px 8px;",
            for bar in view.bars.iter() {
                span {
                    key: "{bar.metric}",
                    style: "width: 72px; text-align: center; font-size: 12px; color: #555;",
                    "{bar.label}"
                }
            }
        }
    }
}
