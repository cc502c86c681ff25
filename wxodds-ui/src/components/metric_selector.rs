//! Checkboxes for the metrics to chart.

use crate::state::AppState;
use dioxus::prelude::*;
use wxodds_core::metric::{MetricId, METRICS};

/// One checkbox per metric. Leaving every box unchecked charts all of them.
#[component]
pub fn MetricSelector() -> Element {
    let state = use_context::<AppState>();
    let selected = state.dashboard.read().inputs.selected.clone();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            span { style: "font-weight: bold;", "Metrics: " }
            for def in METRICS.iter() {
                MetricCheckbox {
                    key: "{def.id}",
                    id: def.id,
                    label: def.label.to_string(),
                    color: def.color.to_string(),
                    checked: selected.contains(&def.id),
                }
            }
        }
    }
}

#[component]
fn MetricCheckbox(id: MetricId, label: String, color: String, checked: bool) -> Element {
    let mut state = use_context::<AppState>();

    let on_change = move |evt: Event<FormData>| {
        state.dashboard.write().inputs.set_metric(id, evt.checked());
    };

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 4px; border-left: 4px solid {color}; padding-left: 4px;",
            input {
                r#type: "checkbox",
                value: "{id}",
                checked: checked,
                onchange: on_change,
            }
            "{label}"
        }
    }
}
