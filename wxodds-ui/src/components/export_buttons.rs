//! CSV and JSON download buttons.

use crate::actions::dispatch_export;
use crate::state::AppState;
use dioxus::prelude::*;
use wxodds_core::export::ExportFormat;

#[component]
pub fn ExportButtons() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px;",
            button {
                onclick: move |_| dispatch_export(state, ExportFormat::Csv),
                "Download CSV"
            }
            button {
                onclick: move |_| dispatch_export(state, ExportFormat::Json),
                "Download JSON"
            }
        }
    }
}
