//! Natural-language summary of the latest report.

use dioxus::prelude::*;
use wxodds_core::view;

#[component]
pub fn SummaryCard(card: view::SummaryCard) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #E3F2FD; border-radius: 4px; border: 1px solid #90CAF9;",
            strong { "{card.headline}" }
            p { style: "margin: 4px 0 0 0;", "{card.body}" }
            if let Some(confidence) = card.confidence.as_ref() {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #555;",
                    "{confidence}"
                }
            }
        }
    }
}
