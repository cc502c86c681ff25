//! Title row above each chart: what it shows, for where and when.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Place and date the chart was answered for.
    #[props(default)]
    pub caption: String,
    /// How to read the y axis.
    #[props(default)]
    pub scale_note: String,
    /// `(label, color)` swatches drawn at the right of the title.
    #[props(default)]
    pub swatches: Vec<(String, String)>,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: flex-end; gap: 12px; margin: 16px 0 8px 0;",
            div {
                h3 {
                    style: "margin: 0; font-size: 16px;",
                    "{props.title}"
                }
                if !props.caption.is_empty() {
                    div {
                        style: "font-size: 13px; color: #34495e;",
                        "{props.caption}"
                    }
                }
                if !props.scale_note.is_empty() {
                    div {
                        style: "font-size: 11px; color: #7f8c8d;",
                        "{props.scale_note}"
                    }
                }
            }
            if !props.swatches.is_empty() {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px; font-size: 11px;",
                    for (label, color) in props.swatches.iter() {
                        span {
                            key: "{label}",
                            style: "display: inline-flex; align-items: center; gap: 4px;",
                            span {
                                style: "width: 10px; height: 10px; border-radius: 2px; background: {color};",
                            }
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
