//! Extreme Weather Odds Dashboard
//!
//! Pick a city or drop a pin, pick a date, and see how likely very hot,
//! very cold, very wet, very windy and uncomfortable conditions are there,
//! as estimated by the remote odds service from NASA POWER history.
//!
//! Data flow:
//! 1. Inputs are written straight into the `Dashboard` signal.
//! 2. "Check" snapshots them into a query and POSTs it to `/check`.
//! 3. The response is stored on the dashboard and `Dashboard::view()`
//!    describes bars, trend, summary and map, which the components draw.
//! 4. Downloads POST the city and date to `/download/{csv,json}` and save
//!    the returned file.

use dioxus::prelude::*;
use wxodds_ui::actions::dispatch_check;
use wxodds_ui::components::{
    BarChart, ChartHeader, ExportButtons, LoadingSpinner, LocationInputs, MapPanel,
    MetricSelector, SummaryCard, TrendChart,
};
use wxodds_ui::js_bridge::{LEAFLET_CSS, LEAFLET_JS};
use wxodds_ui::state::AppState;

/// DOM id for the Leaflet map container div.
const MAP_CONTAINER_ID: &str = "odds-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting weather odds dashboard");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-odds-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let view = state.dashboard.read().view();

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }

        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h1 {
                style: "text-align: center; color: #2c3e50; margin-bottom: 4px;",
                "Extreme Weather Odds"
            }
            p {
                style: "text-align: center; color: #666; margin-top: 0;",
                "Chances of extreme conditions from historical NASA POWER records"
            }

            LocationInputs {}
            MetricSelector {}

            div {
                style: "display: flex; gap: 8px; align-items: center;",
                button {
                    onclick: move |_| dispatch_check(state),
                    "Check"
                }
                ExportButtons {}
            }

            MapPanel { id: MAP_CONTAINER_ID.to_string() }

            if view.loading {
                LoadingSpinner {}
            }

            if let Some(report) = view.report {
                SummaryCard { card: report.summary }

                ChartHeader {
                    title: "Probability of extreme conditions".to_string(),
                    caption: report.caption.clone(),
                    scale_note: "Share of historical days past the regional threshold (%)".to_string(),
                    swatches: report
                        .bars
                        .bars
                        .iter()
                        .map(|bar| (bar.label.to_string(), bar.color.to_string()))
                        .collect::<Vec<_>>(),
                }
                BarChart { view: report.bars }

                ChartHeader {
                    title: "Recent trend".to_string(),
                    caption: report.caption.clone(),
                    scale_note: "Monthly averages, each line scaled to its own peak".to_string(),
                }
                TrendChart { view: report.trend }
            }
        }
    }
}
