//! Reusable Dioxus RSX components for the odds dashboard.

mod bar_chart;
mod chart_header;
mod export_buttons;
mod loading_spinner;
mod location_inputs;
mod map_panel;
mod metric_selector;
mod summary_card;
mod trend_chart;

pub use bar_chart::BarChart;
pub use chart_header::ChartHeader;
pub use export_buttons::ExportButtons;
pub use loading_spinner::LoadingSpinner;
pub use location_inputs::LocationInputs;
pub use map_panel::MapPanel;
pub use metric_selector::MetricSelector;
pub use summary_card::SummaryCard;
pub use trend_chart::TrendChart;
