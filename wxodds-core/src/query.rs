//! User queries and the request bodies sent to the remote service.

use crate::metric::MetricId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// City used when the city field is left empty.
pub const DEFAULT_CITY: &str = "Karachi";

/// Date format used on the wire and in date inputs: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)
}

/// A single user query, rebuilt from the inputs on every action.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub city: String,
    /// Raw "lat,lon" text. Not validated here; the server parses it.
    pub pin: Option<String>,
    pub date: NaiveDate,
    pub selected: Vec<MetricId>,
}

impl Query {
    /// Build a query from raw input values.
    ///
    /// An empty city falls back to [`DEFAULT_CITY`] and blank pin text is
    /// dropped. The selection is kept as given (empty means all metrics).
    pub fn from_inputs(city: &str, pin: &str, date: NaiveDate, selected: Vec<MetricId>) -> Self {
        let city = city.trim();
        let pin = pin.trim();
        Self {
            city: if city.is_empty() {
                DEFAULT_CITY.to_string()
            } else {
                city.to_string()
            },
            pin: (!pin.is_empty()).then(|| pin.to_string()),
            date,
            selected,
        }
    }

    pub fn to_check_request(&self) -> CheckRequest {
        CheckRequest {
            city: self.city.clone(),
            date: format_date(&self.date),
            selected_metrics: self.selected.clone(),
            lat_lon: self.pin.clone(),
        }
    }

    pub fn to_export_request(&self) -> ExportRequest {
        ExportRequest {
            city: self.city.clone(),
            date: format_date(&self.date),
        }
    }
}

/// Body of `POST /check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    pub city: String,
    pub date: String,
    pub selected_metrics: Vec<MetricId>,
    /// `null` on the wire when no pin was given.
    pub lat_lon: Option<String>,
}

/// Body of `POST /download/{csv,json}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub city: String,
    pub date: String,
}
