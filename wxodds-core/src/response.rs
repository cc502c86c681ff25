//! The `/check` response body.
//!
//! Every field is optional on the wire and malformed values degrade to
//! defaults instead of failing the whole decode: a missing or non-numeric
//! probability reads as 0, a bad `coords` pair reads as absent, and
//! time-series entries that are not objects are skipped.

use crate::map::LatLon;
use crate::metric::MetricDef;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// One month of the trend series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub hot: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub wet: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub cold: f64,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub windy: f64,
}

/// Decoded response of `POST /check`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct WeatherResponse {
    #[serde(default, deserialize_with = "lenient_coords")]
    pub coords: Option<LatLon>,
    /// Location name resolved by the server.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub city: Option<String>,
    /// Echo of the queried date.
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_map")]
    pub probabilities: BTreeMap<String, Value>,
    #[serde(default, deserialize_with = "lenient_points")]
    pub time_series: Vec<SeriesPoint>,
    /// Server confidence in the estimate, 0-100.
    #[serde(default, deserialize_with = "lenient_opt_f64")]
    pub confidence: Option<f64>,
}

impl WeatherResponse {
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Percentage for a metric, 0 when missing or not a number.
    pub fn probability(&self, def: &MetricDef) -> f64 {
        self.probabilities
            .get(def.response_key)
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Server-resolved city name, ignoring blanks.
    pub fn resolved_city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(Value::deserialize(d)?.as_f64().unwrap_or(0.0))
}

fn lenient_opt_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(d)?.as_f64())
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_coords<'de, D: Deserializer<'de>>(d: D) -> Result<Option<LatLon>, D::Error> {
    let value = Value::deserialize(d)?;
    let pair = value.as_array().filter(|a| a.len() == 2);
    Ok(pair.and_then(|a| {
        Some(LatLon {
            lat: a[0].as_f64()?,
            lon: a[1].as_f64()?,
        })
    }))
}

fn lenient_map<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<String, Value>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Object(map) => map.into_iter().collect(),
        _ => BTreeMap::new(),
    })
}

fn lenient_points<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<SeriesPoint>, D::Error> {
    let Value::Array(items) = Value::deserialize(d)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}
