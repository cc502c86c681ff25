//! The static table of extreme-weather metrics shown on the dashboard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one tracked extreme-weather category.
///
/// Serializes to the short identifier used in the `selected_metrics`
/// field of a `/check` request (`"hot"`, `"cold"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricId {
    Hot,
    Cold,
    Wet,
    Windy,
    Uncomfortable,
}

impl MetricId {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricId::Hot => "hot",
            MetricId::Cold => "cold",
            MetricId::Wet => "wet",
            MetricId::Windy => "windy",
            MetricId::Uncomfortable => "uncomfortable",
        }
    }

    pub const fn all() -> &'static [MetricId] {
        &[
            MetricId::Hot,
            MetricId::Cold,
            MetricId::Wet,
            MetricId::Windy,
            MetricId::Uncomfortable,
        ]
    }

    /// The definition row for this metric.
    pub fn def(&self) -> &'static MetricDef {
        // METRICS is ordered like `all()`.
        &METRICS[*self as usize]
    }
}

impl fmt::Display for MetricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricId {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let lower = value.trim().to_lowercase();
        MetricId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == lower)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown metric '{value}'. Supported metrics: hot, cold, wet, windy, uncomfortable."
                )
            })
    }
}

/// One row of the metric table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDef {
    pub id: MetricId,
    /// Key of this metric in the response `probabilities` map.
    pub response_key: &'static str,
    pub label: &'static str,
    /// CSS color used for the bar.
    pub color: &'static str,
}

/// All tracked metrics, in display order.
pub const METRICS: [MetricDef; 5] = [
    MetricDef {
        id: MetricId::Hot,
        response_key: "very_hot",
        label: "Very Hot",
        color: "#e74c3c",
    },
    MetricDef {
        id: MetricId::Cold,
        response_key: "very_cold",
        label: "Very Cold",
        color: "#3498db",
    },
    MetricDef {
        id: MetricId::Wet,
        response_key: "very_wet",
        label: "Very Wet",
        color: "#1abc9c",
    },
    MetricDef {
        id: MetricId::Windy,
        response_key: "very_windy",
        label: "Very Windy",
        color: "#9b59b6",
    },
    MetricDef {
        id: MetricId::Uncomfortable,
        response_key: "uncomfortable",
        label: "Uncomfortable",
        color: "#f39c12",
    },
];

/// Filter the metric table down to a selection, keeping table order.
///
/// An empty selection means "show everything".
pub fn select_metrics(selected: &[MetricId]) -> Vec<&'static MetricDef> {
    METRICS
        .iter()
        .filter(|def| selected.is_empty() || selected.contains(&def.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_id_as_str_roundtrip() {
        for id in MetricId::all() {
            let parsed: MetricId = id.as_str().parse().expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn unknown_metric_error() {
        let err = "humid".parse::<MetricId>().unwrap_err();
        assert!(err.to_string().contains("Unknown metric"));
    }

    #[test]
    fn def_matches_table_row() {
        for id in MetricId::all() {
            assert_eq!(id.def().id, *id);
        }
        assert_eq!(MetricId::Windy.def().response_key, "very_windy");
    }

    #[test]
    fn empty_selection_yields_all_metrics() {
        let defs = select_metrics(&[]);
        assert_eq!(defs.len(), 5);
    }

    #[test]
    fn selection_keeps_table_order() {
        let defs = select_metrics(&[MetricId::Uncomfortable, MetricId::Hot, MetricId::Wet]);
        let ids: Vec<MetricId> = defs.iter().map(|d| d.id).collect();
        assert_eq!(
            ids,
            vec![MetricId::Hot, MetricId::Wet, MetricId::Uncomfortable]
        );
    }

    #[test]
    fn serializes_as_short_identifier() {
        let json = serde_json::to_string(&vec![MetricId::Hot, MetricId::Uncomfortable]).unwrap();
        assert_eq!(json, r#"["hot","uncomfortable"]"#);
    }
}
