//! Dashboard state: form inputs, map, loading flag and the last report.
//!
//! A [`Dashboard`] is the single owner of everything the page mutates.
//! UI event handlers call its methods synchronously; a check is split into
//! [`Dashboard::begin_check`] and [`Dashboard::finish_check`] so the caller
//! can await the network in between without holding a borrow.

use crate::client::WeatherApi;
use crate::error::ApiError;
use crate::map::{LatLon, MapState, PLACEHOLDER_LABEL};
use crate::metric::MetricId;
use crate::query::Query;
use crate::response::WeatherResponse;
use crate::view::{self, DashboardView};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Raw values of the input controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FormInputs {
    pub city: String,
    /// Free text, `"lat,lon"` after a map click.
    pub pin: String,
    pub date: NaiveDate,
    /// Checked metrics. `BTreeSet` keeps table order.
    pub selected: BTreeSet<MetricId>,
}

impl FormInputs {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            city: String::new(),
            pin: String::new(),
            date: today,
            selected: BTreeSet::new(),
        }
    }

    pub fn set_metric(&mut self, id: MetricId, checked: bool) {
        if checked {
            self.selected.insert(id);
        } else {
            self.selected.remove(&id);
        }
    }

    /// Snapshot the inputs as a query.
    pub fn to_query(&self) -> Query {
        Query::from_inputs(
            &self.city,
            &self.pin,
            self.date,
            self.selected.iter().copied().collect(),
        )
    }
}

/// A successful check and the query that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub query: Query,
    pub response: WeatherResponse,
}

/// Handle for one dispatched check.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestTicket {
    id: u64,
    query: Query,
    /// City text as typed, before the default was applied.
    entered_city: String,
}

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The response was rendered.
    Rendered,
    /// A newer check was dispatched first; the response was dropped.
    Superseded,
    /// The check failed; show `alert` to the user.
    Failed { alert: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub inputs: FormInputs,
    map: MapState,
    loading: bool,
    next_request: u64,
    latest_request: Option<u64>,
    report: Option<Report>,
}

impl Dashboard {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            inputs: FormInputs::new(today),
            map: MapState::default(),
            loading: false,
            next_request: 0,
            latest_request: None,
            report: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }

    pub fn report(&self) -> Option<&Report> {
        self.report.as_ref()
    }

    pub fn view(&self) -> DashboardView {
        view::render(self)
    }

    /// Snapshot the inputs, enter the loading state and hand out a ticket.
    ///
    /// Any ticket handed out earlier is superseded.
    pub fn begin_check(&mut self) -> RequestTicket {
        self.next_request += 1;
        self.latest_request = Some(self.next_request);
        self.loading = true;
        let ticket = RequestTicket {
            id: self.next_request,
            query: self.inputs.to_query(),
            entered_city: self.inputs.city.trim().to_string(),
        };
        log::info!(
            "Dispatching check #{} for {} on {}",
            ticket.id,
            ticket.query.pin.as_deref().unwrap_or(&ticket.query.city),
            ticket.query.date
        );
        ticket
    }

    /// Settle a check. The loading flag is cleared whether it succeeded or
    /// failed, unless a newer check is still in flight.
    pub fn finish_check(
        &mut self,
        ticket: RequestTicket,
        result: Result<WeatherResponse, ApiError>,
    ) -> CheckOutcome {
        if self.latest_request != Some(ticket.id) {
            log::debug!("Dropping response for superseded check #{}", ticket.id);
            return CheckOutcome::Superseded;
        }
        self.loading = false;

        match result {
            Ok(response) => {
                self.apply_location(&ticket, &response);
                self.report = Some(Report {
                    query: ticket.query,
                    response,
                });
                CheckOutcome::Rendered
            }
            Err(e) => {
                log::error!("Check #{} failed: {}", ticket.id, e);
                CheckOutcome::Failed {
                    alert: e.alert_message(),
                }
            }
        }
    }

    fn apply_location(&mut self, ticket: &RequestTicket, response: &WeatherResponse) {
        let Some(coords) = response.coords else {
            return;
        };
        let label = response
            .resolved_city()
            .map(str::to_string)
            .or_else(|| (!ticket.entered_city.is_empty()).then(|| ticket.entered_city.clone()))
            .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string());
        self.map.recenter(coords);
        self.map.set_marker(coords, label);
    }

    /// Drop a pin where the map was clicked.
    ///
    /// The pin field gets the coordinates and the city field is cleared, so
    /// the next check is resolved from the pin.
    pub fn on_map_click(&mut self, position: LatLon) {
        self.map.set_marker(position, position.label());
        self.inputs.pin = position.pin_text();
        self.inputs.city.clear();
    }
}

/// Run one check to completion against `api`.
pub async fn run_check<A: WeatherApi + ?Sized>(dashboard: &mut Dashboard, api: &A) -> CheckOutcome {
    let ticket = dashboard.begin_check();
    let result = api.check(&ticket.query().to_check_request()).await;
    dashboard.finish_check(ticket, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportFormat;
    use crate::query::{CheckRequest, ExportRequest};
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// In-memory stand-in for the remote service.
    struct FakeApi {
        body: Option<&'static str>,
        status: u16,
        seen: RefCell<Vec<CheckRequest>>,
    }

    impl FakeApi {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Some(body),
                status: 200,
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(status: u16) -> Self {
            Self {
                body: None,
                status,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl WeatherApi for FakeApi {
        async fn check(&self, request: &CheckRequest) -> Result<WeatherResponse, ApiError> {
            self.seen.borrow_mut().push(request.clone());
            match self.body {
                Some(body) => WeatherResponse::from_json(body).map_err(|e| ApiError::Decode {
                    endpoint: "/check".to_string(),
                    message: e.to_string(),
                }),
                None => Err(ApiError::Status {
                    endpoint: "/check".to_string(),
                    status: self.status,
                }),
            }
        }

        async fn download(
            &self,
            format: ExportFormat,
            _request: &ExportRequest,
        ) -> Result<Vec<u8>, ApiError> {
            Err(ApiError::Status {
                endpoint: format.endpoint().to_string(),
                status: self.status,
            })
        }
    }

    fn jan1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn not_loading_before_first_check() {
        let dash = Dashboard::new(jan1());
        assert!(!dash.is_loading());
        assert!(dash.view().report.is_none());
    }

    #[test]
    fn begin_check_sets_loading() {
        let mut dash = Dashboard::new(jan1());
        let ticket = dash.begin_check();
        assert!(dash.is_loading());
        assert_eq!(ticket.query().city, "Karachi");
    }

    #[tokio::test]
    async fn loading_clears_after_success() {
        let mut dash = Dashboard::new(jan1());
        let api = FakeApi::ok(r#"{"probabilities": {"very_hot": 10}}"#);
        assert_eq!(run_check(&mut dash, &api).await, CheckOutcome::Rendered);
        assert!(!dash.is_loading());
    }

    #[tokio::test]
    async fn loading_clears_after_failure() {
        let mut dash = Dashboard::new(jan1());
        let api = FakeApi::failing(500);
        let outcome = run_check(&mut dash, &api).await;
        assert!(!dash.is_loading());
        match outcome {
            CheckOutcome::Failed { alert } => assert!(alert.contains("500")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(dash.report().is_none());
    }

    #[tokio::test]
    async fn loading_clears_after_decode_failure() {
        let mut dash = Dashboard::new(jan1());
        let api = FakeApi::ok("not json");
        let outcome = run_check(&mut dash, &api).await;
        assert!(matches!(outcome, CheckOutcome::Failed { .. }));
        assert!(!dash.is_loading());
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut dash = Dashboard::new(jan1());
        dash.inputs.city = "Lahore".to_string();
        let first = dash.begin_check();
        dash.inputs.city = "Quetta".to_string();
        let second = dash.begin_check();

        let late = WeatherResponse::from_json(r#"{"city": "Lahore", "coords": [31.5, 74.3]}"#).unwrap();
        assert_eq!(dash.finish_check(first, Ok(late)), CheckOutcome::Superseded);
        assert!(dash.is_loading(), "newer check still in flight");
        assert!(dash.report().is_none());
        assert_eq!(dash.map().marker().unwrap().label, "Karachi");

        let fresh = WeatherResponse::from_json(r#"{"city": "Quetta", "coords": [30.2, 67.0]}"#).unwrap();
        assert_eq!(dash.finish_check(second, Ok(fresh)), CheckOutcome::Rendered);
        assert!(!dash.is_loading());
        assert_eq!(dash.map().marker().unwrap().label, "Quetta");
    }

    #[test]
    fn map_click_fills_pin_and_clears_city() {
        let mut dash = Dashboard::new(jan1());
        dash.inputs.city = "Karachi".to_string();
        dash.on_map_click(LatLon::new(31.5204, 74.358749));
        assert_eq!(dash.inputs.pin, "31.52040,74.35875");
        assert_eq!(dash.inputs.city, "");
        let marker = dash.map().marker().unwrap();
        assert_eq!(marker.label, "31.52040, 74.35875");
        assert_eq!(marker.position, LatLon::new(31.5204, 74.358749));
    }

    #[test]
    fn map_click_keeps_viewport() {
        let mut dash = Dashboard::new(jan1());
        let before = dash.map().viewport();
        dash.on_map_click(LatLon::new(51.5, -0.12));
        let after = dash.map().viewport();
        assert_eq!(after, before, "a click must not move the map");
        assert_eq!(after.center, crate::map::DEFAULT_CENTER);
        assert_eq!(after.zoom, crate::map::DEFAULT_ZOOM);
    }

    #[test]
    fn response_coords_move_viewport() {
        let mut dash = Dashboard::new(jan1());
        let before = dash.map().viewport();
        let ticket = dash.begin_check();
        let resp = WeatherResponse::from_json(r#"{"coords": [31.52, 74.35]}"#).unwrap();
        dash.finish_check(ticket, Ok(resp));
        assert_ne!(dash.map().viewport(), before);
        assert_eq!(dash.map().viewport().center, LatLon::new(31.52, 74.35));
    }

    #[tokio::test]
    async fn pin_query_sends_pin_text() {
        let mut dash = Dashboard::new(jan1());
        dash.on_map_click(LatLon::new(33.6844, 73.0479));
        let api = FakeApi::ok("{}");
        run_check(&mut dash, &api).await;
        let seen = api.seen.borrow();
        assert_eq!(seen[0].lat_lon.as_deref(), Some("33.68440,73.04790"));
    }

    #[test]
    fn response_coords_move_marker_with_resolved_name() {
        let mut dash = Dashboard::new(jan1());
        dash.inputs.city = "lahore".to_string();
        let ticket = dash.begin_check();
        let resp =
            WeatherResponse::from_json(r#"{"city": "Lahore, Punjab", "coords": [31.52, 74.35]}"#).unwrap();
        dash.finish_check(ticket, Ok(resp));
        assert_eq!(dash.map().center, LatLon::new(31.52, 74.35));
        assert_eq!(dash.map().marker().unwrap().label, "Lahore, Punjab");
    }

    #[test]
    fn marker_label_falls_back_to_entered_city_then_placeholder() {
        let mut dash = Dashboard::new(jan1());
        dash.inputs.city = "Multan".to_string();
        let ticket = dash.begin_check();
        let resp = WeatherResponse::from_json(r#"{"coords": [30.19, 71.47]}"#).unwrap();
        dash.finish_check(ticket, Ok(resp.clone()));
        assert_eq!(dash.map().marker().unwrap().label, "Multan");

        dash.inputs.city.clear();
        let ticket = dash.begin_check();
        dash.finish_check(ticket, Ok(resp));
        assert_eq!(dash.map().marker().unwrap().label, PLACEHOLDER_LABEL);
    }

    #[test]
    fn response_without_coords_leaves_map_alone() {
        let mut dash = Dashboard::new(jan1());
        let before = dash.map().clone();
        let ticket = dash.begin_check();
        dash.finish_check(ticket, Ok(WeatherResponse::default()));
        assert_eq!(dash.map(), &before);
    }

    #[test]
    fn selected_metrics_follow_table_order() {
        let mut inputs = FormInputs::new(jan1());
        inputs.set_metric(MetricId::Windy, true);
        inputs.set_metric(MetricId::Hot, true);
        inputs.set_metric(MetricId::Cold, true);
        inputs.set_metric(MetricId::Cold, false);
        assert_eq!(inputs.to_query().selected, vec![MetricId::Hot, MetricId::Windy]);
    }

    #[tokio::test]
    async fn karachi_end_to_end() {
        let mut dash = Dashboard::new(jan1());
        dash.inputs.city = "Karachi".to_string();
        let api = FakeApi::ok(r#"{"probabilities": {"very_hot": 72}}"#);

        assert_eq!(run_check(&mut dash, &api).await, CheckOutcome::Rendered);

        let sent = api.seen.borrow()[0].clone();
        assert_eq!(sent.city, "Karachi");
        assert_eq!(sent.date, "2025-01-01");
        assert!(sent.selected_metrics.is_empty());
        assert_eq!(sent.lat_lon, None);

        let view = dash.view();
        assert!(!view.loading);
        let report = view.report.expect("report after success");
        assert_eq!(report.bars.bars.len(), 5);
        for bar in &report.bars.bars {
            let expected = if bar.metric == MetricId::Hot { "72%" } else { "0%" };
            assert_eq!(bar.value_label, expected, "{}", bar.label);
        }
        assert!(report.summary.text().contains("72% Very Hot"));
        assert_eq!(report.trend.placeholder.as_deref(), Some(view::TREND_PLACEHOLDER));
    }
}
