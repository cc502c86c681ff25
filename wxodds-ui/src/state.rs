//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once with `use_context_provider`. Child components
//! retrieve it with `use_context::<AppState>()`. All mutable page state lives
//! inside the single `Dashboard` signal.

use crate::js_bridge;
use chrono::Local;
use dioxus::prelude::*;
use wxodds_core::{ClientConfig, Dashboard, HttpClient};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Inputs, map, loading flag and last report
    pub dashboard: Signal<Dashboard>,
    /// Client for the remote odds service
    pub client: Signal<HttpClient>,
}

impl AppState {
    /// Create a new AppState dated today, talking to the page's own origin.
    pub fn new() -> Self {
        let origin = js_bridge::page_origin().unwrap_or_default();
        let config = ClientConfig::new(&origin);
        log::info!("Using odds service at {}", config.base_url);
        Self {
            dashboard: Signal::new(Dashboard::new(Local::now().date_naive())),
            client: Signal::new(HttpClient::new(config)),
        }
    }
}
