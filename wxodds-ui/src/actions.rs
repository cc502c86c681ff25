//! Event handlers that talk to the remote service.
//!
//! Each spawns one task per user action. The dashboard signal is never
//! borrowed across an `.await`.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use wxodds_core::client::fetch_export;
use wxodds_core::error::DOWNLOAD_UNAVAILABLE;
use wxodds_core::export::ExportFormat;
use wxodds_core::{CheckOutcome, WeatherApi};

/// Run a check for the current inputs and render the result.
pub fn dispatch_check(mut state: AppState) {
    let ticket = state.dashboard.write().begin_check();
    spawn(async move {
        let client = state.client.read().clone();
        let result = client.check(&ticket.query().to_check_request()).await;
        let outcome = state.dashboard.write().finish_check(ticket, result);
        if let CheckOutcome::Failed { alert } = outcome {
            js_bridge::alert(&alert);
        }
    });
}

/// Download an export for the current city and date and save it.
pub fn dispatch_export(state: AppState, format: ExportFormat) {
    let request = state.dashboard.read().inputs.to_query().to_export_request();
    spawn(async move {
        let client = state.client.read().clone();
        match fetch_export(&client, format, &request).await {
            Ok(file) => {
                if let Err(e) = js_bridge::save_file(&file) {
                    log::error!("Saving {} failed: {:?}", file.filename, e);
                    js_bridge::alert(DOWNLOAD_UNAVAILABLE);
                }
            }
            Err(e) => {
                log::error!("{} export failed: {}", format, e);
                js_bridge::alert(DOWNLOAD_UNAVAILABLE);
            }
        }
    });
}
