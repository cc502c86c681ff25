//! City, pin and date inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use wxodds_core::query::{format_date, parse_date};

/// Text inputs for the location and a date picker.
///
/// The pin field is filled automatically by map clicks, which also clear
/// the city field.
#[component]
pub fn LocationInputs() -> Element {
    let mut state = use_context::<AppState>();
    let (city, pin, date) = {
        let dashboard = state.dashboard.read();
        (
            dashboard.inputs.city.clone(),
            dashboard.inputs.pin.clone(),
            format_date(&dashboard.inputs.date),
        )
    };

    let on_city_input = move |evt: Event<FormData>| {
        state.dashboard.write().inputs.city = evt.value();
    };

    let on_pin_input = move |evt: Event<FormData>| {
        state.dashboard.write().inputs.pin = evt.value();
    };

    let on_date_change = move |evt: Event<FormData>| match parse_date(&evt.value()) {
        Ok(date) => state.dashboard.write().inputs.date = date,
        Err(e) => log::warn!("Ignoring date '{}': {}", evt.value(), e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "City: "
                input {
                    r#type: "text",
                    value: "{city}",
                    placeholder: "Karachi",
                    oninput: on_city_input,
                }
            }
            label {
                style: "font-weight: bold;",
                "Pin: "
                input {
                    r#type: "text",
                    value: "{pin}",
                    placeholder: "lat,lon",
                    style: "width: 160px;",
                    oninput: on_pin_input,
                }
            }
            label {
                style: "font-weight: bold;",
                "Date: "
                input {
                    r#type: "date",
                    value: "{date}",
                    onchange: on_date_change,
                }
            }
        }
    }
}
