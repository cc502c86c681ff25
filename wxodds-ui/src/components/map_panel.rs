//! Leaflet map with a single marker.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use wxodds_core::map::LatLon;

/// Props for MapPanel
#[derive(Props, Clone, PartialEq)]
pub struct MapPanelProps {
    /// The DOM id for the map container (Leaflet renders into this)
    pub id: String,
    #[props(default = 320)]
    pub height: u32,
}

/// Map container kept in step with the dashboard's map state.
///
/// Clicks on the map drop a pin through `Dashboard::on_map_click`.
#[component]
pub fn MapPanel(props: MapPanelProps) -> Element {
    let mut state = use_context::<AppState>();
    let container_id = props.id.clone();

    // Create the map once and feed its clicks back into the dashboard.
    use_future(move || {
        let container_id = container_id.clone();
        async move {
            let initial = (*state.dashboard.peek()).map().clone();
            let mut clicks = js_bridge::mount_map(&container_id, &initial);
            while let Ok([lat, lon]) = clicks.recv::<[f64; 2]>().await {
                state.dashboard.write().on_map_click(LatLon::new(lat, lon));
            }
            log::warn!("Map click channel closed");
        }
    });

    // Viewport and marker reach Leaflet separately: a click moves the pin
    // but must not snap the view back over the user's pan or zoom.
    let viewport = use_memo(move || (*state.dashboard.read()).map().viewport());
    use_effect(move || {
        js_bridge::apply_viewport(&viewport.read());
    });
    let marker = use_memo(move || (*state.dashboard.read()).map().marker().cloned());
    use_effect(move || {
        js_bridge::apply_marker(marker.read().as_ref());
    });

    let style = format!(
        "height: {}px; width: 100%; border-radius: 8px; margin: 8px 0;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
