//! Typed wrappers around browser and Leaflet interop.
//!
//! Leaflet is loaded from a CDN by the app shell and used as a global `L`.
//! The map is created by a `document::eval` script that stays connected so
//! clicks can be sent back to Rust. Viewport and marker updates are parked
//! in `window.__wxMapPending` (latest value wins) and applied as soon as the
//! map exists, so nothing polls while Leaflet is still loading.

use dioxus::document::{self, Eval};
use wasm_bindgen::{JsCast, JsValue};
use wxodds_core::export::ExportFile;
use wxodds_core::map::{MapState, Marker, Viewport};

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('wxodds JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Origin of the page serving the app, e.g. `https://odds.example.org`.
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Blocking alert box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Create the Leaflet map once `L` and the container exist.
///
/// The returned `Eval` yields `[lat, lng]` for every map click; keep it
/// alive for as long as clicks should be delivered.
pub fn mount_map(container_id: &str, initial: &MapState) -> Eval {
    document::eval(&mount_script(container_id, initial))
}

fn mount_script(container_id: &str, initial: &MapState) -> String {
    let viewport_json = to_json(&initial.viewport());
    let marker_json = to_json(&initial.marker());
    format!(
        r#"
        await new Promise(function(resolve) {{
            var poll = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    resolve();
                }}
            }}, 100);
        }});
        var map = L.map('{container_id}');
        L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            maxZoom: 18,
            attribution: '&copy; OpenStreetMap contributors'
        }}).addTo(map);
        var marker = null;
        window.__wxMap = {{
            viewport: function(v) {{
                map.setView([v.center.lat, v.center.lon], v.zoom);
            }},
            marker: function(m) {{
                if (marker) {{
                    map.removeLayer(marker);
                    marker = null;
                }}
                if (m) {{
                    // Text node: labels come from user input and the server.
                    var popup = document.createElement('span');
                    popup.textContent = m.label;
                    marker = L.marker([m.position.lat, m.position.lon])
                        .addTo(map)
                        .bindPopup(popup)
                        .openPopup();
                }}
            }}
        }};
        var pending = window.__wxMapPending || {{}};
        delete window.__wxMapPending;
        window.__wxMap.viewport('viewport' in pending ? pending.viewport : {viewport_json});
        window.__wxMap.marker('marker' in pending ? pending.marker : {marker_json});
        map.on('click', function(e) {{
            dioxus.send([e.latlng.lat, e.latlng.lng]);
        }});
        console.log('wxodds map initialized');
        "#,
    )
}

/// Move the map to a viewport. Marker untouched.
pub fn apply_viewport(viewport: &Viewport) {
    call_js(&viewport_script(viewport));
}

/// Replace the single map marker. Viewport untouched.
pub fn apply_marker(marker: Option<&Marker>) {
    call_js(&marker_script(marker));
}

fn viewport_script(viewport: &Viewport) -> String {
    map_update_script("viewport", &to_json(viewport))
}

fn marker_script(marker: Option<&Marker>) -> String {
    map_update_script("marker", &to_json(&marker))
}

fn map_update_script(kind: &str, json: &str) -> String {
    format!(
        r#"
        if (window.__wxMap) {{
            window.__wxMap.{kind}({json});
        }} else {{
            window.__wxMapPending = window.__wxMapPending || {{}};
            window.__wxMapPending.{kind} = {json};
        }}
        "#,
    )
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        log::warn!("Could not serialize map update: {}", e);
        "null".to_string()
    })
}

/// Save a downloaded file through a temporary object URL.
pub fn save_file(file: &ExportFile) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(file.mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&file.filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url)?;
    log::info!("Saved {}", file.filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wxodds_core::map::LatLon;

    #[test]
    fn marker_update_never_moves_the_map() {
        let mut map = MapState::default();
        map.set_marker(LatLon::new(31.5, 74.3), "Lahore");
        let script = marker_script(map.marker());
        assert!(script.contains("__wxMap.marker("));
        assert!(!script.contains("viewport"));
        assert!(!script.contains("setView"));
        assert!(!script.contains("setInterval"));
    }

    #[test]
    fn viewport_update_carries_center_and_zoom_only() {
        let mut map = MapState::default();
        map.recenter(LatLon::new(51.5, -0.12));
        let script = viewport_script(&map.viewport());
        assert!(script.contains("__wxMap.viewport("));
        assert!(script.contains("51.5"));
        assert!(script.contains("\"zoom\":6"));
        assert!(!script.contains("__wxMap.marker"));
        assert!(!script.contains("setInterval"));
    }

    #[test]
    fn updates_before_mount_are_parked_not_polled() {
        let script = marker_script(None);
        assert!(script.contains("window.__wxMapPending.marker = null"));
        let mount = mount_script("map", &MapState::default());
        assert!(mount.contains("window.__wxMapPending"));
        assert!(mount.contains("delete window.__wxMapPending"));
    }

    #[test]
    fn marker_label_is_shown_as_text() {
        let mut map = MapState::default();
        map.set_marker(LatLon::new(0.0, 0.0), "<img src=x onerror=alert(1)>");
        let script = marker_script(map.marker());
        // The label only travels as a JSON string literal.
        assert!(script.contains("\"label\":\"<img src=x onerror=alert(1)>\""));
        let mount = mount_script("map", &map);
        assert!(mount.contains("popup.textContent = m.label"));
        assert!(mount.contains(".bindPopup(popup)"));
        assert!(!mount.contains("bindPopup(m.label"));
    }
}
