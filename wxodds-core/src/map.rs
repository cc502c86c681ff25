//! Map viewport and marker state.
//!
//! The browser map (Leaflet) is only a projection of [`MapState`]: the
//! JS bridge removes whatever marker it drew last before drawing the one
//! held here, so there is never more than one marker on the page.

use serde::{Deserialize, Serialize};

/// Default map center: Karachi.
pub const DEFAULT_CENTER: LatLon = LatLon {
    lat: 24.8607,
    lon: 67.0011,
};
pub const DEFAULT_LABEL: &str = "Karachi";
pub const DEFAULT_ZOOM: u8 = 6;

/// Label used when neither the server nor the user named the location.
pub const PLACEHOLDER_LABEL: &str = "Selected location";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Pin field text, `"lat,lon"` at 5 decimals.
    pub fn pin_text(&self) -> String {
        format!("{:.5},{:.5}", self.lat, self.lon)
    }

    /// Marker label for a bare coordinate.
    pub fn label(&self) -> String {
        format!("{:.5}, {:.5}", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: LatLon,
    pub label: String,
}

/// Where the map should look.
///
/// `generation` bumps on every recenter, so re-applying the same center
/// after the user panned away still counts as a change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: LatLon,
    pub zoom: u8,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapState {
    pub center: LatLon,
    pub zoom: u8,
    generation: u64,
    marker: Option<Marker>,
}

impl Default for MapState {
    fn default() -> Self {
        let mut map = Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            generation: 0,
            marker: None,
        };
        map.set_marker(DEFAULT_CENTER, DEFAULT_LABEL);
        map
    }
}

impl MapState {
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Replace the current marker, dropping the old one.
    pub fn set_marker(&mut self, position: LatLon, label: impl Into<String>) {
        self.marker = Some(Marker {
            position,
            label: label.into(),
        });
    }

    /// The viewport alone. Marker changes leave it untouched, so the browser
    /// map only moves when this value changes.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            center: self.center,
            zoom: self.zoom,
            generation: self.generation,
        }
    }

    pub fn recenter(&mut self, center: LatLon) {
        self.center = center;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_karachi_with_default_marker() {
        let map = MapState::default();
        assert_eq!(map.center, DEFAULT_CENTER);
        let marker = map.marker().unwrap();
        assert_eq!(marker.position, DEFAULT_CENTER);
        assert_eq!(marker.label, "Karachi");
    }

    #[test]
    fn set_marker_replaces_previous_marker() {
        let mut map = MapState::default();
        map.set_marker(LatLon::new(31.5, 74.3), "Lahore");
        map.set_marker(LatLon::new(33.7, 73.0), "Islamabad");
        let marker = map.marker().unwrap();
        assert_eq!(marker.label, "Islamabad");
        assert_eq!(marker.position, LatLon::new(33.7, 73.0));
    }

    #[test]
    fn set_marker_leaves_viewport_alone() {
        let mut map = MapState::default();
        let before = map.viewport();
        map.set_marker(LatLon::new(51.5, -0.12), "London");
        assert_eq!(map.viewport(), before);
    }

    #[test]
    fn recenter_on_same_center_is_still_a_new_viewport() {
        let mut map = MapState::default();
        let before = map.viewport();
        map.recenter(DEFAULT_CENTER);
        let after = map.viewport();
        assert_eq!(after.center, before.center);
        assert_ne!(after, before);
    }

    #[test]
    fn recenter_leaves_marker_alone() {
        let mut map = MapState::default();
        map.recenter(LatLon::new(0.0, 0.0));
        assert_eq!(map.center, LatLon::new(0.0, 0.0));
        assert_eq!(map.marker().unwrap().label, "Karachi");
    }

    #[test]
    fn pin_text_uses_five_decimals() {
        let p = LatLon::new(24.860734, -67.0);
        assert_eq!(p.pin_text(), "24.86073,-67.00000");
        assert_eq!(p.label(), "24.86073, -67.00000");
    }
}
