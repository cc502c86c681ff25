//! Shared Dioxus components and Leaflet bridge for the odds dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Leaflet, alerts and file saving
//! - `state`: `AppState` context holding the `Dashboard` and HTTP client
//! - `actions`: check and export handlers that await the remote service
//! - `components`: RSX components drawing the core view description

pub mod actions;
pub mod components;
pub mod js_bridge;
pub mod state;
