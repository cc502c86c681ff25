//! Core library for the extreme weather odds dashboard.
//!
//! This crate provides:
//! - `metric`: the static table of tracked extreme-weather metrics
//! - `query` / `response`: the `/check` and `/download/*` wire formats
//! - `map`: owned map viewport and single-marker state
//! - `view`: pure rendering of dashboard state into a view description
//! - `dashboard`: the dashboard state machine driven by UI events
//! - `client`: the `WeatherApi` trait and its `reqwest` implementation
//!
//! Everything here is free of browser APIs so it can be shared by the
//! Dioxus web app and the native CLI, and tested natively.

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod map;
pub mod metric;
pub mod query;
pub mod response;
pub mod view;

pub use client::{HttpClient, WeatherApi};
pub use config::ClientConfig;
pub use dashboard::{CheckOutcome, Dashboard, RequestTicket};
pub use error::ApiError;
pub use metric::{MetricDef, MetricId, METRICS};
