//! Shared Dioxus components and D3.js bridge for the launch dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js pie and scatter chart scripts
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: reusable RSX components (site dropdown, payload slider,
//!   chart containers, status displays)

pub mod js_bridge;
pub mod state;
pub mod components;
