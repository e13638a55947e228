//! Query result model structs.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// Total successful launches for one launch site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSuccess {
    pub launch_site: String,
    /// Sum of the outcome class over the site's launches.
    pub successes: u32,
}

/// Number of launches with a given outcome class at one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    /// 1 = success, 0 = failure
    pub class: u8,
    pub count: u32,
}

/// Smallest and largest payload mass in the table, in kg.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}
