//! Chart descriptions for the launch dashboard.
//!
//! The two handlers here are pure functions of the loaded launch table and
//! the current control values. They never mutate anything, so the UI can
//! re-run them on every input change:
//!
//! - [`pie::success_pie_chart`]: site dropdown -> pie chart
//! - [`scatter::success_payload_scatter_chart`]: site dropdown + payload
//!   range -> scatter chart
//!
//! [`dashboard::LaunchDashboard`] bundles the loaded table with the values
//! derived from it once at startup.

pub mod dashboard;
pub mod pie;
pub mod scatter;

pub use dashboard::LaunchDashboard;
pub use pie::{PieFigure, PieSlice};
pub use scatter::ScatterFigure;
