//! Reusable Dioxus RSX components for the launch dashboard.

mod chart_panel;
mod dashboard_title;
mod payload_range_slider;
mod site_dropdown;
mod status_banner;

pub use chart_panel::ChartPanel;
pub use dashboard_title::DashboardTitle;
pub use payload_range_slider::PayloadRangeSlider;
pub use site_dropdown::SiteDropdown;
pub use status_banner::{StatusBanner, StatusKind};
