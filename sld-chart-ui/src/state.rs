//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the dashboard's signals into one struct provided via
//! `use_context_provider`. The two control signals, `selected_site` and
//! `payload_range`, are the inputs the chart handlers subscribe to.

use dioxus::prelude::*;
use sld_figures::LaunchDashboard;
use sld_launch::site::SiteOption;
use sld_launch::{PayloadRange, SiteSelection};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded launch table (None until loaded)
    pub dashboard: Signal<Option<LaunchDashboard>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Site dropdown value
    pub selected_site: Signal<SiteSelection>,
    /// Site dropdown options
    pub site_options: Signal<Vec<SiteOption>>,
    /// Payload range slider value
    pub payload_range: Signal<PayloadRange>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(SiteSelection::All),
            site_options: Signal::new(Vec::new()),
            payload_range: Signal::new(PayloadRange::slider_extent()),
        }
    }

    /// Install a freshly loaded dashboard and reset the controls to the
    /// defaults it derives.
    pub fn install(&mut self, dashboard: LaunchDashboard) {
        self.site_options.set(dashboard.site_options());
        self.payload_range.set(dashboard.default_payload_range());
        self.selected_site.set(SiteSelection::All);
        self.dashboard.set(Some(dashboard));
        self.error_msg.set(None);
        self.loading.set(false);
    }

    pub fn fail(&mut self, message: String) {
        log::error!("[SLD] {}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }
}
