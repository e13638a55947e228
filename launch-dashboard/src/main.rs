//! SpaceX Launch Records Dashboard
//!
//! A site dropdown and a payload range slider drive two linked D3.js charts:
//! a pie chart of successful launches and a payload vs. outcome scatter plot.
//!
//! Data flow:
//! 1. `sld-cli fetch` caches `spacex_launch_dash.csv` at the workspace root.
//! 2. `build.rs` copies it into `OUT_DIR` and `include_str!` embeds it.
//! 3. On mount the CSV is loaded once into a `LaunchDashboard` (in-memory
//!    SQLite table plus site list and payload bounds) and the controls are
//!    reset to its defaults.
//! 4. Two memos act as the chart handlers. Each subscribes to the control
//!    signals it reads and recomputes its figure when one of them changes;
//!    an effect per memo hands the new figure to D3.js.

use dioxus::prelude::*;
use sld_chart_ui::components::{
    ChartPanel, DashboardTitle, PayloadRangeSlider, SiteDropdown, StatusBanner, StatusKind,
};
use sld_chart_ui::js_bridge;
use sld_chart_ui::state::AppState;
use sld_figures::LaunchDashboard;

/// Launch dataset embedded at compile time.
const LAUNCHES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// Chart container DOM element IDs used by D3.js to render into.
const PIE_CHART_ID: &str = "success-pie-chart";
const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load the launch table once on mount ───
    use_effect(move || {
        web_sys::console::log_1(&"[SLD] launch-dashboard mounted".into());
        match LaunchDashboard::load(LAUNCHES_CSV) {
            Ok(dashboard) => {
                state.install(dashboard);
                js_bridge::init_charts();
            }
            Err(e) => state.fail(format!(
                "{:#}. Run `sld-cli fetch` from the workspace root and rebuild.",
                e
            )),
        }
    });

    // ─── Pie handler: site dropdown -> pie figure ───
    let pie_figure = use_memo(move || {
        let site = (state.selected_site)();
        let figure = match &*state.dashboard.read() {
            Some(dashboard) => dashboard.pie_chart(&site),
            None => return None,
        };
        figure
            .map_err(|e| log::error!("[SLD] pie chart for {} failed: {}", site, e))
            .ok()
    });

    // ─── Scatter handler: site dropdown + payload slider -> scatter figure ───
    let scatter_figure = use_memo(move || {
        let site = (state.selected_site)();
        let range = (state.payload_range)();
        let figure = match &*state.dashboard.read() {
            Some(dashboard) => dashboard.scatter_chart(&site, &range),
            None => return None,
        };
        figure
            .map_err(|e| log::error!("[SLD] scatter chart for {} failed: {}", site, e))
            .ok()
    });

    // ─── Push each new figure to its chart ───
    use_effect(move || {
        if let Some(figure) = pie_figure() {
            log::info!("[SLD] rendering pie: {} slices", figure.slices.len());
            js_bridge::render_pie_chart(
                PIE_CHART_ID,
                &figure,
                &serde_json::json!({ "emptyMessage": figure.empty_message() }),
            );
        }
    });

    use_effect(move || {
        if let Some(figure) = scatter_figure() {
            log::info!("[SLD] rendering scatter: {} points", figure.points.len());
            js_bridge::render_scatter_chart(
                SCATTER_CHART_ID,
                &figure,
                &serde_json::json!({ "emptyMessage": "No launches in this payload range" }),
            );
        }
    });

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            DashboardTitle { title: DASHBOARD_TITLE.to_string() }

            if let Some(err) = (state.error_msg)() {
                StatusBanner { kind: StatusKind::Error, message: err }
            } else if (state.loading)() {
                StatusBanner { kind: StatusKind::Loading }
            } else {
                SiteDropdown {}
                br {}
                ChartPanel { id: PIE_CHART_ID.to_string() }
                br {}
                PayloadRangeSlider {}
                ChartPanel { id: SCATTER_CHART_ID.to_string() }
            }
        }
    }
}
