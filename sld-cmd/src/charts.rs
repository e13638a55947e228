//! Dropdown options and chart descriptions, printed to stdout.

use crate::fetch::load_dashboard;
use crate::DatasetArgs;
use sld_figures::LaunchDashboard;
use sld_launch::{PayloadRange, SiteSelection};

/// One `value<TAB>label` line per dropdown option.
pub fn sites_report(dashboard: &LaunchDashboard) -> String {
    dashboard
        .site_options()
        .iter()
        .map(|o| format!("{}\t{}", o.value, o.label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Slider value for the given bounds, falling back to the dataset's
/// observed payload extent for a bound that is not given.
pub fn resolve_range(dashboard: &LaunchDashboard, min: Option<f64>, max: Option<f64>) -> PayloadRange {
    let default = dashboard.default_payload_range();
    PayloadRange::new(min.unwrap_or(default.min), max.unwrap_or(default.max))
}

pub fn pie_json(dashboard: &LaunchDashboard, site: &SiteSelection) -> anyhow::Result<String> {
    let figure = dashboard.pie_chart(site)?;
    Ok(serde_json::to_string_pretty(&figure)?)
}

pub fn scatter_json(
    dashboard: &LaunchDashboard,
    site: &SiteSelection,
    range: &PayloadRange,
) -> anyhow::Result<String> {
    let figure = dashboard.scatter_chart(site, range)?;
    Ok(serde_json::to_string_pretty(&figure)?)
}

pub async fn run_sites(args: &DatasetArgs) -> anyhow::Result<()> {
    let dashboard = load_dashboard(args).await?;
    println!("{}", sites_report(&dashboard));
    Ok(())
}

pub async fn run_pie(args: &DatasetArgs, site: &SiteSelection) -> anyhow::Result<()> {
    let dashboard = load_dashboard(args).await?;
    println!("{}", pie_json(&dashboard, site)?);
    Ok(())
}

pub async fn run_scatter(
    args: &DatasetArgs,
    site: &SiteSelection,
    min: Option<f64>,
    max: Option<f64>,
) -> anyhow::Result<()> {
    let dashboard = load_dashboard(args).await?;
    let range = resolve_range(&dashboard, min, max);
    println!("{}", scatter_json(&dashboard, site, &range)?);
    Ok(())
}
