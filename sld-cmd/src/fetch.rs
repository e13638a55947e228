//! Fetch-and-cache of the launch dataset.

use crate::DatasetArgs;
use anyhow::Context;
use log::info;
use sld_figures::LaunchDashboard;
use sld_launch::dataset::{ensure_dataset, read_dataset};

/// Make sure the dataset is cached, then load it.
///
/// A missing file that cannot be downloaded, or a file that is not a launch
/// dataset, is fatal.
pub async fn load_dashboard(args: &DatasetArgs) -> anyhow::Result<LaunchDashboard> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(60))
        .build()?;

    ensure_dataset(&client, &args.dataset, &args.url).await?;
    let csv_data = read_dataset(&args.dataset)?;
    LaunchDashboard::load(&csv_data)
        .with_context(|| format!("failed to load {}", args.dataset.display()))
}

/// Download the dataset if needed and report what it contains.
pub async fn run_fetch(args: &DatasetArgs) -> anyhow::Result<()> {
    let dashboard = load_dashboard(args).await?;
    let bounds = dashboard.payload_bounds();
    let launches = dashboard.database().query_launch_count(None)?;

    info!("Dataset ready: {}", args.dataset.display());
    println!(
        "{}: {} launches from {} sites, payload {} - {} kg",
        args.dataset.display(),
        launches,
        dashboard.sites().len(),
        bounds.min,
        bounds.max
    );
    Ok(())
}
