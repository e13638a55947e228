//! Dataset location and the one-time fetch-and-cache step.
//!
//! The launch CSV is downloaded once from [`DATASET_URL`] and cached verbatim
//! under [`DATASET_FILENAME`]. Later runs read the cached copy. There is no
//! retry and no checksum: a failed download is fatal for the caller.

use anyhow::Context;
use std::path::Path;

#[cfg(feature = "api")]
use log::info;
#[cfg(feature = "api")]
use reqwest::Client;

/// Where the published launch dataset lives.
pub const DATASET_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

/// Cache filename, relative to the working directory.
pub const DATASET_FILENAME: &str = "spacex_launch_dash.csv";

/// Read a cached dataset file into memory.
pub fn read_dataset(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read launch dataset {}", path.display()))
}

/// Sibling file a download is written to before it is renamed into place,
/// so an interrupted write never leaves a truncated dataset at `path`.
#[cfg(feature = "api")]
fn partial_path(path: &Path) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    path.with_file_name(name)
}

/// Make sure the dataset exists at `path`, downloading it from `url` if not.
///
/// Returns `true` when a download happened. The response body is written to
/// `path` byte for byte. A non-success HTTP status is an error so that an
/// error page is never cached as the dataset.
#[cfg(feature = "api")]
pub async fn ensure_dataset(client: &Client, path: &Path, url: &str) -> anyhow::Result<bool> {
    if path.is_file() {
        info!("[SLD] dataset: using cached {}", path.display());
        return Ok(false);
    }

    info!("[SLD] dataset: {} not found, fetching {}", path.display(), url);
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to fetch launch dataset from {}", url))?;

    if !response.status().is_success() {
        anyhow::bail!(
            "failed to fetch launch dataset from {}: HTTP {}",
            url,
            response.status()
        );
    }

    let body = response
        .bytes()
        .await
        .context("failed to read launch dataset response body")?;

    let partial = partial_path(path);
    if let Err(e) = tokio::fs::write(&partial, &body).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e)
            .with_context(|| format!("failed to write launch dataset to {}", partial.display()));
    }
    tokio::fs::rename(&partial, path)
        .await
        .with_context(|| format!("failed to move launch dataset into {}", path.display()))?;

    info!("[SLD] dataset: cached {} bytes at {}", body.len(), path.display());
    Ok(true)
}
