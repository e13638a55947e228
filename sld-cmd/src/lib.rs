//! Command implementations for the launch dashboard CLI.
//!
//! Every command first makes sure the dataset is cached locally (downloading
//! it once if needed), then loads it and runs the same chart handlers the
//! web dashboard uses.

use clap::{Args, Subcommand};
use sld_launch::dataset::{DATASET_FILENAME, DATASET_URL};
use sld_launch::SiteSelection;
use std::path::PathBuf;

pub mod charts;
pub mod fetch;

#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Path of the cached launch dataset CSV
    #[arg(short = 'd', long, default_value = DATASET_FILENAME)]
    pub dataset: PathBuf,

    /// URL to download the dataset from when the cache is missing
    #[arg(long, default_value = DATASET_URL)]
    pub url: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Download the launch dataset unless it is already cached
    Fetch {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// List the launch site dropdown options
    Sites {
        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Print the success pie chart for a site selection as JSON
    Pie {
        /// `ALL` or a launch site name
        #[arg(short, long, default_value = "ALL")]
        site: SiteSelection,

        #[command(flatten)]
        dataset: DatasetArgs,
    },

    /// Print the payload vs. outcome scatter chart as JSON
    Scatter {
        /// `ALL` or a launch site name
        #[arg(short, long, default_value = "ALL")]
        site: SiteSelection,

        /// Exclusive lower payload bound in kg (default: dataset minimum)
        #[arg(long)]
        min: Option<f64>,

        /// Inclusive upper payload bound in kg (default: dataset maximum)
        #[arg(long)]
        max: Option<f64>,

        #[command(flatten)]
        dataset: DatasetArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { dataset } => fetch::run_fetch(&dataset).await,
        Command::Sites { dataset } => charts::run_sites(&dataset).await,
        Command::Pie { site, dataset } => charts::run_pie(&dataset, &site).await,
        Command::Scatter {
            site,
            min,
            max,
            dataset,
        } => charts::run_scatter(&dataset, &site, min, max).await,
    }
}
