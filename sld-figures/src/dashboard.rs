//! The loaded launch table plus the values derived from it at startup.
//!
//! Built once, then only read: the controls take their options and default
//! values from it, and every chart refresh calls one of its handler methods.

use crate::pie::{success_pie_chart, PieFigure};
use crate::scatter::{success_payload_scatter_chart, ScatterFigure};
use sld_db::models::PayloadBounds;
use sld_db::Database;
use sld_launch::site::{site_options, SiteOption};
use sld_launch::{PayloadRange, SiteSelection};

#[derive(Clone, PartialEq)]
pub struct LaunchDashboard {
    db: Database,
    sites: Vec<String>,
    payload_bounds: PayloadBounds,
}

impl LaunchDashboard {
    /// Load the dataset CSV and derive the site list and payload bounds.
    ///
    /// Fails if the CSV lacks a required column or holds no launches.
    pub fn load(csv_data: &str) -> anyhow::Result<Self> {
        let db = Database::from_csv(csv_data)?;
        Self::from_database(db)
    }

    pub fn from_database(db: Database) -> anyhow::Result<Self> {
        let sites = db.query_launch_sites()?;
        let payload_bounds = db.query_payload_bounds()?;
        log::info!(
            "[SLD] dashboard: {} sites, payload {}..={} kg",
            sites.len(),
            payload_bounds.min,
            payload_bounds.max
        );
        Ok(Self {
            db,
            sites,
            payload_bounds,
        })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Distinct launch sites, sorted.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Dropdown options: `All Sites` followed by each site.
    pub fn site_options(&self) -> Vec<SiteOption> {
        site_options(&self.sites)
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.payload_bounds
    }

    /// Initial slider value: the observed payload extent of the dataset.
    pub fn default_payload_range(&self) -> PayloadRange {
        PayloadRange::new(self.payload_bounds.min, self.payload_bounds.max)
    }

    pub fn pie_chart(&self, site: &SiteSelection) -> anyhow::Result<PieFigure> {
        success_pie_chart(&self.db, site)
    }

    pub fn scatter_chart(
        &self,
        site: &SiteSelection,
        range: &PayloadRange,
    ) -> anyhow::Result<ScatterFigure> {
        success_payload_scatter_chart(&self.db, site, range)
    }
}
