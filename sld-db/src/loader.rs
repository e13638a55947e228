//! CSV loading for the launch table.
//!
//! Expected format (with headers): at least
//! `Launch Site,Payload Mass (kg),Booster Version Category,class`. The
//! published file also carries `Flight Number` and `Booster Version`, which
//! are stored when present, plus an unnamed index column, which is ignored.

use crate::Database;
use rusqlite::params;
use sld_launch::LaunchRecord;

impl Database {
    /// Load launch records from a dataset CSV string.
    ///
    /// Returns the number of rows inserted. Fails if a required column is
    /// missing; malformed rows are skipped by the parser.
    ///
    /// # Example CSV
    /// ```text
    /// ,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
    /// 0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
    /// ```
    pub fn load_launches(&self, csv_data: &str) -> anyhow::Result<usize> {
        let launches = LaunchRecord::parse_launch_csv(csv_data)?;
        self.insert_launches(&launches)
    }

    /// Insert already parsed launch records, preserving their order.
    pub fn insert_launches(&self, launches: &[LaunchRecord]) -> anyhow::Result<usize> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare_cached(
            "INSERT INTO launches
             (flight_number, launch_site, class, payload_mass_kg, booster_version, booster_version_category)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;

        for launch in launches {
            stmt.execute(params![
                launch.flight_number,
                launch.launch_site,
                launch.class,
                launch.payload_mass_kg,
                launch.booster_version,
                launch.booster_version_category,
            ])?;
        }
        log::info!("[SLD] loader: Loaded {} launches", launches.len());
        Ok(launches.len())
    }
}
