//! Typed read-only queries over the launch table.
//!
//! All queries return types from [`crate::models`] or
//! [`sld_launch::LaunchRecord`], ready to be serialized for D3.js.

use crate::models::{OutcomeCount, PayloadBounds, SiteSuccess};
use crate::Database;
use rusqlite::params;
use sld_launch::{LaunchRecord, PayloadRange};

impl Database {
    /// Distinct launch site names, sorted ascending.
    pub fn query_launch_sites(&self) -> anyhow::Result<Vec<String>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT launch_site FROM launches
             ORDER BY launch_site",
        )?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        log::info!("[SLD] query: query_launch_sites returned {} sites", rows.len());
        Ok(rows)
    }

    /// Smallest and largest payload mass across all launches.
    ///
    /// Launches without a payload are ignored. Fails when no launch has one,
    /// including on an empty table.
    pub fn query_payload_bounds(&self) -> anyhow::Result<PayloadBounds> {
        let conn = self.conn.borrow();
        let (min, max): (Option<f64>, Option<f64>) = conn.query_row(
            "SELECT MIN(payload_mass_kg), MAX(payload_mass_kg) FROM launches",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        match (min, max) {
            (Some(min), Some(max)) => Ok(PayloadBounds { min, max }),
            _ => anyhow::bail!("no launches loaded, payload bounds are undefined"),
        }
    }

    /// Number of successful launches per site, ordered by site name.
    ///
    /// Every site appears, including sites without a single success.
    pub fn query_success_by_site(&self) -> anyhow::Result<Vec<SiteSuccess>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT launch_site, SUM(class) FROM launches
             GROUP BY launch_site
             ORDER BY launch_site",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SiteSuccess {
                    launch_site: row.get(0)?,
                    successes: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SLD] query: query_success_by_site returned {} sites",
            rows.len()
        );
        Ok(rows)
    }

    /// Launch counts per outcome class for one site.
    ///
    /// Ordered by count descending, then class descending. Only outcome
    /// values that occur are returned; an unknown site yields no rows.
    pub fn query_outcome_counts(&self, launch_site: &str) -> anyhow::Result<Vec<OutcomeCount>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT class, COUNT(*) AS launches FROM launches
             WHERE launch_site = ?1
             GROUP BY class
             ORDER BY launches DESC, class DESC",
        )?;
        let rows = stmt
            .query_map(params![launch_site], |row| {
                Ok(OutcomeCount {
                    class: row.get(0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SLD] query: query_outcome_counts({}) returned {} outcomes",
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Launches whose payload lies in `range` (`min < payload <= max`),
    /// optionally restricted to one site, in dataset order.
    pub fn query_launches_in_payload_range(
        &self,
        range: &PayloadRange,
        launch_site: Option<&str>,
    ) -> anyhow::Result<Vec<LaunchRecord>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT flight_number, launch_site, class, payload_mass_kg,
                    booster_version, booster_version_category
             FROM launches
             WHERE payload_mass_kg > ?1 AND payload_mass_kg <= ?2
               AND (?3 IS NULL OR launch_site = ?3)
             ORDER BY row_order",
        )?;
        let rows = stmt
            .query_map(params![range.min, range.max, launch_site], |row| {
                Ok(LaunchRecord {
                    flight_number: row.get(0)?,
                    launch_site: row.get(1)?,
                    class: row.get(2)?,
                    payload_mass_kg: row.get(3)?,
                    booster_version: row.get(4)?,
                    booster_version_category: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[SLD] query: query_launches_in_payload_range({}..={}, {:?}) returned {} launches",
            range.min,
            range.max,
            launch_site,
            rows.len()
        );
        Ok(rows)
    }

    /// Number of launches, for one site or for all of them.
    pub fn query_launch_count(&self, launch_site: Option<&str>) -> anyhow::Result<u32> {
        let conn = self.conn.borrow();
        let count: u32 = conn.query_row(
            "SELECT COUNT(*) FROM launches WHERE ?1 IS NULL OR launch_site = ?1",
            params![launch_site],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{OutcomeCount, SiteSuccess};
    use crate::Database;
    use sld_launch::PayloadRange;

    /// Site A: 3 successes, 2 failures. Site B: 1 success, 4 failures.
    /// Site C: 1 failure.
    fn sample_db() -> Database {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,1000,v1.0,1
A,2500,v1.1,1
A,5000,FT,1
A,7000,FT,0
A,0,v1.0,0
B,500,v1.1,0
B,3000,FT,1
B,4000,FT,0
B,6000,B4,0
B,9600,B5,0
C,1500,v1.0,0
";
        Database::from_csv(csv).unwrap()
    }

    #[test]
    fn query_launch_sites_sorted_distinct() {
        let db = sample_db();
        assert_eq!(db.query_launch_sites().unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn query_payload_bounds() {
        let db = sample_db();
        let bounds = db.query_payload_bounds().unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 9600.0);
    }

    #[test]
    fn launch_without_payload_counts_in_outcomes_only() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,,FT,1
A,2000,FT,0
";
        let db = Database::from_csv(csv).unwrap();
        assert_eq!(
            db.query_success_by_site().unwrap(),
            vec![SiteSuccess { launch_site: "A".to_string(), successes: 1 }]
        );
        assert_eq!(db.query_outcome_counts("A").unwrap().len(), 2);
        assert_eq!(db.query_launch_count(Some("A")).unwrap(), 2);

        let bounds = db.query_payload_bounds().unwrap();
        assert_eq!((bounds.min, bounds.max), (2000.0, 2000.0));
        let in_range = db
            .query_launches_in_payload_range(&PayloadRange::new(0.0, 10000.0), None)
            .unwrap();
        assert_eq!(in_range.len(), 1);
        assert_eq!(in_range[0].payload_mass_kg, Some(2000.0));
    }

    #[test]
    fn query_payload_bounds_without_any_payload_fails() {
        let csv = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,,FT,1
";
        let db = Database::from_csv(csv).unwrap();
        assert!(db.query_payload_bounds().is_err());
    }

    #[test]
    fn query_payload_bounds_empty_table_fails() {
        let db = Database::new().unwrap();
        assert!(db.query_payload_bounds().is_err());
    }

    #[test]
    fn query_success_by_site_sums_class() {
        let db = sample_db();
        let results = db.query_success_by_site().unwrap();
        assert_eq!(
            results,
            vec![
                SiteSuccess { launch_site: "A".to_string(), successes: 3 },
                SiteSuccess { launch_site: "B".to_string(), successes: 1 },
                SiteSuccess { launch_site: "C".to_string(), successes: 0 },
            ]
        );
    }

    #[test]
    fn query_outcome_counts_for_site() {
        let db = sample_db();
        assert_eq!(
            db.query_outcome_counts("A").unwrap(),
            vec![
                OutcomeCount { class: 1, count: 3 },
                OutcomeCount { class: 0, count: 2 },
            ]
        );
        assert_eq!(
            db.query_outcome_counts("B").unwrap(),
            vec![
                OutcomeCount { class: 0, count: 4 },
                OutcomeCount { class: 1, count: 1 },
            ]
        );
    }

    #[test]
    fn query_outcome_counts_only_observed_classes() {
        let db = sample_db();
        assert_eq!(
            db.query_outcome_counts("C").unwrap(),
            vec![OutcomeCount { class: 0, count: 1 }]
        );
    }

    #[test]
    fn query_outcome_counts_unknown_site() {
        let db = sample_db();
        assert!(db.query_outcome_counts("NOPE").unwrap().is_empty());
    }

    #[test]
    fn query_payload_range_is_half_open() {
        let db = sample_db();
        let range = PayloadRange::new(1000.0, 5000.0);
        let launches = db.query_launches_in_payload_range(&range, None).unwrap();
        let payloads: Vec<f64> = launches.iter().filter_map(|l| l.payload_mass_kg).collect();
        // 1000 is excluded, 5000 included, 7000 excluded; dataset order kept
        assert_eq!(payloads, vec![2500.0, 5000.0, 3000.0, 4000.0, 1500.0]);
    }

    #[test]
    fn query_payload_range_for_site() {
        let db = sample_db();
        let range = PayloadRange::new(0.0, 10000.0);
        let launches = db
            .query_launches_in_payload_range(&range, Some("B"))
            .unwrap();
        assert_eq!(launches.len(), 5);
        assert!(launches.iter().all(|l| l.launch_site == "B"));
    }

    #[test]
    fn query_payload_range_empty() {
        let db = sample_db();
        let range = PayloadRange::new(9600.0, 10000.0);
        assert!(db
            .query_launches_in_payload_range(&range, None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn query_launch_count() {
        let db = sample_db();
        assert_eq!(db.query_launch_count(None).unwrap(), 11);
        assert_eq!(db.query_launch_count(Some("A")).unwrap(), 5);
        assert_eq!(db.query_launch_count(Some("NOPE")).unwrap(), 0);
    }
}
