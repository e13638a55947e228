use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// Column headers the dashboard cannot work without.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

/// A single launch from `spacex_launch_dash.csv`.
///
/// Deserialization follows the dataset's header names; serialization uses
/// snake_case field names so the struct can be handed to D3.js as JSON.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename(deserialize = "Flight Number"), default)]
    pub flight_number: Option<u32>,
    #[serde(rename(deserialize = "Launch Site"))]
    pub launch_site: String,
    /// Outcome class: 1 = successful landing, 0 = failure
    #[serde(rename(deserialize = "class"))]
    pub class: u8,
    /// `None` when the cell is blank or not a number. Such launches still
    /// count toward outcomes but have no place on the payload axis.
    #[serde(
        rename(deserialize = "Payload Mass (kg)"),
        deserialize_with = "csv::invalid_option"
    )]
    pub payload_mass_kg: Option<f64>,
    #[serde(rename(deserialize = "Booster Version"), default)]
    pub booster_version: Option<String>,
    #[serde(rename(deserialize = "Booster Version Category"))]
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == 1
    }

    /// Parse the launch dataset CSV.
    ///
    /// Columns are located by header name, so extra columns (including the
    /// unnamed leading index column of the published file) are ignored.
    /// Fails if a required header is missing. Rows that do not parse, or that
    /// have an empty launch site or an outcome class other than 0/1, are
    /// skipped and counted in the log. A blank or non-numeric payload does
    /// not drop the row.
    pub fn parse_launch_csv(csv_object: &str) -> anyhow::Result<Vec<LaunchRecord>> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b',')
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(csv_object.as_bytes());

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                anyhow::bail!("launch dataset is missing the '{}' column", column);
            }
        }

        let mut launches = Vec::new();
        let mut skipped = 0u32;
        for row in rdr.deserialize::<LaunchRecord>() {
            match row {
                Ok(launch) if !launch.launch_site.is_empty() && launch.class <= 1 => {
                    launches.push(launch)
                }
                Ok(_) | Err(_) => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("[SLD] launch: skipped {} malformed rows", skipped);
        }
        Ok(launches)
    }
}

#[cfg(test)]
mod tests {
    use super::LaunchRecord;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0
3,4,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT
";

    #[test]
    fn test_parse_launch_csv() {
        let launches = LaunchRecord::parse_launch_csv(SAMPLE).unwrap();
        assert_eq!(launches.len(), 4);
        assert_eq!(launches[0].flight_number, Some(1));
        assert_eq!(launches[0].launch_site, "CCAFS LC-40");
        assert_eq!(launches[2].payload_mass_kg, Some(525.0));
        assert_eq!(launches[3].booster_version_category, "FT");
        assert_eq!(launches[3].booster_version.as_deref(), Some("F9 FT B1029.1"));
        assert!(launches[3].is_success());
        assert!(!launches[0].is_success());
    }

    #[test]
    fn test_parse_minimal_columns() {
        let csv_data = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,1000,FT,1
";
        let launches = LaunchRecord::parse_launch_csv(csv_data).unwrap();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].flight_number, None);
        assert_eq!(launches[0].booster_version, None);
    }

    #[test]
    fn test_parse_skips_malformed_rows() {
        let csv_data = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,500,FT,abc
,500,FT,1
A,500,FT,7
B,500,B4,0
";
        let launches = LaunchRecord::parse_launch_csv(csv_data).unwrap();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].launch_site, "B");
    }

    #[test]
    fn test_parse_keeps_rows_without_payload() {
        let csv_data = "\
Launch Site,Payload Mass (kg),Booster Version Category,class
A,heavy,FT,1
A,,FT,0
A,2500,FT,1
";
        let launches = LaunchRecord::parse_launch_csv(csv_data).unwrap();
        let payloads: Vec<Option<f64>> = launches.iter().map(|l| l.payload_mass_kg).collect();
        assert_eq!(payloads, vec![None, None, Some(2500.0)]);
        assert!(launches[0].is_success());
    }

    #[test]
    fn test_parse_missing_column_fails() {
        let csv_data = "Launch Site,Payload Mass (kg),class\nA,500,1\n";
        let err = LaunchRecord::parse_launch_csv(csv_data).unwrap_err();
        assert!(err.to_string().contains("Booster Version Category"));
    }

    #[test]
    fn test_parse_header_only() {
        let csv_data = "Launch Site,Payload Mass (kg),Booster Version Category,class\n";
        let launches = LaunchRecord::parse_launch_csv(csv_data).unwrap();
        assert!(launches.is_empty());
    }
}
