use serde::Serialize;
use sld_db::Database;
use sld_launch::{LaunchRecord, PayloadRange, SiteSelection};

pub const X_FIELD: &str = "Payload Mass (kg)";
pub const Y_FIELD: &str = "class";
pub const COLOR_FIELD: &str = "Booster Version Category";

/// Everything the scatter chart script needs to draw one figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_field: String,
    pub y_field: String,
    pub color_field: String,
    /// Booster version categories in order of first appearance; one color
    /// per entry.
    pub categories: Vec<String>,
    /// The range the points were filtered with.
    pub payload_range: PayloadRange,
    pub points: Vec<LaunchRecord>,
}

impl ScatterFigure {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

pub fn scatter_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(site) => {
            format!("Correlation between Payload and Success for site {}", site)
        }
    }
}

/// Scatter chart for the site dropdown and payload range slider.
///
/// Keeps launches with `range.min < payload <= range.max`, then, when a
/// single site is selected, only that site's launches. Each point is a
/// launch at (payload mass, outcome class) colored by its booster version
/// category. No matching launches yields a figure with no points.
pub fn success_payload_scatter_chart(
    db: &Database,
    site: &SiteSelection,
    range: &PayloadRange,
) -> anyhow::Result<ScatterFigure> {
    let points = db.query_launches_in_payload_range(range, site.site())?;

    let mut categories: Vec<String> = Vec::new();
    for point in &points {
        if !categories.contains(&point.booster_version_category) {
            categories.push(point.booster_version_category.clone());
        }
    }

    if points.is_empty() {
        log::warn!(
            "[SLD] scatter: no launches for site {} in {}..={} kg",
            site,
            range.min,
            range.max
        );
    }

    Ok(ScatterFigure {
        title: scatter_title(site),
        x_field: X_FIELD.to_string(),
        y_field: Y_FIELD.to_string(),
        color_field: COLOR_FIELD.to_string(),
        categories,
        payload_range: *range,
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_db;

    #[test]
    fn boundary_lower_excluded_upper_included() {
        let db = sample_db();
        let range = PayloadRange::new(1000.0, 5000.0);
        let figure = success_payload_scatter_chart(&db, &SiteSelection::All, &range).unwrap();
        let payloads: Vec<f64> = figure.points.iter().filter_map(|p| p.payload_mass_kg).collect();
        assert!(!payloads.contains(&1000.0));
        assert!(payloads.contains(&5000.0));
        assert!(!payloads.contains(&7000.0));
        assert_eq!(payloads, vec![2500.0, 5000.0, 3000.0, 4000.0]);
    }

    #[test]
    fn points_satisfy_range_and_site() {
        let db = sample_db();
        let site = SiteSelection::from_value("B");
        for (lo, hi) in [(0.0, 10000.0), (500.0, 6000.0), (2000.0, 3000.0)] {
            let range = PayloadRange::new(lo, hi);
            let figure = success_payload_scatter_chart(&db, &site, &range).unwrap();
            assert!(!figure.is_empty());
            for point in &figure.points {
                let payload = point.payload_mass_kg.unwrap();
                assert!(payload > lo && payload <= hi);
                assert_eq!(point.launch_site, "B");
            }
        }
    }

    #[test]
    fn titles_follow_selection() {
        let db = sample_db();
        let range = PayloadRange::slider_extent();
        let all = success_payload_scatter_chart(&db, &SiteSelection::All, &range).unwrap();
        assert_eq!(all.title, "Correlation between Payload and Success for all Sites");
        let a = success_payload_scatter_chart(&db, &SiteSelection::from_value("A"), &range)
            .unwrap();
        assert_eq!(a.title, "Correlation between Payload and Success for site A");
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let db = sample_db();
        let range = PayloadRange::slider_extent();
        let figure = success_payload_scatter_chart(&db, &SiteSelection::All, &range).unwrap();
        assert_eq!(figure.categories, vec!["v1.0", "v1.1", "FT", "B4", "B5"]);
        assert_eq!(figure.color_field, "Booster Version Category");
    }

    #[test]
    fn empty_range_gives_empty_figure() {
        let db = sample_db();
        let range = PayloadRange::new(9600.0, 10000.0);
        let figure = success_payload_scatter_chart(&db, &SiteSelection::All, &range).unwrap();
        assert!(figure.is_empty());
        assert!(figure.categories.is_empty());
    }

    #[test]
    fn unknown_site_gives_empty_figure() {
        let db = sample_db();
        let range = PayloadRange::slider_extent();
        let figure =
            success_payload_scatter_chart(&db, &SiteSelection::from_value("NOPE"), &range)
                .unwrap();
        assert!(figure.is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let db = sample_db();
        let site = SiteSelection::from_value("A");
        let range = PayloadRange::new(0.0, 8000.0);
        let first = success_payload_scatter_chart(&db, &site, &range).unwrap();
        let second = success_payload_scatter_chart(&db, &site, &range).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn points_serialize_with_snake_case_fields() {
        let db = sample_db();
        let range = PayloadRange::new(2000.0, 3000.0);
        let figure = success_payload_scatter_chart(&db, &SiteSelection::All, &range).unwrap();
        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["points"][0]["payload_mass_kg"], 2500.0);
        assert_eq!(json["points"][0]["booster_version_category"], "v1.1");
        assert_eq!(json["payload_range"]["max"], 3000.0);
    }
}
