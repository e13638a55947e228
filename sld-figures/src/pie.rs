use serde::Serialize;
use sld_db::Database;
use sld_launch::SiteSelection;

/// Column whose values label the slices of the all-sites pie.
pub const SITE_FIELD: &str = "Launch Site";
/// Column whose values label the slices of a single-site pie.
pub const CLASS_FIELD: &str = "class";

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

/// Everything the pie chart script needs to draw one figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    /// Name of the column the slice labels come from.
    pub names_field: String,
    /// Name of the column the slice sizes are computed from.
    pub values_field: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// True when there is nothing to draw: no slices, or only zero slices.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Note drawn in place of the pie when it is empty. Slices that are all
    /// zero mean launches exist but none of them succeeded.
    pub fn empty_message(&self) -> Option<&'static str> {
        if !self.is_empty() {
            None
        } else if self.slices.is_empty() {
            Some("No launches recorded for this selection")
        } else {
            Some("No successful launches recorded")
        }
    }
}

pub fn pie_title(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => "Total Success Launches By Site".to_string(),
        SiteSelection::Site(site) => format!("Total Success Launches for site {}", site),
    }
}

/// Pie chart for the site dropdown.
///
/// With every site selected, one slice per site sized by its number of
/// successful launches (the sum of its outcome class). With one site
/// selected, one slice per observed outcome class sized by its number of
/// launches, labelled by the class value. A site without launches yields a
/// figure with no slices.
pub fn success_pie_chart(db: &Database, site: &SiteSelection) -> anyhow::Result<PieFigure> {
    let (names_field, slices) = match site {
        SiteSelection::All => {
            let slices = db
                .query_success_by_site()?
                .into_iter()
                .map(|s| PieSlice {
                    label: s.launch_site,
                    value: s.successes,
                })
                .collect();
            (SITE_FIELD, slices)
        }
        SiteSelection::Site(name) => {
            let slices: Vec<PieSlice> = db
                .query_outcome_counts(name)?
                .into_iter()
                .map(|o| PieSlice {
                    label: o.class.to_string(),
                    value: o.count,
                })
                .collect();
            if slices.is_empty() {
                log::warn!("[SLD] pie: no launches for site {}", name);
            }
            (CLASS_FIELD, slices)
        }
    };

    Ok(PieFigure {
        title: pie_title(site),
        names_field: names_field.to_string(),
        values_field: CLASS_FIELD.to_string(),
        slices,
    })
}
