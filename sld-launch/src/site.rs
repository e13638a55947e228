use serde::Serialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Dropdown value selecting every launch site.
pub const ALL_SITES: &str = "ALL";
/// Dropdown label for [`ALL_SITES`].
pub const ALL_SITES_LABEL: &str = "All Sites";

/// The current value of the launch site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value. `"ALL"` selects every site; anything
    /// else, including a name not present in the dataset, selects that site.
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            ALL_SITES => SiteSelection::All,
            site => SiteSelection::Site(site.to_string()),
        }
    }

    /// The raw dropdown value for this selection.
    pub fn value(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site.as_str(),
        }
    }

    /// The selected site name, or `None` when every site is selected.
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(site) => Some(site.as_str()),
        }
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SiteSelection::from_value(s))
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// A single `(label, value)` entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Build the dropdown options: `All Sites` first, then every site name
/// sorted ascending with duplicates removed.
pub fn site_options(sites: &[String]) -> Vec<SiteOption> {
    let mut names: Vec<&String> = sites.iter().collect();
    names.sort();
    names.dedup();

    std::iter::once(SiteOption {
        label: ALL_SITES_LABEL.to_string(),
        value: ALL_SITES.to_string(),
    })
    .chain(names.into_iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }))
    .collect()
}
