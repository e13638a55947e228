//! Searchable launch site dropdown.

use crate::state::AppState;
use dioxus::prelude::*;
use sld_launch::site::{SiteOption, ALL_SITES};
use sld_launch::SiteSelection;

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const SITE_DROPDOWN_PLACEHOLDER: &str = "Select a Launch Site here";

/// Options whose label contains `query` (case-insensitive). `All Sites` and
/// the current selection always stay listed so the select never loses its
/// value while the user types.
pub fn filter_site_options(
    options: &[SiteOption],
    query: &str,
    selected: &SiteSelection,
) -> Vec<SiteOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| {
            needle.is_empty()
                || o.value == ALL_SITES
                || o.value == selected.value()
                || o.label.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Site dropdown. Writes the chosen value to `AppState::selected_site`,
/// which both chart handlers subscribe to.
#[component]
pub fn SiteDropdown() -> Element {
    let mut state = use_context::<AppState>();
    let mut query = use_signal(String::new);
    let selected = (state.selected_site)();
    let visible = filter_site_options(&state.site_options.read(), &query(), &selected);

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("[SLD] site-dropdown: {}", value);
        state.selected_site.set(SiteSelection::from_value(&value));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            input {
                r#type: "search",
                placeholder: SITE_DROPDOWN_PLACEHOLDER,
                value: "{query}",
                style: "flex: 1; padding: 6px;",
                oninput: move |evt: Event<FormData>| query.set(evt.value()),
            }
            select {
                id: SITE_DROPDOWN_ID,
                style: "flex: 2; padding: 6px;",
                onchange: on_change,
                for entry in visible.iter() {
                    option {
                        key: "{entry.value}",
                        value: "{entry.value}",
                        selected: entry.value == selected.value(),
                        "{entry.label}"
                    }
                }
            }
        }
    }
}
