//! Display area for one D3.js chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id D3 renders into; also the id the chart handler output targets
    pub id: String,
    #[props(default = 420)]
    pub min_height: u32,
}

/// A chart area. An empty figure is explained inside the chart by the D3
/// script, which still draws its title.
#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let style = format!(
        "min-height: {}px; width: 100%; margin: 8px 0;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
