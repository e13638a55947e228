//! Loading and error notices shown in place of the dashboard.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum StatusKind {
    Loading,
    Error,
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    pub kind: StatusKind,
    #[props(default = String::new())]
    pub message: String,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    match props.kind {
        StatusKind::Loading => rsx! {
            div {
                style: "display: flex; justify-content: center; padding: 40px; color: #666;",
                "Loading launch records..."
            }
        },
        StatusKind::Error => rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A; border-radius: 4px;",
                strong { "Could not load launch records: " }
                "{props.message}"
            }
        },
    }
}
