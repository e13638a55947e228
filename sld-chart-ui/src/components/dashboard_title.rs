use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardTitleProps {
    pub title: String,
}

/// Centered page heading.
#[component]
pub fn DashboardTitle(props: DashboardTitleProps) -> Element {
    rsx! {
        h1 {
            style: "text-align: center; color: #503D36; font-size: 40px; margin: 8px 0 16px 0;",
            "{props.title}"
        }
    }
}
