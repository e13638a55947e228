//! Two-thumb payload range slider.

use crate::state::AppState;
use dioxus::prelude::*;
use sld_launch::payload::{slider_marks, SLIDER_MAX, SLIDER_MIN, SLIDER_STEP};
use sld_launch::PayloadRange;

pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
const MARKS_LIST_ID: &str = "payload-slider-marks";

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Thumb {
    Lower,
    Upper,
}

/// Move one thumb to `value`. Thumbs cannot cross: a thumb pushed past the
/// other stops on it.
pub fn move_thumb(range: PayloadRange, thumb: Thumb, value: f64) -> PayloadRange {
    match thumb {
        Thumb::Lower => PayloadRange::new(value.min(range.max), range.max),
        Thumb::Upper => PayloadRange::new(range.min, value.max(range.min)),
    }
}

fn update_thumb(mut state: AppState, thumb: Thumb, raw: &str) {
    match raw.parse::<f64>() {
        Ok(value) => {
            let current = *state.payload_range.peek();
            state.payload_range.set(move_thumb(current, thumb, value));
        }
        Err(_) => log::warn!("[SLD] payload-slider: ignoring value {:?}", raw),
    }
}

/// Payload range slider. Writes to `AppState::payload_range`, which the
/// scatter chart handler subscribes to.
#[component]
pub fn PayloadRangeSlider() -> Element {
    let state = use_context::<AppState>();
    let range = (state.payload_range)();
    let marks = slider_marks();

    let on_lower = move |evt: Event<FormData>| update_thumb(state, Thumb::Lower, &evt.value());
    let on_upper = move |evt: Event<FormData>| update_thumb(state, Thumb::Upper, &evt.value());

    rsx! {
        div {
            id: PAYLOAD_SLIDER_ID,
            style: "margin: 8px 0;",
            p {
                style: "margin: 0 0 4px 0;",
                "Payload range (Kg): {range.min} - {range.max}"
            }
            datalist {
                id: MARKS_LIST_ID,
                for mark in marks.iter() {
                    option { key: "{mark}", value: "{mark}" }
                }
            }
            div {
                style: "display: flex; gap: 12px;",
                input {
                    r#type: "range",
                    "aria-label": "Minimum payload (kg)",
                    min: "{SLIDER_MIN}",
                    max: "{SLIDER_MAX}",
                    step: "{SLIDER_STEP}",
                    list: MARKS_LIST_ID,
                    value: "{range.min}",
                    style: "flex: 1;",
                    oninput: on_lower,
                }
                input {
                    r#type: "range",
                    "aria-label": "Maximum payload (kg)",
                    min: "{SLIDER_MIN}",
                    max: "{SLIDER_MAX}",
                    step: "{SLIDER_STEP}",
                    list: MARKS_LIST_ID,
                    value: "{range.max}",
                    style: "flex: 1;",
                    oninput: on_upper,
                }
            }
            div {
                style: "display: flex; justify-content: space-between; font-size: 11px; color: #666;",
                for mark in marks.iter() {
                    span { key: "{mark}", "{mark}" }
                }
            }
        }
    }
}
