use serde::{Deserialize, Serialize};

/// Lower bound of the payload range slider (kg).
pub const SLIDER_MIN: u32 = 0;
/// Upper bound of the payload range slider (kg).
pub const SLIDER_MAX: u32 = 10_000;
/// Step of the payload range slider (kg).
pub const SLIDER_STEP: u32 = 1_000;
/// Number of evenly spaced labelled marks on the slider, ends included.
pub const SLIDER_MARK_COUNT: u32 = 5;

/// Slider mark positions: `SLIDER_MARK_COUNT` evenly spaced values from
/// `SLIDER_MIN` to `SLIDER_MAX` (0, 2500, 5000, 7500, 10000).
pub fn slider_marks() -> Vec<u32> {
    let span = SLIDER_MAX - SLIDER_MIN;
    let intervals = SLIDER_MARK_COUNT - 1;
    (0..SLIDER_MARK_COUNT)
        .map(|i| SLIDER_MIN + span * i / intervals)
        .collect()
}

/// A payload mass interval in kg, excluding `min` and including `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    /// Build a range; the bounds are swapped if given in reverse order.
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// The full extent of the range slider.
    pub fn slider_extent() -> Self {
        Self::new(SLIDER_MIN as f64, SLIDER_MAX as f64)
    }

    /// `min < payload <= max`
    pub fn contains(&self, payload: f64) -> bool {
        payload > self.min && payload <= self.max
    }
}
