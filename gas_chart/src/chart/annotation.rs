//!
//! The bar height annotation.
//!

use super::bar::Bar;

/// The vertical distance between a bar top and its annotation, in points.
pub const OFFSET_POINTS: f64 = 3.0;

///
/// The bar height annotation.
///
/// Anchored at its bottom center, which is placed [`OFFSET_POINTS`] above
/// the middle of the bar top.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    /// The text.
    pub text: String,
    /// The anchor abscissa, in the x-axis units.
    pub x: f64,
    /// The anchor ordinate before the offset is applied, in gas.
    pub y: f64,
    /// The vertical offset, in points.
    pub offset_points: f64,
}

impl From<&Bar> for Annotation {
    fn from(bar: &Bar) -> Self {
        Self {
            text: bar.height.to_string(),
            x: bar.center,
            y: bar.height as f64,
            offset_points: OFFSET_POINTS,
        }
    }
}

impl Annotation {
    ///
    /// Returns the vertical offset in pixels at `dpi`.
    ///
    pub fn offset_pixels(&self, dpi: f64) -> i32 {
        (self.offset_points * dpi / 72.0).round() as i32
    }
}
