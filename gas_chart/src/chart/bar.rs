//!
//! The chart bar.
//!

///
/// The chart bar.
///
/// The horizontal coordinates are in the x-axis units, where the groups are
/// centered at the integer positions.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// The index of the series the bar belongs to.
    pub series_index: usize,
    /// The index of the x-axis group the bar is drawn in.
    pub group_index: usize,
    /// The horizontal center.
    pub center: f64,
    /// The width.
    pub width: f64,
    /// The height, that is the gas.
    pub height: u64,
}

impl Bar {
    ///
    /// Returns the left edge.
    ///
    pub fn left(&self) -> f64 {
        self.center - self.width / 2.0
    }

    ///
    /// Returns the right edge.
    ///
    pub fn right(&self) -> f64 {
        self.center + self.width / 2.0
    }
}
