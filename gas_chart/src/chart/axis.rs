//!
//! The grouped x-axis.
//!

use std::ops::Range;

use plotters::coord::ranged1d::KeyPointHint;
use plotters::coord::ranged1d::NoDefaultFormatting;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::ranged1d::ValueFormatter;
use plotters::coord::types::RangedCoordf64;

///
/// The grouped x-axis.
///
/// A continuous axis, so bars can be shifted by a fraction of the group
/// spacing, whose only tick marks are the group positions.
///
pub struct GroupAxis {
    /// The continuous coordinate the values are mapped with.
    inner: RangedCoordf64,
    /// The group positions.
    positions: Vec<f64>,
}

impl GroupAxis {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(range: Range<f64>, positions: Vec<f64>) -> Self {
        Self {
            inner: range.into(),
            positions,
        }
    }
}

impl Ranged for GroupAxis {
    type FormatOption = NoDefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, hint: Hint) -> Vec<f64> {
        // Light mesh lines between the groups are never drawn.
        if hint.weight().allow_light_points() {
            return vec![];
        }
        self.positions.clone()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

impl ValueFormatter<f64> for GroupAxis {
    fn format(value: &f64) -> String {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use plotters::coord::ranged1d::BoldPoints;
    use plotters::coord::ranged1d::LightPoints;
    use plotters::coord::ranged1d::Ranged;

    use super::GroupAxis;

    #[test]
    fn key_points_are_group_positions() {
        let axis = GroupAxis::new(-0.5..1.5, vec![0.0, 1.0]);

        assert_eq!(axis.key_points(BoldPoints(10)), vec![0.0, 1.0]);
        assert!(axis.key_points(LightPoints::new(10, 100)).is_empty());
    }

    #[test]
    fn maps_continuously() {
        let axis = GroupAxis::new(0.0..1.0, vec![0.0, 1.0]);

        assert_eq!(axis.map(&0.0, (0, 100)), 0);
        assert_eq!(axis.map(&0.5, (0, 100)), 50);
        assert_eq!(axis.map(&1.0, (0, 100)), 100);
        assert_eq!(axis.range(), 0.0..1.0);
    }
}
