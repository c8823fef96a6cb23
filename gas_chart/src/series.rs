//!
//! The chart series.
//!

use crate::measurement::error::Error as MeasurementError;
use crate::measurement::MeasurementSet;
use crate::scenario::Scenario;

///
/// The chart series.
///
/// Holds one aggregate per scenario, in the order of [`Scenario::ALL`].
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// The legend label.
    pub label: String,
    /// The scenario aggregates.
    pub values: [u64; Scenario::ALL.len()],
}

impl Series {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(label: &str, values: [u64; Scenario::ALL.len()]) -> Self {
        Self {
            label: label.to_owned(),
            values,
        }
    }

    ///
    /// Returns the aggregate of `scenario`.
    ///
    pub fn get(&self, scenario: Scenario) -> u64 {
        self.values[scenario as usize]
    }
}

impl TryFrom<&MeasurementSet> for Series {
    type Error = MeasurementError;

    fn try_from(measurements: &MeasurementSet) -> Result<Self, Self::Error> {
        let happy_path = Scenario::HappyPath.gas(measurements)?;
        let challenge_path = Scenario::ChallengePath.gas(measurements)?;
        Ok(Self::new(
            measurements.name.as_str(),
            [happy_path, challenge_path],
        ))
    }
}

///
/// Computes the per-scenario aggregates of a measurement set.
///
pub fn compute_aggregates(measurements: &MeasurementSet) -> Result<Series, MeasurementError> {
    Series::try_from(measurements)
}
