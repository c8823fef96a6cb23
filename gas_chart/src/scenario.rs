//!
//! The channel lifecycle scenario.
//!

use crate::measurement::error::Error as MeasurementError;
use crate::measurement::MeasurementSet;

///
/// The channel lifecycle scenario.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Scenario {
    /// Funding and concluding a channel cooperatively.
    HappyPath,
    /// Registering a challenge on chain and responding to it.
    ChallengePath,
}

impl Scenario {
    /// All scenarios in the x-axis order.
    pub const ALL: [Self; 2] = [Self::HappyPath, Self::ChallengePath];

    ///
    /// Returns the x-axis label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::HappyPath => "Happy Path",
            Self::ChallengePath => "Challenge Path",
        }
    }

    ///
    /// Returns the keys of the two steps the scenario consists of.
    ///
    pub fn steps<'a>(&self, measurements: &'a MeasurementSet) -> (&'a str, &'a str) {
        match self {
            Self::HappyPath => ("deposit", measurements.conclude_key.as_str()),
            Self::ChallengePath => ("forceMove", "respond"),
        }
    }

    ///
    /// Returns the total gas of the scenario.
    ///
    pub fn gas(&self, measurements: &MeasurementSet) -> Result<u64, MeasurementError> {
        let (first, second) = self.steps(measurements);
        measurements.sum(first, second)
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
