//!
//! The gas measurement set.
//!

#[cfg(test)]
mod tests;

pub mod error;
pub mod implementation;

use std::collections::BTreeMap;

use self::error::Error as MeasurementError;

///
/// The gas measurement set.
///
/// Maps a channel lifecycle step, e.g. `deposit` or `respond`, to the gas
/// consumed by the corresponding contract call.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementSet {
    /// The set name, used in error messages.
    pub name: String,
    /// The key of the step concluding the happy path.
    pub conclude_key: String,
    /// The gas per step.
    pub entries: BTreeMap<String, u64>,
}

impl MeasurementSet {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: &str, conclude_key: &str, entries: BTreeMap<String, u64>) -> Self {
        Self {
            name: name.to_owned(),
            conclude_key: conclude_key.to_owned(),
            entries,
        }
    }

    ///
    /// Returns the gas of the `key` step.
    ///
    pub fn get(&self, key: &str) -> Result<u64, MeasurementError> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| MeasurementError::MissingKey {
                set: self.name.clone(),
                key: key.to_owned(),
            })
    }

    ///
    /// Returns the total gas of the `first` and `second` steps.
    ///
    pub fn sum(&self, first: &str, second: &str) -> Result<u64, MeasurementError> {
        let first_gas = self.get(first)?;
        let second_gas = self.get(second)?;
        first_gas
            .checked_add(second_gas)
            .ok_or_else(|| MeasurementError::Overflow {
                set: self.name.clone(),
                first: first.to_owned(),
                second: second.to_owned(),
            })
    }
}
