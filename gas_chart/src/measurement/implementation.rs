//!
//! The contract implementation being measured.
//!

use super::MeasurementSet;

///
/// The contract implementation being measured.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Implementation {
    /// The implementation before the gas optimizations.
    Legacy,
    /// The implementation after the gas optimizations.
    Optimized,
}

impl Implementation {
    /// All implementations in the legend order.
    pub const ALL: [Self; 2] = [Self::Legacy, Self::Optimized];

    ///
    /// Returns the legend label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::Legacy => "Legacy",
            Self::Optimized => "Optimized",
        }
    }

    ///
    /// Returns the key of the step that concludes a channel without a dispute.
    ///
    /// The two implementations conclude through different methods, but both
    /// are charted as the same step of the happy path.
    ///
    pub fn conclude_key(&self) -> &'static str {
        match self {
            Self::Legacy => "concludeAndWithdraw",
            Self::Optimized => "concludePushOutcomeAndTransferAll",
        }
    }

    ///
    /// Returns the recorded measurements.
    ///
    pub fn measurements(&self) -> MeasurementSet {
        let entries: &[(&str, u64)] = match self {
            Self::Legacy => &[
                ("deposit", 46750),
                ("concludeAndWithdraw", 644147),
                ("forceMove", 677845),
                ("respond", 336337),
            ],
            Self::Optimized => &[
                ("deposit", 48776),
                ("concludePushOutcomeAndTransferAll", 107812),
                ("forceMove", 134004),
                ("respond", 86357),
            ],
        };
        MeasurementSet::new(
            self.label(),
            self.conclude_key(),
            entries
                .iter()
                .map(|(key, gas)| ((*key).to_owned(), *gas))
                .collect(),
        )
    }
}

impl std::fmt::Display for Implementation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
