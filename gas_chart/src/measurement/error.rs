//!
//! Measurement set error.
//!

///
/// Measurement set error.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A key required by a scenario is absent from the set.
    #[error("Measurement set `{set}` is missing the `{key}` entry")]
    MissingKey {
        /// The measurement set name.
        set: String,
        /// The missing key.
        key: String,
    },
    /// The aggregate does not fit into the gas counter.
    #[error("Measurement set `{set}`: `{first}` + `{second}` overflows")]
    Overflow {
        /// The measurement set name.
        set: String,
        /// The first summand key.
        first: String,
        /// The second summand key.
        second: String,
    },
}
