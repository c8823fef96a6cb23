//!
//! The gas measurement set tests.
//!

use super::error::Error;
use super::implementation::Implementation;
use super::MeasurementSet;

#[test]
fn legacy_contains_required_steps() {
    let measurements = Implementation::Legacy.measurements();

    assert_eq!(measurements.get("deposit"), Ok(46750));
    assert_eq!(measurements.get("concludeAndWithdraw"), Ok(644147));
    assert_eq!(measurements.get("forceMove"), Ok(677845));
    assert_eq!(measurements.get("respond"), Ok(336337));
}

#[test]
fn optimized_contains_required_steps() {
    let measurements = Implementation::Optimized.measurements();

    assert_eq!(measurements.get("deposit"), Ok(48776));
    assert_eq!(
        measurements.get("concludePushOutcomeAndTransferAll"),
        Ok(107812)
    );
    assert_eq!(measurements.get("forceMove"), Ok(134004));
    assert_eq!(measurements.get("respond"), Ok(86357));
}

#[test]
fn conclude_key_is_present() {
    for implementation in Implementation::ALL {
        let measurements = implementation.measurements();
        assert!(measurements.get(measurements.conclude_key.as_str()).is_ok());
    }
}

#[test]
fn error_missing_key() {
    let measurements = Implementation::Legacy.measurements();

    assert_eq!(
        measurements.get("concludePushOutcomeAndTransferAll"),
        Err(Error::MissingKey {
            set: "Legacy".to_owned(),
            key: "concludePushOutcomeAndTransferAll".to_owned(),
        })
    );
}

#[test]
fn error_overflow() {
    let measurements = MeasurementSet::new(
        "Broken",
        "conclude",
        [("deposit".to_owned(), u64::MAX), ("conclude".to_owned(), 1)].into(),
    );

    assert!(matches!(
        measurements.sum("deposit", "conclude"),
        Err(Error::Overflow { .. })
    ));
}
