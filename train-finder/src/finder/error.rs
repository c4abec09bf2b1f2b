//! Input validation errors.

/// Why a lookup request was rejected.
///
/// Each variant is a fixed kind with no payload; checks run in declaration
/// order and only the first failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("empty departure station")]
    EmptyDepartureStation,

    #[error("bad departure station input")]
    BadDepartureStationInput,

    #[error("empty arrival station")]
    EmptyArrivalStation,

    #[error("bad arrival station input")]
    BadArrivalStationInput,

    #[error("unsupported criteria")]
    UnsupportedCriteria,
}
