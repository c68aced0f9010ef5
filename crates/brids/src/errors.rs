use thiserror::Error;

/// Error returned when a plate format selector names neither of the two
/// supported templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown license plate format: {0}")]
pub struct ParseFormatError(pub String);
