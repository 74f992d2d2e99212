//! Definition of the similarity layer's error and result.

use thiserror::Error;

/// The library's failure based error enum
///
/// Scoring and explaining never fail. Errors only surface while building a
/// similarity (bad smoothing parameters, unreadable configuration) or while
/// assembling the statistics handed over by the index.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimilarityError {
    /// Invalid argument was passed by the user.
    #[error("An invalid argument was passed: '{0}'")]
    InvalidArgument(String),
    /// Collection or term statistics violate the counting invariants.
    #[error("Invalid statistics: '{0}'")]
    InvalidStatistics(String),
    /// The similarity configuration could not be read.
    #[error("Configuration error: '{0}'")]
    ConfigError(String),
}

impl From<serde_json::Error> for SimilarityError {
    fn from(error: serde_json::Error) -> SimilarityError {
        SimilarityError::ConfigError(error.to_string())
    }
}
