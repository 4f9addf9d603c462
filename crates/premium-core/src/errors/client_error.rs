//! Prediction client transport errors.

use super::error_code::{self, PremiumErrorCode};
use crate::models::TransportFailure;

/// Failures below the HTTP status line: the request never produced a
/// usable response.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("connection failed: {reason}")]
    Connect { reason: String },

    #[error("request timed out: {reason}")]
    Timeout { reason: String },

    #[error("response body could not be decoded: {reason}")]
    Decode { reason: String },

    #[error("response has no prediction field")]
    MissingPrediction,

    #[error("transport error: {reason}")]
    Other { reason: String },
}

impl ClientError {
    /// Collapse into the coarse failure kind carried by the outcome.
    pub fn failure(&self) -> TransportFailure {
        match self {
            Self::Connect { .. } => TransportFailure::Connect,
            Self::Timeout { .. } => TransportFailure::Timeout,
            Self::Decode { .. } => TransportFailure::Decode,
            Self::MissingPrediction => TransportFailure::MissingPrediction,
            Self::Other { .. } => TransportFailure::Other,
        }
    }
}

impl PremiumErrorCode for ClientError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Connect { .. } => error_code::CONNECT_ERROR,
            Self::Timeout { .. } => error_code::TIMEOUT,
            Self::Decode { .. } => error_code::DECODE_ERROR,
            Self::MissingPrediction => error_code::MISSING_PREDICTION,
            Self::Other { .. } => error_code::TRANSPORT_ERROR,
        }
    }
}
