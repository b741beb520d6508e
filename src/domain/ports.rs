//! Driven port for fetching tracking data from the carrier.
//!
//! The domain owns the fetch contract so the batch orchestrator stays
//! adapter-agnostic: tests substitute a mock source, and both carrier
//! protocol variants sit behind the same seam.

use async_trait::async_trait;

use crate::domain::tracking::Tracking;

/// Errors surfaced while calling the carrier.
///
/// The orchestrator collapses every variant into the `service_unavailable`
/// fault; the distinction exists for logging and for adapter tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarrierSourceError {
    /// Network transport failed before a response arrived.
    #[error("carrier transport failed: {message}")]
    Transport {
        /// Adapter description of the failure.
        message: String,
    },
    /// The transport's own deadline expired.
    #[error("carrier request timed out: {message}")]
    Timeout {
        /// Adapter description of the failure.
        message: String,
    },
    /// The carrier answered with a non-success status.
    #[error("carrier returned status {status}: {message}")]
    UpstreamStatus {
        /// HTTP status code.
        status: u16,
        /// Body preview attached for diagnosis.
        message: String,
    },
    /// The response body could not be decoded as the carrier schema.
    #[error("carrier response decode failed: {message}")]
    Decode {
        /// Adapter description of the failure.
        message: String,
    },
}

impl CarrierSourceError {
    /// Build a [`CarrierSourceError::Transport`].
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Build a [`CarrierSourceError::Timeout`].
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Build a [`CarrierSourceError::UpstreamStatus`].
    pub fn upstream_status(status: u16, message: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            message: message.into(),
        }
    }

    /// Build a [`CarrierSourceError::Decode`].
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Port for fetching the normalised tracking history of one code.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CarrierSource: Send + Sync {
    /// Fetch and normalise the carrier payload for one shipment code.
    ///
    /// A carrier that answers but does not know the code is not an error:
    /// the adapter returns a `not_found`-shaped [`Tracking`]. Errors are
    /// reserved for transport, status, and decode failures.
    async fn fetch_tracking(&self, code: &str) -> Result<Tracking, CarrierSourceError>;
}
