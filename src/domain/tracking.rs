//! Public tracking records returned to library consumers.
//!
//! A [`Tracking`] always carries the input code verbatim plus exactly one of
//! a found record or a fault kind. Faults are data, never panics or errors
//! crossing the `track` boundary. Serialisation keeps the carrier-consumer
//! convention of camelCase keys with a flattened outcome, so a found record
//! renders as `{code, category, events, isDelivered, postedAt, updatedAt}`
//! and a failed one as `{code, isInvalid, error}`.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Why a lookup yielded no tracking history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingFault {
    /// The code fails the structural pattern; no network call was made.
    InvalidCode,
    /// The carrier responded but does not know the code.
    NotFound,
    /// Transport, decode, or authentication failure talking to the carrier.
    ServiceUnavailable,
}

impl fmt::Display for TrackingFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidCode => "invalid_code",
            Self::NotFound => "not_found",
            Self::ServiceUnavailable => "service_unavailable",
        };
        f.write_str(label)
    }
}

/// One historical milestone of a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    /// `"City / UF"` for domestic facilities; `None` for international ones.
    pub locality: Option<String>,
    /// Status text in the carrier's own wording, untranslated.
    pub status: String,
    /// Human-readable description of the recording facility.
    pub origin: String,
    /// Origin of the routing-destination facility, when one was reported.
    pub destination: Option<String>,
    /// When the carrier recorded the event (carrier-local clock, no zone).
    pub tracked_at: NaiveDateTime,
}

/// Carrier postal-service classification shown to end users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category name, defaulted to the unknown sentinel when absent.
    pub name: String,
    /// Category description, defaulted to the unidentified sentinel when absent.
    pub description: String,
}

/// Normalised history for a code the carrier recognised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRecord {
    /// Postal-service classification of the object.
    pub category: Category,
    /// Handling history, newest first; never empty.
    pub events: Vec<TrackingEvent>,
    /// True when the newest event reports delivery.
    pub is_delivered: bool,
    /// Timestamp of the oldest event (posting).
    pub posted_at: NaiveDateTime,
    /// Timestamp of the newest event.
    pub updated_at: NaiveDateTime,
}

/// Failure shape for a lookup that produced no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingFailure {
    /// Always true; kept so serialised failures stay self-describing.
    pub is_invalid: bool,
    /// What went wrong.
    pub error: TrackingFault,
}

/// Exactly one of a found record or a failure shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackingOutcome {
    /// The carrier returned a usable history.
    Found(TrackingRecord),
    /// The lookup failed; the fault kind says why.
    Failed(TrackingFailure),
}

/// Public result of tracking one shipment code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracking {
    /// The input code, verbatim.
    pub code: String,
    /// Found record or failure shape.
    #[serde(flatten)]
    pub outcome: TrackingOutcome,
}

impl Tracking {
    /// Wrap a found record for `code`.
    pub fn found(code: impl Into<String>, record: TrackingRecord) -> Self {
        Self {
            code: code.into(),
            outcome: TrackingOutcome::Found(record),
        }
    }

    /// Build the failure shape for `code`.
    pub fn failed(code: impl Into<String>, fault: TrackingFault) -> Self {
        Self {
            code: code.into(),
            outcome: TrackingOutcome::Failed(TrackingFailure {
                is_invalid: true,
                error: fault,
            }),
        }
    }

    /// The found record, when the lookup succeeded.
    pub fn record(&self) -> Option<&TrackingRecord> {
        match &self.outcome {
            TrackingOutcome::Found(record) => Some(record),
            TrackingOutcome::Failed(_) => None,
        }
    }

    /// The fault kind, when the lookup failed.
    pub fn fault(&self) -> Option<TrackingFault> {
        match &self.outcome {
            TrackingOutcome::Found(_) => None,
            TrackingOutcome::Failed(failure) => Some(failure.error),
        }
    }

    /// True when the newest event reports delivery; false for faults.
    pub fn is_delivered(&self) -> bool {
        self.record().is_some_and(|record| record.is_delivered)
    }
}
