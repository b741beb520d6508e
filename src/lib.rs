//! Typed client for the Correios SRO parcel-tracking service.
//!
//! The carrier's JSON responses have no formal contract: optional fields,
//! locale-specific strings, and an obfuscated endpoint/credential layer.
//! This crate hides all of that behind a normalised domain model: validate
//! shipment codes, fetch histories in bounded-parallel batches, and read
//! deterministic delivered and posted/updated derivations.
//!
//! Lookups never fail as a whole: every code yields exactly one
//! [`Tracking`], fault-shaped (`invalid_code`, `not_found`,
//! `service_unavailable`) when the lookup could not produce a history.
//!
//! ```no_run
//! # async fn run() -> Result<(), correios_sro::ClientBuildError> {
//! let records = correios_sro::track(["AB123456789CD", "QJ987654321BR"]).await?;
//! for tracking in &records {
//!     match tracking.record() {
//!         Some(record) => println!("{}: delivered={}", tracking.code, record.is_delivered),
//!         None => println!("{}: {:?}", tracking.code, tracking.fault()),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Reuse an [`SroClient`] across batches to share the underlying HTTP
//! client, and pick the carrier protocol variant at construction time:
//!
//! ```no_run
//! # async fn run() -> Result<(), correios_sro::ClientBuildError> {
//! use correios_sro::{Protocol, SroClient};
//!
//! let client = SroClient::with_protocol(Protocol::HandshakeAuth)?;
//! let tracking = client.track_one("AB123456789CD").await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod domain;
pub mod outbound;

pub use self::client::{PARALLEL_TRACKS, SroClient};
pub use self::domain::code::is_valid_order_code;
pub use self::domain::ports::{CarrierSource, CarrierSourceError};
pub use self::domain::tracking::{
    Category, Tracking, TrackingEvent, TrackingFailure, TrackingFault, TrackingOutcome,
    TrackingRecord,
};
pub use self::outbound::correios::{
    ClientBuildError, ConfigDecodeError, CorreiosEndpoints, CorreiosHttpSource, Protocol,
};

/// Track every code in `codes` with a fresh default client.
///
/// Convenience wrapper over [`SroClient::track`] for one-shot lookups;
/// construct a client once instead when tracking repeatedly.
///
/// # Errors
///
/// Returns an error when the default client cannot be constructed. Lookup
/// failures are data inside the returned records, never an `Err`.
pub async fn track<I, C>(codes: I) -> Result<Vec<Tracking>, ClientBuildError>
where
    I: IntoIterator<Item = C>,
    C: Into<String>,
{
    Ok(SroClient::new()?.track(codes).await)
}

/// Track a single code with a fresh default client.
///
/// # Errors
///
/// Returns an error when the default client cannot be constructed.
pub async fn track_one(code: &str) -> Result<Tracking, ClientBuildError> {
    Ok(SroClient::new()?.track_one(code).await)
}
