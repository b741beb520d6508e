//! Batch orchestration of tracking lookups.
//!
//! The client validates codes, fans lookups out in bounded groups, and
//! aggregates results in input order. Failures never abort a batch: every
//! code yields exactly one [`Tracking`], fault-shaped when needed.

use std::fmt;
use std::sync::Arc;

use futures_util::future::join_all;
use tracing::warn;

use crate::domain::code::is_valid_order_code;
use crate::domain::ports::CarrierSource;
use crate::domain::tracking::{Tracking, TrackingFault};
use crate::outbound::correios::{ClientBuildError, CorreiosHttpSource, Protocol};

/// Maximum number of tracking requests in flight at any instant.
///
/// Input is partitioned into consecutive groups of this size; groups run
/// strictly in sequence while lookups within a group run concurrently, so
/// N codes resolve in ceil(N / 10) sequential rounds.
pub const PARALLEL_TRACKS: usize = 10;

/// Client for the carrier's shipment-tracking service.
///
/// Cheap to clone; the underlying source is shared. Generic over the
/// [`CarrierSource`] so tests and alternative transports can substitute
/// their own implementation via [`SroClient::from_source`].
pub struct SroClient<S: CarrierSource = CorreiosHttpSource> {
    source: Arc<S>,
}

impl SroClient {
    /// Build a client speaking the default (unauthenticated) protocol.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded configuration fails to decode or
    /// the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ClientBuildError> {
        Self::with_protocol(Protocol::default())
    }

    /// Build a client speaking the given carrier protocol variant.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded configuration fails to decode or
    /// the HTTP client cannot be constructed.
    pub fn with_protocol(protocol: Protocol) -> Result<Self, ClientBuildError> {
        Ok(Self::from_source(Arc::new(CorreiosHttpSource::new(
            protocol,
        )?)))
    }
}

impl<S: CarrierSource> SroClient<S> {
    /// Build a client over an explicit carrier source.
    pub fn from_source(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Track every code in `codes`, preserving input order and length.
    ///
    /// Duplicates are looked up independently. Lookups run in groups of at
    /// most [`PARALLEL_TRACKS`]; a group must fully resolve before the next
    /// one starts. Never fails as a whole: each code maps to exactly one
    /// [`Tracking`], fault-shaped on invalid codes, unknown codes, or
    /// carrier failures.
    pub async fn track<I, C>(&self, codes: I) -> Vec<Tracking>
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        let codes: Vec<String> = codes.into_iter().map(Into::into).collect();
        let mut records = Vec::with_capacity(codes.len());
        for group in codes.chunks(PARALLEL_TRACKS) {
            let group_records = join_all(group.iter().map(|code| self.fetch_one(code))).await;
            records.extend(group_records);
        }
        records
    }

    /// Track a single code through the same path as [`SroClient::track`].
    pub async fn track_one(&self, code: &str) -> Tracking {
        self.fetch_one(code).await
    }

    async fn fetch_one(&self, code: &str) -> Tracking {
        if !is_valid_order_code(code) {
            return Tracking::failed(code, TrackingFault::InvalidCode);
        }

        match self.source.fetch_tracking(code).await {
            Ok(tracking) => tracking,
            Err(error) => {
                warn!(%code, %error, "tracking lookup failed");
                Tracking::failed(code, TrackingFault::ServiceUnavailable)
            }
        }
    }
}

impl<S: CarrierSource> Clone for SroClient<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: CarrierSource> fmt::Debug for SroClient<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SroClient").finish_non_exhaustive()
    }
}
