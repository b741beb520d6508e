//! Signed login request for the authenticated protocol variant.
//!
//! The carrier validates the signature server-side: an MD5 digest of the
//! request-token constant concatenated with a locale-formatted timestamp.
//! The digest algorithm is mandated by the carrier and must match
//! bit-for-bit; it is not a security choice of this crate.

use chrono::{DateTime, FixedOffset, Utc};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

/// Timestamp layout the carrier expects in the login body.
pub(super) const LOGIN_TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Carrier reference clock: Brasília time, fixed UTC-3.
const CARRIER_UTC_OFFSET_SECONDS: i32 = 3 * 3600;

/// Login request body: the request-token constant, the formatted issuance
/// timestamp, and the keyed digest over both. Used once and discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SignedLogin {
    pub(super) request_token: String,
    pub(super) data: String,
    pub(super) sign: String,
}

/// Login response carrying the short-lived bearer token.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct LoginGrant {
    pub(super) token: String,
}

/// Current wall-clock time on the carrier's reference clock.
pub(super) fn carrier_clock() -> DateTime<FixedOffset> {
    let offset =
        FixedOffset::west_opt(CARRIER_UTC_OFFSET_SECONDS).expect("carrier offset is in range");
    Utc::now().with_timezone(&offset)
}

/// Derive the signed login request issued at `issued_at`.
pub(super) fn signed_login(request_token: &str, issued_at: DateTime<FixedOffset>) -> SignedLogin {
    let data = issued_at.format(LOGIN_TIMESTAMP_FORMAT).to_string();
    let mut hasher = Md5::new();
    hasher.update(request_token.as_bytes());
    hasher.update(data.as_bytes());
    let sign = hex::encode(hasher.finalize());

    SignedLogin {
        request_token: request_token.to_owned(),
        data,
        sign,
    }
}
