//! Embedded carrier configuration.
//!
//! Endpoint URLs, the login request-token, and the user-agent pool are kept
//! base64-encoded at rest and decoded when a source is constructed. The
//! encoding is obfuscation of configuration data, nothing more; the decoded
//! values carry no further structure.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

const TRACKING_ENDPOINT: &str = "aHR0cHM6Ly9wcm94eWFwcC5jb3JyZWlvcy5jb20uYnIvdjEvc3JvLXJhc3Ryby8=";

const LOGIN_ENDPOINT: &str = "aHR0cHM6Ly9wcm94eWFwcC5jb3JyZWlvcy5jb20uYnIvdjEvYXBwLXZhbGlkYXRpb24=";

const LOGIN_REQUEST_TOKEN: &str =
    "YW5kcm9pZDtici5jb20uY29ycmVpb3MucHJlYXRlbmRpbWVudG87NUE2MTRCMUQ1RTlGMkM4M0I3QTBENEY2RThDOTFBMzVEMkI0QzZFOA==";

const USER_AGENTS: [&str; 5] = [
    "TW96aWxsYS81LjAgKFdpbmRvd3MgTlQgMTAuMDsgV2luNjQ7IHg2NCkgQXBwbGVXZWJLaXQvNTM3LjM2IChLSFRNTCwgbGlrZSBHZWNrbykgQ2hyb21lLzk3LjAuNDY5Mi45OSBTYWZhcmkvNTM3LjM2",
    "TW96aWxsYS81LjAgKFdpbmRvd3MgTlQgMTAuMDsgV2luNjQ7IHg2NDsgcnY6OTUuMCkgR2Vja28vMjAxMDAxMDEgRmlyZWZveC85NS4w",
    "TW96aWxsYS81LjAgKFdpbmRvd3MgTlQgMTAuMDsgV2luNjQ7IHg2NCkgQXBwbGVXZWJLaXQvNTM3LjM2IChLSFRNTCwgbGlrZSBHZWNrbykgQ2hyb21lLzkwLjAuNDQzMC45MyBTYWZhcmkvNTM3LjM2",
    "TW96aWxsYS81LjAgKFdpbmRvd3MgTlQgMTAuMDsgV2luNjQ7IHg2NCkgQXBwbGVXZWJLaXQvNTM3LjM2IChLSFRNTCwgbGlrZSBHZWNrbykgQ2hyb21lLzk2LjAuNDY2NC4xMTAgU2FmYXJpLzUzNy4zNiBFZGcvOTYuMC4xMDU0LjYy",
    "TW96aWxsYS81LjAgKFdpbmRvd3MgTlQgMTAuMDsgV2luNjQ7IHg2NDsgcnY6OTQuMCkgR2Vja28vMjAxMDAxMDEgRmlyZWZveC85NC4w",
];

/// Failures decoding the embedded configuration constants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigDecodeError {
    /// A constant is not valid base64.
    #[error("embedded constant is not valid base64: {0}")]
    Base64(String),
    /// A constant decoded to bytes that are not UTF-8.
    #[error("embedded constant is not valid utf-8: {0}")]
    Utf8(String),
}

/// Decoded carrier endpoints and credential material.
///
/// The embedded defaults point at the production carrier; tests and
/// alternative deployments may substitute their own values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorreiosEndpoints {
    /// Base URL the shipment code is appended to.
    pub tracking_url: String,
    /// Login endpoint for the authenticated protocol variant.
    pub login_url: String,
    /// Fixed request-token constant signed into every login request.
    pub request_token: String,
}

impl CorreiosEndpoints {
    /// Decode the embedded endpoint and credential constants.
    ///
    /// # Errors
    ///
    /// Returns an error when an embedded constant fails to decode, which
    /// only happens if the constants themselves are corrupted.
    pub fn embedded() -> Result<Self, ConfigDecodeError> {
        Ok(Self {
            tracking_url: decode(TRACKING_ENDPOINT)?,
            login_url: decode(LOGIN_ENDPOINT)?,
            request_token: decode(LOGIN_REQUEST_TOKEN)?,
        })
    }
}

pub(super) fn decode(value: &str) -> Result<String, ConfigDecodeError> {
    let bytes = BASE64
        .decode(value)
        .map_err(|error| ConfigDecodeError::Base64(error.to_string()))?;
    String::from_utf8(bytes).map_err(|error| ConfigDecodeError::Utf8(error.to_string()))
}

pub(super) fn user_agent_pool() -> Result<Vec<String>, ConfigDecodeError> {
    USER_AGENTS.iter().map(|encoded| decode(encoded)).collect()
}
