//! Reqwest-backed carrier source adapter.
//!
//! The adapter owns transport details only: endpoint resolution, the
//! optional login handshake, HTTP error mapping, and JSON decoding handed
//! to the domain normaliser. Both protocol variants share this one
//! implementation behind the [`Protocol`] switch.

use rand::seq::SliceRandom;
use reqwest::{Client, StatusCode, header};
use tracing::debug;

use super::auth::{LoginGrant, carrier_clock, signed_login};
use super::config::{self, ConfigDecodeError, CorreiosEndpoints};
use crate::domain::normalize::normalize;
use crate::domain::payload::CarrierResponse;
use crate::domain::ports::{CarrierSource, CarrierSourceError};
use crate::domain::tracking::Tracking;

/// Header carrying the short-lived bearer token on tracking requests.
const APP_CHECK_TOKEN_HEADER: &str = "app-check-token";

/// Carrier protocol variant spoken by the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Protocol {
    /// Single unauthenticated GET against the tracking endpoint.
    #[default]
    NoAuth,
    /// Signed login exchange first; the issued token authenticates the GET.
    HandshakeAuth,
}

/// Failures constructing a source or client.
#[derive(Debug, thiserror::Error)]
pub enum ClientBuildError {
    /// The embedded configuration constants failed to decode.
    #[error("embedded carrier configuration is invalid: {0}")]
    Config(#[from] ConfigDecodeError),
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Carrier source adapter performing HTTP requests against one endpoint set.
#[derive(Debug, Clone)]
pub struct CorreiosHttpSource {
    client: Client,
    protocol: Protocol,
    endpoints: CorreiosEndpoints,
    user_agents: Vec<String>,
}

impl CorreiosHttpSource {
    /// Build an adapter against the embedded production endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error when the embedded constants fail to decode or the
    /// reqwest client cannot be constructed.
    pub fn new(protocol: Protocol) -> Result<Self, ClientBuildError> {
        Self::with_endpoints(protocol, CorreiosEndpoints::embedded()?)
    }

    /// Build an adapter against explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_endpoints(
        protocol: Protocol,
        endpoints: CorreiosEndpoints,
    ) -> Result<Self, ClientBuildError> {
        let client = Client::builder().build()?;
        let user_agents = config::user_agent_pool()?;
        Ok(Self {
            client,
            protocol,
            endpoints,
            user_agents,
        })
    }

    fn tracking_url(&self, code: &str) -> String {
        format!("{}{code}", self.endpoints.tracking_url)
    }

    /// Pick one browser signature uniformly at random. The pool is fixed
    /// padding against request fingerprinting, not a functional contract.
    fn pick_user_agent(&self) -> &str {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .expect("user-agent pool is not empty")
    }

    /// Exchange a signed login request for a short-lived bearer token.
    async fn login(&self) -> Result<String, CarrierSourceError> {
        let login = signed_login(&self.endpoints.request_token, carrier_clock());
        debug!("requesting carrier access token");

        let response = self
            .client
            .post(&self.endpoints.login_url)
            .header(header::USER_AGENT, self.pick_user_agent())
            .json(&login)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let grant: LoginGrant = serde_json::from_slice(body.as_ref()).map_err(|error| {
            CarrierSourceError::decode(format!("invalid login payload: {error}"))
        })?;
        Ok(grant.token)
    }
}

#[async_trait::async_trait]
impl CarrierSource for CorreiosHttpSource {
    async fn fetch_tracking(&self, code: &str) -> Result<Tracking, CarrierSourceError> {
        let token = match self.protocol {
            Protocol::NoAuth => None,
            Protocol::HandshakeAuth => Some(self.login().await?),
        };

        debug!(%code, "requesting tracking history");
        let mut request = self
            .client
            .get(self.tracking_url(code))
            .header(header::USER_AGENT, self.pick_user_agent())
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.header(APP_CHECK_TOKEN_HEADER, token);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_tracking_body(body.as_ref(), code)
    }
}

fn parse_tracking_body(body: &[u8], code: &str) -> Result<Tracking, CarrierSourceError> {
    let decoded: CarrierResponse = serde_json::from_slice(body).map_err(|error| {
        CarrierSourceError::decode(format!("invalid tracking payload: {error}"))
    })?;
    Ok(normalize(decoded, code))
}

fn map_transport_error(error: reqwest::Error) -> CarrierSourceError {
    if error.is_timeout() {
        CarrierSourceError::timeout(error.to_string())
    } else {
        CarrierSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> CarrierSourceError {
    let preview = body_preview(body);
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CarrierSourceError::timeout(format!("status {}: {preview}", status.as_u16()))
        }
        _ => CarrierSourceError::upstream_status(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
