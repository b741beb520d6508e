//! Correios-facing transport adapter.
//!
//! One adapter serves both carrier protocol variants: the legacy
//! unauthenticated GET and the newer signed-login exchange. The variant is
//! a constructor-time capability, not a separate code path.

mod auth;
mod config;
mod http_source;

pub use self::config::{ConfigDecodeError, CorreiosEndpoints};
pub use self::http_source::{ClientBuildError, CorreiosHttpSource, Protocol};
