//! Outbound adapters talking to the carrier.

pub mod correios;
