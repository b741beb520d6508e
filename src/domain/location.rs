//! Facility-to-location resolution rules.
//!
//! The carrier attaches one of two facility shapes to every event: domestic
//! units carry a city/state address, while international legs use a
//! country-level placeholder whose declared type is the `País` marker. The
//! branch is exhaustive; the carrier schema has no third facility class.

use crate::domain::payload::CarrierUnit;
use crate::domain::text::capitalize_words;

/// Declared facility type marking a country-level placeholder.
pub const INTERNATIONAL_UNIT_KIND: &str = "País";

/// Human-readable origin/locality pair derived from one facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// `"City / UF"` for domestic facilities; `None` for international ones.
    pub locality: Option<String>,
    /// Display label for the facility itself.
    pub origin: String,
}

/// Resolve a facility record into its origin/locality pair.
pub fn resolve(unit: &CarrierUnit) -> ResolvedLocation {
    if unit.kind == INTERNATIONAL_UNIT_KIND {
        resolve_international(unit)
    } else {
        resolve_domestic(unit)
    }
}

fn resolve_international(unit: &CarrierUnit) -> ResolvedLocation {
    ResolvedLocation {
        locality: None,
        origin: capitalize_words(unit.name.as_deref().unwrap_or_default()),
    }
}

fn resolve_domestic(unit: &CarrierUnit) -> ResolvedLocation {
    let address = unit.address.as_ref();
    let city = capitalize_words(
        address
            .and_then(|address| address.city.as_deref())
            .unwrap_or_default(),
    );
    let state = address
        .and_then(|address| address.state.as_deref())
        .unwrap_or_default();
    let locality = format!("{city} / {state}");
    ResolvedLocation {
        origin: format!("{} - {locality}", unit.kind),
        locality: Some(locality),
    }
}
