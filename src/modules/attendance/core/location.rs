// Location labels stored on a shift record.
//
// Purpose
// - Turn a reverse-geocode result into the human-readable label the client shows and stores.
// - Fall back to a placeholder when no usable label exists, since location is best effort.

use serde::Deserialize;

pub const UNRESOLVED_ADDRESS: &str = "Unable to retrieve address";
pub const DEFAULT_LOCATION_PLACEHOLDER: &str = "Location not available";

/// First result of the device location service's reverse geocoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GeocodedAddress {
    pub name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
}

/// `"{name}, {street}, {city}, {region}"`, leaving out absent or blank parts.
pub fn format_address(address: Option<&GeocodedAddress>) -> String {
    let Some(address) = address else {
        return UNRESOLVED_ADDRESS.to_string();
    };
    let parts: Vec<&str> = [&address.name, &address.street, &address.city, &address.region]
        .into_iter()
        .filter_map(|part| part.as_deref().map(str::trim))
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return UNRESOLVED_ADDRESS.to_string();
    }
    parts.join(", ")
}

pub fn resolve_label(label: Option<&str>, placeholder: &str) -> String {
    match label.map(str::trim) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => placeholder.to_string(),
    }
}
