//! Region resolution.
//!
//! An explicit region wins. Otherwise the availability zone of the current
//! instance is looked up once and its trailing zone letter stripped
//! (`eu-west-1b` → `eu-west-1`).

use std::future::Future;

use crate::aws::types::RegionResolutionError;

/// Anything that can name the availability zone the check runs in.
pub trait ZoneSource {
    fn availability_zone(&self) -> impl Future<Output = Result<String, RegionResolutionError>> + Send;
}

/// Strip the zone letter from an availability zone name.
pub fn region_from_zone(zone: &str) -> Result<String, RegionResolutionError> {
    let zone = zone.trim();
    let malformed = || RegionResolutionError::Malformed(zone.to_string());

    let mut chars = zone.chars();
    let letter = chars.next_back().ok_or_else(malformed)?;
    let region = chars.as_str();
    if !letter.is_ascii_lowercase() || region.is_empty() || !region.ends_with(|c: char| c.is_ascii_digit()) {
        return Err(malformed());
    }
    Ok(region.to_string())
}

/// Use `explicit` when non-empty, otherwise ask `zones`.
pub async fn resolve_region<Z: ZoneSource>(
    explicit: Option<&str>,
    zones: &Z,
) -> Result<String, RegionResolutionError> {
    if let Some(region) = explicit.map(str::trim).filter(|r| !r.is_empty()) {
        return Ok(region.to_string());
    }

    let zone = zones.availability_zone().await?;
    let region = region_from_zone(&zone)?;
    tracing::debug!(zone = %zone, region = %region, "Region resolved from instance metadata");
    Ok(region)
}
