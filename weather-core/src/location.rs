//! Location resolution: free-text place name to coordinates.

use tracing::{debug, warn};

use crate::{error::ResolutionError, http::HttpClient, model::LocationInfo};

/// Geocode `query` against `api_url` and return the first match.
///
/// `api_key` is sent as the `api_key` query parameter when present.
pub async fn fetch_location_data(
    http: &dyn HttpClient,
    api_url: &str,
    query: &str,
    api_key: Option<&str>,
) -> Result<LocationInfo, ResolutionError> {
    debug!(query, "geocoding location");

    let mut params = vec![("q", query.to_string())];
    if let Some(key) = api_key {
        params.push(("api_key", key.to_string()));
    }

    let body = http
        .get(api_url, &params)
        .await
        .inspect_err(|e| warn!(error = %e, "geocoding request failed"))?;

    let candidates: Vec<LocationInfo> = serde_json::from_str(&body)?;

    let location = candidates
        .into_iter()
        .next()
        .ok_or_else(|| ResolutionError::NotFound { query: query.to_string() })?;

    debug!(
        "Resolved '{}' to {} ({:.4}, {:.4})",
        query, location.display_name, location.lat, location.lon
    );

    Ok(location)
}
