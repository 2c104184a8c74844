use tracing::{debug, warn};

use crate::fetch::FlightApi;
use crate::model::Place;

/// Looks up airports by free text. Blank input short-circuits without a
/// request, and failures are logged and reported as no candidates.
pub async fn search_airports<A: FlightApi>(api: &A, text: &str) -> Vec<Place> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    match api.airports(text).await {
        Ok(places) => {
            debug!(query = text, count = places.len(), "airport lookup finished");
            places
        }
        Err(e) => {
            warn!(query = text, kind = e.kind(), "airport lookup failed: {e}");
            Vec::new()
        }
    }
}
