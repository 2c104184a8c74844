use tracing::{debug, info};

use crate::error::SearchError;
use crate::fetch::FlightApi;
use crate::model::Itinerary;
use crate::query::SearchQuery;

pub async fn search_flights<A: FlightApi>(
    api: &A,
    query: &SearchQuery,
) -> Result<Vec<Itinerary>, SearchError> {
    match api.flights(query).await {
        Ok(itineraries) => {
            info!(
                from = %query.origin.display_code,
                to = %query.destination.display_code,
                count = itineraries.len(),
                "flight search finished"
            );
            Ok(itineraries)
        }
        Err(e) => {
            debug!(
                from = %query.origin.display_code,
                to = %query.destination.display_code,
                kind = e.kind(),
                "flight search failed: {e}"
            );
            Err(e)
        }
    }
}
