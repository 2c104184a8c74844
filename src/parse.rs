use serde_json::Value;

use crate::error::SearchError;
use crate::model::*;

fn rejection_message(message: &Value) -> String {
    match message {
        Value::String(s) if !s.is_empty() => s.clone(),
        Value::Null => "no reason given".to_string(),
        other => other.to_string(),
    }
}

pub fn parse_airports(body: &str) -> Result<Vec<Place>, SearchError> {
    let response: AirportResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    if !response.status {
        return Err(SearchError::Rejected(rejection_message(&response.message)));
    }

    Ok(response.data.into_iter().map(Place::from).collect())
}

pub fn parse_flight_response(body: &str) -> Result<FlightSearchData, SearchError> {
    let response: FlightSearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::Decode(e.to_string()))?;

    if !response.status {
        return Err(SearchError::Rejected(rejection_message(&response.message)));
    }

    Ok(response.data.unwrap_or_default())
}

pub fn parse_flights(body: &str) -> Result<Vec<Itinerary>, SearchError> {
    parse_flight_response(body).map(|data| data.itineraries)
}
