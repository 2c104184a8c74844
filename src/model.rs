use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An airport or city the flight API can route between.
///
/// `id` is the upstream entity id and `display_code` the short sky id
/// (usually an IATA code). Both are needed to search flights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub display_code: String,
    pub name: String,
    pub city_name: String,
    pub suggestion_title: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirportRecord {
    pub entity_id: String,
    pub sky_id: String,
    pub presentation: Presentation,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub suggestion_title: String,
}

impl From<AirportRecord> for Place {
    fn from(record: AirportRecord) -> Self {
        Self {
            id: record.entity_id,
            display_code: record.sky_id,
            name: record.presentation.title,
            city_name: record.presentation.subtitle,
            suggestion_title: record.presentation.suggestion_title,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirportResponse {
    #[serde(default = "default_status")]
    pub status: bool,
    #[serde(default)]
    pub message: Value,
    #[serde(default)]
    pub data: Vec<AirportRecord>,
}

fn default_status() -> bool {
    true
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrier {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_id: Option<String>,
}

/// Endpoint of a leg or segment. Legs carry `id`/`city`, segments carry
/// `flightPlaceId`; both share the display code and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPlace {
    #[serde(default, alias = "flightPlaceId")]
    pub id: String,
    pub display_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(default)]
    pub id: String,
    pub origin: FlightPlace,
    pub destination: FlightPlace,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    #[serde(rename = "durationInMinutes")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub flight_number: String,
    #[serde(default)]
    pub marketing_carrier: Carrier,
    #[serde(default)]
    pub operating_carrier: Carrier,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegCarriers {
    #[serde(default)]
    pub marketing: Vec<Carrier>,
    #[serde(default)]
    pub operation_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub id: String,
    pub origin: FlightPlace,
    pub destination: FlightPlace,
    pub departure: NaiveDateTime,
    pub arrival: NaiveDateTime,
    #[serde(rename = "durationInMinutes")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub stop_count: u32,
    #[serde(default)]
    pub time_delta_in_days: i32,
    #[serde(default)]
    pub carriers: LegCarriers,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub raw: f64,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub price: Price,
    pub legs: Vec<Leg>,
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub is_self_transfer: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchContext {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_results: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearchData {
    #[serde(default)]
    pub itineraries: Vec<Itinerary>,
    #[serde(default)]
    pub context: SearchContext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlightSearchResponse {
    pub status: bool,
    #[serde(default)]
    pub message: Value,
    #[serde(default)]
    pub data: Option<FlightSearchData>,
}
