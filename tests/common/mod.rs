#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::{json, Value};

use skyfare::error::SearchError;
use skyfare::fetch::FlightApi;
use skyfare::model::{Itinerary, Place};
use skyfare::query::SearchQuery;

pub enum FlightsReply {
    Ok(Vec<Itinerary>),
    Status(u16),
    Transport,
}

pub struct StubApi {
    pub places: Option<Vec<Place>>,
    pub flights: FlightsReply,
    pub airport_calls: AtomicUsize,
    pub flight_calls: AtomicUsize,
}

impl StubApi {
    pub fn new(places: Vec<Place>, flights: FlightsReply) -> Self {
        Self {
            places: Some(places),
            flights,
            airport_calls: AtomicUsize::new(0),
            flight_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing_lookup() -> Self {
        Self {
            places: None,
            ..Self::new(vec![], FlightsReply::Transport)
        }
    }

    pub fn airport_calls(&self) -> usize {
        self.airport_calls.load(Ordering::SeqCst)
    }

    pub fn flight_calls(&self) -> usize {
        self.flight_calls.load(Ordering::SeqCst)
    }
}

impl FlightApi for StubApi {
    async fn airports(&self, text: &str) -> Result<Vec<Place>, SearchError> {
        self.airport_calls.fetch_add(1, Ordering::SeqCst);
        let needle = text.to_lowercase();
        match &self.places {
            Some(places) => Ok(places
                .iter()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect()),
            None => Err(SearchError::Transport("connection refused".into())),
        }
    }

    async fn flights(&self, _query: &SearchQuery) -> Result<Vec<Itinerary>, SearchError> {
        self.flight_calls.fetch_add(1, Ordering::SeqCst);
        match &self.flights {
            FlightsReply::Ok(itineraries) => Ok(itineraries.clone()),
            FlightsReply::Status(status) => Err(SearchError::Upstream(*status)),
            FlightsReply::Transport => Err(SearchError::Transport("connection reset".into())),
        }
    }
}

pub fn place(code: &str, id: &str, name: &str) -> Place {
    Place {
        id: id.into(),
        display_code: code.into(),
        name: name.into(),
        city_name: String::new(),
        suggestion_title: format!("{name} ({code})"),
    }
}

pub fn gru() -> Place {
    place("GRU", "95673635", "Sao Paulo Guarulhos")
}

pub fn jfk() -> Place {
    place("JFK", "95565058", "New York John F. Kennedy")
}

pub fn carrier(name: &str) -> Value {
    json!({ "id": -32576, "name": name, "logoUrl": format!("https://logos.example/{name}.png") })
}

pub fn segment(from: &str, to: &str, departure: &str, arrival: &str, minutes: u32) -> Value {
    json!({
        "id": format!("{from}-{to}"),
        "origin": { "flightPlaceId": from, "displayCode": from, "name": format!("{from} Airport") },
        "destination": { "flightPlaceId": to, "displayCode": to, "name": format!("{to} Airport") },
        "departure": departure,
        "arrival": arrival,
        "durationInMinutes": minutes,
        "flightNumber": "1234",
        "marketingCarrier": carrier("LATAM"),
        "operatingCarrier": carrier("LATAM")
    })
}

pub fn leg(from: &str, to: &str, minutes: u32, segments: Vec<Value>, carriers: Vec<Value>) -> Value {
    json!({
        "id": format!("{from}-{to}"),
        "origin": { "id": from, "displayCode": from, "name": format!("{from} Airport"), "city": from },
        "destination": { "id": to, "displayCode": to, "name": format!("{to} Airport"), "city": to },
        "durationInMinutes": minutes,
        "stopCount": segments.len().saturating_sub(1),
        "departure": "2026-03-01T22:10:00",
        "arrival": "2026-03-02T06:45:00",
        "timeDeltaInDays": 1,
        "carriers": { "marketing": carriers, "operationType": "fully_operated" },
        "segments": segments
    })
}

pub fn itinerary_json(id: &str, legs: Vec<Value>) -> Value {
    json!({
        "id": id,
        "price": { "raw": 4210.5, "formatted": "R$ 4.211" },
        "legs": legs,
        "score": 0.87
    })
}

pub fn itinerary(id: &str, legs: Vec<Value>) -> Itinerary {
    serde_json::from_value(itinerary_json(id, legs)).expect("valid itinerary fixture")
}

pub fn nonstop(id: &str) -> Itinerary {
    itinerary(
        id,
        vec![leg(
            "GRU",
            "JFK",
            575,
            vec![segment("GRU", "JFK", "2026-03-01T22:10:00", "2026-03-02T06:45:00", 575)],
            vec![carrier("LATAM")],
        )],
    )
}
