//! Display values derived from one itinerary.
//!
//! Everything here is pure and tolerant of thin upstream data: a missing
//! leg or carrier yields `None` or a placeholder, never a panic.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::{Carrier, Itinerary, Leg};

pub const CARRIER_PLACEHOLDER: &str = "—";

const MINUTES_PER_DAY: u32 = 24 * 60;

pub fn lead_carrier(itinerary: &Itinerary) -> Option<&Carrier> {
    itinerary.legs.first()?.carriers.marketing.first()
}

pub fn lead_carrier_name(itinerary: &Itinerary) -> &str {
    lead_carrier(itinerary)
        .map(|c| c.name.as_str())
        .unwrap_or(CARRIER_PLACEHOLDER)
}

pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if mins > 0 {
        format!("{hours}h {mins} min")
    } else {
        format!("{hours}h")
    }
}

/// Coarse `+N` day marker: whole days the leg's duration spans, rounded up.
/// This is not a calendar difference between departure and arrival.
pub fn overnight_day_offset(leg: &Leg) -> u32 {
    leg.duration_minutes.div_ceil(MINUTES_PER_DAY)
}

pub fn route_code(itinerary: &Itinerary) -> Option<String> {
    let first = itinerary.legs.first()?;
    let last = itinerary.legs.last()?;
    Some(format!(
        "{} - {}",
        first.origin.display_code, last.destination.display_code
    ))
}

pub fn stop_cities(leg: &Leg) -> Vec<&str> {
    leg.segments
        .iter()
        .map(|s| s.destination.display_code.as_str())
        .filter(|code| *code != leg.destination.display_code)
        .collect()
}

pub fn format_stops(leg: &Leg) -> String {
    match leg.stop_count {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{n} stops"),
    }
}

pub fn format_clock(at: &NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentLine {
    pub departure: String,
    pub origin: String,
    pub duration: String,
    pub arrival: String,
    pub destination: String,
    pub operator: String,
}

/// Everything one result card shows, derived from the first leg except the
/// route code, which spans the whole itinerary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    pub id: String,
    pub carrier: String,
    pub logo_url: Option<String>,
    pub departure: String,
    pub arrival: String,
    pub day_offset: Option<u32>,
    pub duration: String,
    pub route: String,
    pub stops: String,
    pub stop_cities: Vec<String>,
    pub price: String,
    pub segments: Vec<SegmentLine>,
}

impl Card {
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let leg = itinerary.legs.first();
        let placeholder = || CARRIER_PLACEHOLDER.to_string();

        Self {
            id: itinerary.id.clone(),
            carrier: lead_carrier_name(itinerary).to_string(),
            logo_url: lead_carrier(itinerary)
                .map(|c| c.logo_url.clone())
                .filter(|url| !url.is_empty()),
            departure: leg.map(|l| format_clock(&l.departure)).unwrap_or_else(placeholder),
            arrival: leg.map(|l| format_clock(&l.arrival)).unwrap_or_else(placeholder),
            day_offset: leg.map(overnight_day_offset).filter(|days| *days > 0),
            duration: leg
                .map(|l| format_duration(l.duration_minutes))
                .unwrap_or_else(placeholder),
            route: route_code(itinerary).unwrap_or_else(placeholder),
            stops: leg.map(format_stops).unwrap_or_else(placeholder),
            stop_cities: leg
                .map(|l| stop_cities(l).into_iter().map(String::from).collect())
                .unwrap_or_default(),
            price: itinerary.price.formatted.clone(),
            segments: leg
                .map(|l| {
                    l.segments
                        .iter()
                        .map(|s| SegmentLine {
                            departure: format_clock(&s.departure),
                            origin: format!("{} - {}", s.origin.name, s.origin.display_code),
                            duration: format_duration(s.duration_minutes),
                            arrival: format_clock(&s.arrival),
                            destination: format!(
                                "{} - {}",
                                s.destination.name, s.destination.display_code
                            ),
                            operator: s.operating_carrier.name.clone(),
                        })
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}
