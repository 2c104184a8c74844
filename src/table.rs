use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::model::{Itinerary, Place};
use crate::shape::Card;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub fn times_cell(card: &Card) -> String {
    match card.day_offset {
        Some(days) => format!("{} - {} +{days}", card.departure, card.arrival),
        None => format!("{} - {}", card.departure, card.arrival),
    }
}

pub fn stops_cell(card: &Card) -> String {
    if card.stop_cities.is_empty() {
        card.stops.clone()
    } else {
        format!("{}\n{}", card.stops, card.stop_cities.join(", "))
    }
}

pub fn render(itineraries: &[Itinerary]) -> String {
    let mut table = new_table(vec![
        "Airline", "Times", "Duration", "Route", "Stops", "Price",
    ]);

    for itinerary in itineraries {
        let card = Card::from_itinerary(itinerary);
        table.add_row(vec![
            card.carrier.clone(),
            times_cell(&card),
            card.duration.clone(),
            card.route.clone(),
            stops_cell(&card),
            card.price.clone(),
        ]);
    }

    table.to_string()
}

/// Segment-by-segment timeline of a card's first leg.
pub fn render_details(card: &Card) -> String {
    let mut table = new_table(vec!["Depart", "From", "Flight time", "Arrive", "To", "Operated by"]);

    for line in &card.segments {
        table.add_row(vec![
            &line.departure,
            &line.origin,
            &line.duration,
            &line.arrival,
            &line.destination,
            &line.operator,
        ]);
    }

    table.to_string()
}

fn place_label(place: &Place) -> &str {
    if place.suggestion_title.is_empty() {
        &place.name
    } else {
        &place.suggestion_title
    }
}

pub fn render_places(places: &[Place]) -> String {
    let mut table = new_table(vec!["#", "Code", "Airport", "City", "Entity"]);

    for (i, place) in places.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            place.display_code.clone(),
            place_label(place).to_string(),
            place.city_name.clone(),
            place.id.clone(),
        ]);
    }

    table.to_string()
}
