pub mod airports;
pub mod config;
pub mod error;
pub mod fetch;
pub mod flights;
pub mod form;
pub mod mcp;
pub mod model;
pub mod parse;
pub mod picker;
pub mod query;
pub mod results;
pub mod shape;
pub mod table;

use chrono::NaiveDate;

use error::{FormError, SubmitError};
use fetch::FlightApi;
use form::{Endpoint, SearchForm};
use picker::AirportPicker;
use query::{parse_date, CabinClass, TripType};
use results::SearchSession;

/// One-shot search described by free text, as typed at a prompt.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub from: String,
    pub to: String,
    pub date: String,
    pub return_date: Option<String>,
    pub trip: Option<String>,
    pub cabin: String,
    pub adults: u32,
}

impl SearchRequest {
    pub fn trip_type(&self) -> Result<TripType, FormError> {
        match (&self.trip, &self.return_date) {
            (Some(trip), _) => TripType::from_str_loose(trip),
            (None, Some(_)) => Ok(TripType::RoundTrip),
            (None, None) => Ok(TripType::OneWay),
        }
    }
}

/// Fills a form from `request` without touching the network: everything
/// except the two airports.
pub fn prefill_form(request: &SearchRequest, today: NaiveDate) -> Result<SearchForm, FormError> {
    let mut form = SearchForm::new();
    form.set_cabin_class(CabinClass::from_str_loose(&request.cabin)?);
    form.set_trip_type(request.trip_type()?);
    form.set_adults(request.adults)?;
    form.set_departure_date(parse_date(&request.date)?, today)?;
    if let Some(ref ret) = request.return_date {
        form.set_return_date(parse_date(ret)?, today)?;
    }
    Ok(form)
}

/// Runs a full search the way the interactive front-end does: fill the
/// form, pick each airport through the picker, then submit.
pub async fn search<A: FlightApi>(
    api: &A,
    request: &SearchRequest,
    today: NaiveDate,
) -> Result<SearchSession, SubmitError> {
    let mut form = prefill_form(request, today)?;
    let mut picker = AirportPicker::new();
    let mut session = SearchSession::new();

    for (endpoint, text) in [
        (Endpoint::Origin, &request.from),
        (Endpoint::Destination, &request.to),
    ] {
        if picker.pick_first(api, endpoint, text, &mut form).await.is_none() {
            return Err(FormError::InvalidValue(format!("no airport matches \"{text}\"")).into());
        }
    }

    form.submit(api, today, &mut session).await?;
    Ok(session)
}
