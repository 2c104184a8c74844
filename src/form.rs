use chrono::NaiveDate;
use tracing::{debug, error};

use crate::error::{FormError, SearchError, SubmitError};
use crate::fetch::FlightApi;
use crate::flights;
use crate::model::{Itinerary, Place};
use crate::query::{earliest_departure, CabinClass, SearchQuery, TripType, DATE_FORMAT};
use crate::results::SearchSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Origin,
    Destination,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
}

/// How the last submission ended, shown alongside the editable form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Outcome {
    #[default]
    Idle,
    Results(usize),
    Failed(String),
}

/// In-progress search. Fields are edited one at a time; cross-field
/// constraints are enforced as each date is picked and again on submit.
#[derive(Debug, Clone)]
pub struct SearchForm {
    origin: Option<Place>,
    destination: Option<Place>,
    cabin_class: CabinClass,
    trip_type: TripType,
    departure_date: Option<NaiveDate>,
    return_date: Option<NaiveDate>,
    adults: u32,
    phase: FormPhase,
    outcome: Outcome,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            cabin_class: CabinClass::default(),
            trip_type: TripType::default(),
            departure_date: None,
            return_date: None,
            adults: 1,
            phase: FormPhase::default(),
            outcome: Outcome::default(),
        }
    }
}

fn fmt_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(&self) -> Option<&Place> {
        self.origin.as_ref()
    }

    pub fn destination(&self) -> Option<&Place> {
        self.destination.as_ref()
    }

    pub fn cabin_class(&self) -> CabinClass {
        self.cabin_class
    }

    pub fn trip_type(&self) -> TripType {
        self.trip_type
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.departure_date
    }

    pub fn return_date(&self) -> Option<NaiveDate> {
        self.return_date
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    pub fn set_place(&mut self, endpoint: Endpoint, place: Place) {
        match endpoint {
            Endpoint::Origin => self.origin = Some(place),
            Endpoint::Destination => self.destination = Some(place),
        }
    }

    pub fn set_origin(&mut self, place: Place) {
        self.set_place(Endpoint::Origin, place);
    }

    pub fn set_destination(&mut self, place: Place) {
        self.set_place(Endpoint::Destination, place);
    }

    pub fn swap_endpoints(&mut self) {
        std::mem::swap(&mut self.origin, &mut self.destination);
    }

    pub fn set_cabin_class(&mut self, cabin_class: CabinClass) {
        self.cabin_class = cabin_class;
    }

    /// Switching to one-way drops any chosen return date.
    pub fn set_trip_type(&mut self, trip_type: TripType) {
        if trip_type == TripType::OneWay {
            self.return_date = None;
        }
        self.trip_type = trip_type;
    }

    pub fn set_adults(&mut self, adults: u32) -> Result<(), FormError> {
        if adults == 0 || adults > crate::query::MAX_ADULTS {
            return Err(FormError::InvalidPassengers(adults));
        }
        self.adults = adults;
        Ok(())
    }

    /// Departure must be no earlier than yesterday and no later than an
    /// already chosen return date.
    pub fn set_departure_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), FormError> {
        if date < earliest_departure(today) {
            return Err(FormError::DateOutOfRange(fmt_date(date)));
        }
        if let Some(ret) = self.return_date {
            if date > ret {
                return Err(FormError::ReturnBeforeDeparture {
                    departure: fmt_date(date),
                    ret: fmt_date(ret),
                });
            }
        }
        self.departure_date = Some(date);
        Ok(())
    }

    pub fn set_return_date(&mut self, date: NaiveDate, today: NaiveDate) -> Result<(), FormError> {
        if self.trip_type == TripType::OneWay {
            return Err(FormError::ReturnDateOnOneWay);
        }
        match self.departure_date {
            Some(departure) if date < departure => {
                return Err(FormError::ReturnBeforeDeparture {
                    departure: fmt_date(departure),
                    ret: fmt_date(date),
                });
            }
            None if date < earliest_departure(today) => {
                return Err(FormError::DateOutOfRange(fmt_date(date)));
            }
            _ => {}
        }
        self.return_date = Some(date);
        Ok(())
    }

    pub fn clear_return_date(&mut self) {
        self.return_date = None;
    }

    /// Normalized query for the current field values, or the first missing
    /// or inconsistent field.
    pub fn build_query(&self, today: NaiveDate) -> Result<SearchQuery, FormError> {
        let origin = self.origin.clone().ok_or(FormError::MissingField("origin"))?;
        let destination = self
            .destination
            .clone()
            .ok_or(FormError::MissingField("destination"))?;
        let departure_date = self
            .departure_date
            .ok_or(FormError::MissingField("departure date"))?;

        let query = SearchQuery {
            origin,
            destination,
            cabin_class: self.cabin_class,
            trip_type: self.trip_type,
            departure_date,
            return_date: match self.trip_type {
                TripType::RoundTrip => self.return_date,
                TripType::OneWay => None,
            },
            adults: self.adults,
        };
        query.validate(today)?;
        Ok(query)
    }

    /// Validates and enters `Submitting`. On error nothing changes and no
    /// request should be made.
    pub fn begin_submit(
        &mut self,
        today: NaiveDate,
        session: &mut SearchSession,
    ) -> Result<SearchQuery, FormError> {
        if !self.can_submit() {
            return Err(FormError::Busy);
        }
        let query = self.build_query(today)?;
        self.phase = FormPhase::Submitting;
        session.begin();
        Ok(query)
    }

    /// Returns to `Editing`. Successful results replace the session's result
    /// set; failures leave it untouched.
    pub fn finish_submit(
        &mut self,
        result: Result<Vec<Itinerary>, SearchError>,
        session: &mut SearchSession,
    ) -> Result<usize, SearchError> {
        self.phase = FormPhase::Editing;
        match result {
            Ok(itineraries) => {
                let count = itineraries.len();
                session.complete(itineraries);
                self.outcome = Outcome::Results(count);
                Ok(count)
            }
            Err(e) => {
                error!(kind = e.kind(), "search failed: {e}");
                session.fail();
                self.outcome = Outcome::Failed(e.to_string());
                Err(e)
            }
        }
    }

    pub async fn submit<A: FlightApi>(
        &mut self,
        api: &A,
        today: NaiveDate,
        session: &mut SearchSession,
    ) -> Result<usize, SubmitError> {
        let query = self.begin_submit(today, session)?;
        debug!(?query, "submitting search");
        let result = flights::search_flights(api, &query).await;
        Ok(self.finish_submit(result, session)?)
    }
}
