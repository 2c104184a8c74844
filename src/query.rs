use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::model::Place;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MAX_ADULTS: u32 = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn from_str_loose(s: &str) -> Result<Self, FormError> {
        match s {
            "economy" => Ok(Self::Economy),
            "premium_economy" | "premium-economy" => Ok(Self::PremiumEconomy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            _ => Err(FormError::InvalidValue(format!("invalid cabin class: {s}"))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium_economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    #[default]
    RoundTrip,
    OneWay,
}

impl TripType {
    pub fn from_str_loose(s: &str) -> Result<Self, FormError> {
        match s {
            "round_trip" | "round-trip" => Ok(Self::RoundTrip),
            "one_way" | "one-way" => Ok(Self::OneWay),
            _ => Err(FormError::InvalidValue(format!("invalid trip type: {s}"))),
        }
    }
}

pub fn parse_date(date: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
        FormError::InvalidValue(format!(
            "invalid date \"{date}\" — must be YYYY-MM-DD format (e.g. 2026-03-01)"
        ))
    })
}

/// Earliest departure date the form accepts: one day of grace before `today`.
pub fn earliest_departure(today: NaiveDate) -> NaiveDate {
    today.checked_sub_days(Days::new(1)).unwrap_or(today)
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub origin: Place,
    pub destination: Place,
    pub cabin_class: CabinClass,
    pub trip_type: TripType,
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub adults: u32,
}

impl SearchQuery {
    pub fn validate(&self, today: NaiveDate) -> Result<(), FormError> {
        if self.departure_date < earliest_departure(today) {
            return Err(FormError::DateOutOfRange(
                self.departure_date.format(DATE_FORMAT).to_string(),
            ));
        }

        match (self.trip_type, self.return_date) {
            (TripType::OneWay, Some(_)) => return Err(FormError::ReturnDateOnOneWay),
            (TripType::RoundTrip, Some(ret)) if ret < self.departure_date => {
                return Err(FormError::ReturnBeforeDeparture {
                    departure: self.departure_date.format(DATE_FORMAT).to_string(),
                    ret: ret.format(DATE_FORMAT).to_string(),
                });
            }
            _ => {}
        }

        if self.adults == 0 || self.adults > MAX_ADULTS {
            return Err(FormError::InvalidPassengers(self.adults));
        }

        Ok(())
    }

    /// Flat key/value pairs for the flight search endpoint. Keys whose
    /// value is absent or empty are left out entirely.
    pub fn to_url_params(&self, currency: &str) -> Vec<(String, String)> {
        let fields = [
            ("originSkyId", self.origin.display_code.clone()),
            ("destinationSkyId", self.destination.display_code.clone()),
            ("originEntityId", self.origin.id.clone()),
            ("destinationEntityId", self.destination.id.clone()),
            ("cabinClass", self.cabin_class.as_str().to_string()),
            (
                "adults",
                if self.adults > 0 {
                    self.adults.to_string()
                } else {
                    String::new()
                },
            ),
            ("date", self.departure_date.format(DATE_FORMAT).to_string()),
            (
                "returnDate",
                self.return_date
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
            ),
            ("currency", currency.to_string()),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }
}
