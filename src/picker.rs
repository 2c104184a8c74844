use crate::airports;
use crate::fetch::FlightApi;
use crate::form::{Endpoint, SearchForm};
use crate::model::Place;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickerState {
    #[default]
    Closed,
    OpenFor(Endpoint),
}

/// Transient airport chooser. It only ever writes back into a
/// [`SearchForm`] slot.
#[derive(Debug, Clone, Default)]
pub struct AirportPicker {
    state: PickerState,
    query: String,
    candidates: Vec<Place>,
}

impl AirportPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PickerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != PickerState::Closed
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn candidates(&self) -> &[Place] {
        &self.candidates
    }

    pub fn open(&mut self, endpoint: Endpoint) {
        self.state = PickerState::OpenFor(endpoint);
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    /// Replaces the candidate list with lookup results for the current
    /// query. Returns how many candidates are now shown.
    pub async fn lookup<A: FlightApi>(&mut self, api: &A) -> usize {
        self.candidates = airports::search_airports(api, &self.query).await;
        self.candidates.len()
    }

    /// Writes the chosen candidate into the endpoint being edited and
    /// closes. Returns the chosen place, or `None` when the picker is
    /// closed or `index` is out of range.
    pub fn select(&mut self, index: usize, form: &mut SearchForm) -> Option<Place> {
        let PickerState::OpenFor(endpoint) = self.state else {
            return None;
        };
        let place = self.candidates.get(index)?.clone();
        form.set_place(endpoint, place.clone());
        self.close();
        Some(place)
    }

    pub fn close(&mut self) {
        self.state = PickerState::Closed;
        self.query.clear();
        self.candidates.clear();
    }

    /// Opens the picker for `endpoint`, looks `text` up and takes the first
    /// candidate. The picker is closed afterwards either way.
    pub async fn pick_first<A: FlightApi>(
        &mut self,
        api: &A,
        endpoint: Endpoint,
        text: &str,
        form: &mut SearchForm,
    ) -> Option<Place> {
        self.open(endpoint);
        self.set_query(text);
        if self.lookup(api).await == 0 {
            self.close();
            return None;
        }
        self.select(0, form)
    }
}
