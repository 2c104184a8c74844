use crate::model::Itinerary;

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    is_submitting: bool,
    has_completed_search: bool,
    last_results: Vec<Itinerary>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsBody<'a> {
    /// No search has completed yet.
    Blank,
    Empty,
    List(&'a [Itinerary]),
}

/// What the results area shows. `loading` is an overlay on top of `body`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultsView<'a> {
    pub loading: bool,
    pub body: ResultsBody<'a>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn has_completed_search(&self) -> bool {
        self.has_completed_search
    }

    pub fn last_results(&self) -> &[Itinerary] {
        &self.last_results
    }

    pub fn begin(&mut self) {
        self.is_submitting = true;
    }

    /// Replaces the previous result set wholesale.
    pub fn complete(&mut self, itineraries: Vec<Itinerary>) {
        self.last_results = itineraries;
        self.has_completed_search = true;
        self.is_submitting = false;
    }

    pub fn fail(&mut self) {
        self.is_submitting = false;
    }

    pub fn view(&self) -> ResultsView<'_> {
        let body = if !self.last_results.is_empty() {
            ResultsBody::List(&self.last_results)
        } else if self.has_completed_search {
            ResultsBody::Empty
        } else {
            ResultsBody::Blank
        };

        ResultsView {
            loading: self.is_submitting,
            body,
        }
    }
}
