use chrono::NaiveDate;

use skyfare::airports::search_airports;
use skyfare::error::{FormError, SubmitError};
use skyfare::form::{Endpoint, SearchForm};
use skyfare::picker::{AirportPicker, PickerState};
use skyfare::results::ResultsBody;
use skyfare::SearchRequest;

mod common;
use common::{gru, jfk, nonstop, place, FlightsReply, StubApi};

fn api() -> StubApi {
    StubApi::new(
        vec![gru(), place("CGH", "95673383", "Sao Paulo Congonhas"), jfk()],
        FlightsReply::Ok(vec![nonstop("a"), nonstop("b")]),
    )
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 10).unwrap()
}

#[tokio::test]
async fn blank_lookup_makes_no_request() {
    let api = api();
    assert!(search_airports(&api, "").await.is_empty());
    assert!(search_airports(&api, "   \t").await.is_empty());
    assert_eq!(api.airport_calls(), 0);
}

#[tokio::test]
async fn failed_lookup_is_empty() {
    let api = StubApi::failing_lookup();
    assert!(search_airports(&api, "guarulhos").await.is_empty());
    assert_eq!(api.airport_calls(), 1);
}

#[tokio::test]
async fn lookup_returns_upstream_order() {
    let api = api();
    let places = search_airports(&api, "sao paulo").await;
    let codes: Vec<&str> = places.iter().map(|p| p.display_code.as_str()).collect();
    assert_eq!(codes, vec!["GRU", "CGH"]);
}

#[tokio::test]
async fn selecting_writes_the_open_endpoint_and_closes() {
    let api = api();
    let mut form = SearchForm::new();
    let mut picker = AirportPicker::new();

    picker.open(Endpoint::Destination);
    assert_eq!(picker.state(), PickerState::OpenFor(Endpoint::Destination));
    picker.set_query("sao paulo");
    assert_eq!(picker.lookup(&api).await, 2);

    let chosen = picker.select(1, &mut form).unwrap();
    assert_eq!(chosen.display_code, "CGH");
    assert_eq!(form.destination().map(|p| p.display_code.as_str()), Some("CGH"));
    assert!(form.origin().is_none());

    assert_eq!(picker.state(), PickerState::Closed);
    assert_eq!(picker.query(), "");
    assert!(picker.candidates().is_empty());
}

#[tokio::test]
async fn select_out_of_range_keeps_picker_open() {
    let api = api();
    let mut form = SearchForm::new();
    let mut picker = AirportPicker::new();

    picker.open(Endpoint::Origin);
    picker.set_query("kennedy");
    picker.lookup(&api).await;

    assert!(picker.select(5, &mut form).is_none());
    assert!(picker.is_open());
    assert!(form.origin().is_none());
}

#[test]
fn select_while_closed_does_nothing() {
    let mut form = SearchForm::new();
    let mut picker = AirportPicker::new();
    assert!(picker.select(0, &mut form).is_none());
    assert!(form.origin().is_none());
}

#[tokio::test]
async fn close_clears_the_text_query() {
    let api = api();
    let mut picker = AirportPicker::new();
    picker.open(Endpoint::Origin);
    picker.set_query("guarulhos");
    picker.lookup(&api).await;
    picker.close();

    assert!(!picker.is_open());
    assert_eq!(picker.query(), "");
    assert!(picker.candidates().is_empty());
}

#[tokio::test]
async fn pick_first_with_no_match_closes() {
    let api = api();
    let mut form = SearchForm::new();
    let mut picker = AirportPicker::new();

    let picked = picker
        .pick_first(&api, Endpoint::Origin, "atlantis", &mut form)
        .await;
    assert!(picked.is_none());
    assert!(!picker.is_open());
    assert!(form.origin().is_none());
}

fn request(from: &str, to: &str) -> SearchRequest {
    SearchRequest {
        from: from.into(),
        to: to.into(),
        date: "2026-03-01".into(),
        return_date: Some("2026-03-10".into()),
        trip: None,
        cabin: "business".into(),
        adults: 2,
    }
}

#[tokio::test]
async fn search_resolves_places_and_submits() {
    let api = api();
    let session = skyfare::search(&api, &request("guarulhos", "kennedy"), today())
        .await
        .unwrap();

    assert_eq!(api.airport_calls(), 2);
    assert_eq!(api.flight_calls(), 1);
    assert!(matches!(session.view().body, ResultsBody::List(items) if items.len() == 2));
}

#[tokio::test]
async fn search_with_unknown_place_skips_flights() {
    let api = api();
    let err = skyfare::search(&api, &request("guarulhos", "atlantis"), today())
        .await
        .unwrap_err();

    assert!(matches!(err, SubmitError::Form(FormError::InvalidValue(ref msg)) if msg.contains("atlantis")));
    assert_eq!(api.flight_calls(), 0);
}

#[tokio::test]
async fn search_rejects_bad_dates_before_lookup() {
    let api = api();
    let mut req = request("guarulhos", "kennedy");
    req.return_date = Some("2026-02-20".into());

    let err = skyfare::search(&api, &req, today()).await.unwrap_err();
    assert!(matches!(err, SubmitError::Form(FormError::ReturnBeforeDeparture { .. })));
    assert_eq!(api.airport_calls(), 0);
}

#[test]
fn request_trip_type_follows_return_date() {
    let mut req = request("a", "b");
    assert_eq!(req.trip_type().unwrap(), skyfare::query::TripType::RoundTrip);
    req.return_date = None;
    assert_eq!(req.trip_type().unwrap(), skyfare::query::TripType::OneWay);
    req.trip = Some("round-trip".into());
    assert_eq!(req.trip_type().unwrap(), skyfare::query::TripType::RoundTrip);
}
