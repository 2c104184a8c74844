use std::future::Future;
use std::time::Duration;

use tracing::debug;
use wreq::Client;

use crate::config::ApiConfig;
use crate::error::{self, SearchError};
use crate::model::{Itinerary, Place};
use crate::parse;
use crate::query::SearchQuery;

const AIRPORTS_PATH: &str = "/flights/searchAirport";
const FLIGHTS_PATH: &str = "/flights/searchFlights";

/// Remote flight-data operations. The form and picker only ever talk to
/// this trait, so tests can swap in a stub.
pub trait FlightApi {
    fn airports(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<Vec<Place>, SearchError>> + Send;

    fn flights(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<Itinerary>, SearchError>> + Send;
}

#[derive(Clone)]
pub struct RapidApiClient {
    client: Client,
    config: ApiConfig,
}

impl RapidApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, SearchError> {
        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout));

        if let Some(ref proxy) = config.proxy {
            builder = builder.proxy(wreq::Proxy::all(proxy).map_err(error::from_http_error)?);
        }

        let client = builder.build().map_err(error::from_http_error)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_text(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<String, SearchError> {
        let url = format!("{}{path}", self.config.base_url);
        debug!(%url, ?params, "sending request");

        let response = self
            .client
            .get(url.as_str())
            .query(params)
            .header("x-rapidapi-key", self.config.api_key.as_str())
            .header("x-rapidapi-host", self.config.api_host.as_str())
            .send()
            .await
            .map_err(error::from_http_error)?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(SearchError::Upstream(status));
        }

        response.text().await.map_err(error::from_http_error)
    }
}

impl FlightApi for RapidApiClient {
    async fn airports(&self, text: &str) -> Result<Vec<Place>, SearchError> {
        let params = vec![
            ("query".to_string(), text.to_string()),
            ("locale".to_string(), self.config.locale.clone()),
        ];
        let body = self.get_text(AIRPORTS_PATH, &params).await?;
        parse::parse_airports(&body)
    }

    async fn flights(&self, query: &SearchQuery) -> Result<Vec<Itinerary>, SearchError> {
        let params = query.to_url_params(&self.config.currency);
        let body = self.get_text(FLIGHTS_PATH, &params).await?;
        let data = parse::parse_flight_response(&body)?;
        debug!(
            status = %data.context.status,
            total = data.context.total_results,
            "flight search context"
        );
        Ok(data.itineraries)
    }
}
