use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt};
use serde::Deserialize;
use tracing::info;

use crate::airports;
use crate::fetch::RapidApiClient;
use crate::results::ResultsBody;
use crate::shape::Card;
use crate::SearchRequest;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct AirportsArgs {
    #[schemars(description = "Free-text airport or city name. Example: Guarulhos, New York, Lisboa")]
    query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
struct SearchArgs {
    #[schemars(
        description = "Departure airport or city as free text. The first airport match is used. Example: Sao Paulo"
    )]
    from: String,
    #[schemars(
        description = "Arrival airport or city as free text. The first airport match is used. Example: New York"
    )]
    to: String,
    #[schemars(description = "Departure date in YYYY-MM-DD format. Example: 2026-03-01")]
    date: String,
    #[schemars(
        description = "Return date in YYYY-MM-DD for round-trip. Auto-sets trip type to round_trip"
    )]
    return_date: Option<String>,
    #[schemars(description = "One of: round_trip, one_way. Default: one_way unless return_date is set")]
    trip: Option<String>,
    #[schemars(
        description = "One of: economy, premium_economy, business, first. Default: economy"
    )]
    cabin: Option<String>,
    #[schemars(description = "Adult passengers, 1 to 9. Default: 1")]
    adults: Option<u32>,
}

fn tool_error(msg: impl Into<String>) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::text(msg.into())]))
}

fn json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    match serde_json::to_string_pretty(value) {
        Ok(json) => Ok(CallToolResult::success(vec![Content::text(json)])),
        Err(e) => tool_error(format!("failed to encode result: {e}")),
    }
}

#[derive(Clone)]
struct SkyfareMcp {
    client: RapidApiClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SkyfareMcp {
    fn new(client: RapidApiClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Find airports matching free text. Returns candidates with display code, name, city and entity id. Empty list when nothing matches or the lookup fails."
    )]
    async fn skyfare_airports(
        &self,
        Parameters(args): Parameters<AirportsArgs>,
    ) -> Result<CallToolResult, McpError> {
        let places = airports::search_airports(&self.client, &args.query).await;
        json_result(&places)
    }

    #[tool(
        description = "Search flights between two places on a date and return result cards as JSON: carrier, departure/arrival times with +N day marker, duration, route, stops and formatted price. Airports are resolved from free text; call skyfare_airports first if unsure."
    )]
    async fn skyfare_search(
        &self,
        Parameters(args): Parameters<SearchArgs>,
    ) -> Result<CallToolResult, McpError> {
        let request = SearchRequest {
            from: args.from,
            to: args.to,
            date: args.date,
            return_date: args.return_date,
            trip: args.trip,
            cabin: args.cabin.unwrap_or_else(|| "economy".into()),
            adults: args.adults.unwrap_or(1),
        };
        let today = chrono::Local::now().date_naive();

        match crate::search(&self.client, &request, today).await {
            Ok(session) => match session.view().body {
                ResultsBody::List(itineraries) => {
                    let cards: Vec<Card> = itineraries.iter().map(Card::from_itinerary).collect();
                    json_result(&cards)
                }
                ResultsBody::Empty | ResultsBody::Blank => {
                    json_result(&Vec::<Card>::new())
                }
            },
            Err(e) => tool_error(e.to_string()),
        }
    }
}

#[tool_handler]
impl ServerHandler for SkyfareMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "skyfare".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Flight search tool. Workflow: (1) skyfare_airports to check how a place name resolves. (2) skyfare_search with free-text from/to and dates. Prices are formatted in the configured currency.".into(),
            ),
        }
    }
}

pub async fn run(client: RapidApiClient) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!("starting MCP server on stdio");
    let service = SkyfareMcp::new(client)
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| format!("failed to start MCP server: {e}"))?;
    service
        .waiting()
        .await
        .map_err(|e| format!("MCP server error: {e}"))?;
    Ok(())
}
