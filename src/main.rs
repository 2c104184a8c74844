use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skyfare::airports;
use skyfare::config::ApiConfig;
use skyfare::error::{SearchError, SubmitError};
use skyfare::fetch::RapidApiClient;
use skyfare::model::Itinerary;
use skyfare::results::{ResultsBody, SearchSession};
use skyfare::shape::Card;
use skyfare::table;
use skyfare::SearchRequest;

#[derive(Parser)]
#[command(
    name = "skyfare",
    about = "Search flights through the Sky Scrapper API from the terminal",
    version,
    after_help = "\
Examples:
  skyfare airports \"sao paulo\"
  skyfare search -f \"Sao Paulo\" -t \"New York\" -d 2026-04-01
  skyfare search -f Lisboa -t Recife -d 2026-05-01 --return-date 2026-05-15 --cabin business

Configuration (environment or .env):
  RAPIDAPI_KEY, RAPIDAPI_HOST, SKYFARE_BASE_URL, SKYFARE_LOCALE, SKYFARE_CURRENCY"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(
        about = "Search for flights",
        long_about = "Search for flights between two places on specific dates.\n\
            Places are free text; the first airport match for each is used.",
        after_help = "\
Examples:
  One-way:      skyfare search -f \"Sao Paulo\" -t \"New York\" -d 2026-04-01
  Round-trip:   skyfare search -f Lisboa -t Recife -d 2026-05-01 --return-date 2026-05-15
  Business:     skyfare search -f GRU -t LHR -d 2026-03-01 --cabin business
  JSON output:  skyfare search -f GRU -t LHR -d 2026-03-01 --json --pretty"
    )]
    Search(SearchArgs),
    #[command(about = "Find airports by name")]
    Airports(AirportsArgs),
    #[command(about = "Start MCP server for AI agents (stdio transport)")]
    Mcp(ClientArgs),
}

#[derive(clap::Args)]
struct ClientArgs {
    #[arg(long, value_name = "URL", help = "HTTP or SOCKS5 proxy")]
    proxy: Option<String>,

    #[arg(
        long,
        value_name = "SECS",
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Request timeout [default: 30]"
    )]
    timeout: Option<u64>,

    #[arg(long, value_name = "CODE", help = "Currency code (e.g. BRL, USD, EUR) [default: BRL]")]
    currency: Option<String>,
}

#[derive(clap::Args)]
struct AirportsArgs {
    #[arg(value_name = "TEXT", help = "Airport or city name")]
    text: String,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[command(flatten)]
    client: ClientArgs,
}

#[derive(clap::Args)]
struct SearchArgs {
    #[arg(short, long, value_name = "TEXT", help = "Departure airport or city")]
    from: String,

    #[arg(short, long, value_name = "TEXT", help = "Arrival airport or city")]
    to: String,

    #[arg(short, long, value_name = "YYYY-MM-DD", help = "Departure date")]
    date: String,

    #[arg(
        long,
        value_name = "YYYY-MM-DD",
        help = "Return date (auto-sets round-trip)"
    )]
    return_date: Option<String>,

    #[arg(long, value_name = "TYPE", help = "Trip type [round-trip, one-way]")]
    trip: Option<String>,

    #[arg(
        long,
        default_value = "economy",
        value_name = "CLASS",
        help = "Cabin class [economy, premium-economy, business, first]"
    )]
    cabin: String,

    #[arg(long, default_value = "1", value_name = "N", help = "Number of adult passengers")]
    adults: u32,

    #[arg(long, help = "Show the segment timeline of each result")]
    details: bool,

    #[arg(long, help = "Output as JSON")]
    json: bool,

    #[arg(long, help = "Output as pretty-printed JSON")]
    pretty: bool,

    #[command(flatten)]
    client: ClientArgs,
}

fn is_json(args: &SearchArgs) -> bool {
    args.json || args.pretty
}

fn search_error_code(err: &SearchError) -> i32 {
    match err {
        SearchError::Timeout | SearchError::Transport(_) => 3,
        SearchError::Upstream(_) | SearchError::Rejected(_) => 5,
        SearchError::Decode(_) => 6,
    }
}

fn error_code(err: &SubmitError) -> i32 {
    match err {
        SubmitError::Form(_) => 2,
        SubmitError::Search(e) => search_error_code(e),
    }
}

fn die(err: &SubmitError, json_mode: bool) -> ! {
    if json_mode {
        let json = serde_json::json!({
            "error": {
                "kind": err.kind(),
                "message": err.to_string(),
            }
        });
        println!("{json}");
    } else {
        eprintln!("error: {err}");
    }
    process::exit(error_code(err));
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("skyfare=warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn build_client(args: &ClientArgs, json_mode: bool) -> RapidApiClient {
    let mut config = ApiConfig::from_env();
    if let Some(timeout) = args.timeout {
        config.timeout = timeout;
    }
    if let Some(ref currency) = args.currency {
        config.currency = currency.to_uppercase();
    }
    if args.proxy.is_some() {
        config.proxy = args.proxy.clone();
    }

    match RapidApiClient::new(config) {
        Ok(client) => client,
        Err(e) => die(&SubmitError::from(e), json_mode),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: failed to encode output: {e}");
            process::exit(1);
        }
    }
}

fn print_session(session: &SearchSession, args: &SearchArgs) {
    let itineraries: &[Itinerary] = match session.view().body {
        ResultsBody::List(itineraries) => itineraries,
        ResultsBody::Empty | ResultsBody::Blank => &[],
    };

    if is_json(args) {
        let cards: Vec<Card> = itineraries.iter().map(Card::from_itinerary).collect();
        print_json(&cards, args.pretty);
        return;
    }

    if itineraries.is_empty() {
        println!("No flights found.");
        return;
    }

    println!("{}", table::render(itineraries));

    if args.details {
        for itinerary in itineraries {
            let card = Card::from_itinerary(itinerary);
            println!();
            println!("{} | {} | {}", card.carrier, card.route, card.price);
            println!("{}", table::render_details(&card));
        }
    }
}

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Mcp(args) => {
            let client = build_client(&args, false);
            if let Err(e) = skyfare::mcp::run(client).await {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
        Commands::Airports(args) => {
            let client = build_client(&args.client, args.json);
            let places = airports::search_airports(&client, &args.text).await;
            if args.json {
                print_json(&places, false);
            } else if places.is_empty() {
                println!("No airports found.");
            } else {
                println!("{}", table::render_places(&places));
            }
        }
        Commands::Search(args) => {
            let json_mode = is_json(&args);
            let today = chrono::Local::now().date_naive();

            let request = SearchRequest {
                from: args.from.clone(),
                to: args.to.clone(),
                date: args.date.clone(),
                return_date: args.return_date.clone(),
                trip: args.trip.clone(),
                cabin: args.cabin.clone(),
                adults: args.adults,
            };

            // Catch bad dates and enums before any request goes out.
            if let Err(e) = skyfare::prefill_form(&request, today) {
                die(&SubmitError::from(e), json_mode);
            }

            let client = build_client(&args.client, json_mode);
            match skyfare::search(&client, &request, today).await {
                Ok(session) => print_session(&session, &args),
                Err(e) => die(&e, json_mode),
            }
        }
    }
}
