use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("request timed out — the flight API may be slow or unreachable. Try increasing --timeout")]
    Timeout,

    #[error("connection failed — check your internet connection ({0})")]
    Transport(String),

    #[error("unexpected HTTP status {0} from the flight API")]
    Upstream(u16),

    #[error("the flight API rejected the search: {0}")]
    Rejected(String),

    #[error("failed to decode flight API response — {0}")]
    Decode(String),
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Transport(_) => "connection_failed",
            Self::Upstream(_) => "http_error",
            Self::Rejected(_) => "rejected",
            Self::Decode(_) => "parse_error",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("a search is already in progress")]
    Busy,

    #[error("departure date {0} is before the earliest selectable day")]
    DateOutOfRange(String),

    #[error("return date {ret} is before departure date {departure}")]
    ReturnBeforeDeparture { departure: String, ret: String },

    #[error("one-way trips cannot have a return date")]
    ReturnDateOnOneWay,

    #[error("adult passengers must be between 1 and 9, got {0}")]
    InvalidPassengers(u32),

    #[error("{0}")]
    InvalidValue(String),
}

impl FormError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "missing_field",
            Self::Busy => "busy",
            Self::DateOutOfRange(_) | Self::ReturnBeforeDeparture { .. } => "invalid_date",
            Self::ReturnDateOnOneWay => "invalid_trip",
            Self::InvalidPassengers(_) => "invalid_passengers",
            Self::InvalidValue(_) => "validation_error",
        }
    }
}

pub fn from_http_error(err: wreq::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::Timeout;
    }

    let msg = err.to_string();
    let lower = msg.to_lowercase();

    if err.is_connect() {
        if lower.contains("dns") || lower.contains("resolve") || lower.contains("getaddrinfo") {
            return SearchError::Transport(format!("DNS resolution failed: {msg}"));
        }
        return SearchError::Transport(msg);
    }

    if lower.contains("proxy") || lower.contains("socks") {
        return SearchError::Transport(format!("proxy error: {msg}"));
    }

    if lower.contains("tls") || lower.contains("ssl") || lower.contains("certificate") {
        return SearchError::Transport(format!("TLS error: {msg}"));
    }

    SearchError::Transport(msg)
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Search(#[from] SearchError),
}

impl SubmitError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Form(e) => e.kind(),
            Self::Search(e) => e.kind(),
        }
    }
}
