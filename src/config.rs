use std::{env, fmt::Display, str::FromStr};

use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://sky-scrapper.p.rapidapi.com/api/v1";
pub const DEFAULT_LOCALE: &str = "pt-BR";
pub const DEFAULT_CURRENCY: &str = "BRL";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    pub locale: String,
    pub currency: String,
    pub timeout: u64,
    pub proxy: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            api_host: String::new(),
            locale: DEFAULT_LOCALE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            proxy: None,
        }
    }
}

impl ApiConfig {
    /// Reads the API settings from the process environment, loading a
    /// `.env` file first when one exists. Missing credentials are kept as
    /// empty strings; the upstream API rejects them, not us.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenv::dotenv() {
            debug!("loaded environment from {}", path.display());
        }

        Self {
            base_url: var("SKYFARE_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: var("RAPIDAPI_KEY").unwrap_or_default(),
            api_host: var("RAPIDAPI_HOST").unwrap_or_default(),
            locale: var("SKYFARE_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
            currency: var("SKYFARE_CURRENCY").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            timeout: load_timeout("SKYFARE_TIMEOUT_SECS"),
            proxy: var("SKYFARE_PROXY"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value.trim().to_string()),
        Ok(_) => None,
        Err(_) => {
            debug!("{key} not set");
            None
        }
    }
}

fn try_load<T: FromStr + Display>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Some(raw) = var(key) else {
        return default;
    };
    raw.parse().unwrap_or_else(|e| {
        warn!("invalid {key} value {raw:?}: {e}, using default {default}");
        default
    })
}

fn load_timeout(key: &str) -> u64 {
    match try_load(key, DEFAULT_TIMEOUT_SECS) {
        0 => {
            warn!("{key} must be at least 1 second, using default {DEFAULT_TIMEOUT_SECS}");
            DEFAULT_TIMEOUT_SECS
        }
        secs => secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_load_falls_back_on_garbage() {
        env::set_var("SKYFARE_TEST_TIMEOUT_GARBAGE", "soon");
        assert_eq!(try_load("SKYFARE_TEST_TIMEOUT_GARBAGE", 30u64), 30);
    }

    #[test]
    fn try_load_parses_numbers() {
        env::set_var("SKYFARE_TEST_TIMEOUT_SET", " 45 ");
        assert_eq!(try_load("SKYFARE_TEST_TIMEOUT_SET", 30u64), 45);
    }

    #[test]
    fn zero_timeout_falls_back_to_default() {
        env::set_var("SKYFARE_TEST_TIMEOUT_ZERO", "0");
        assert_eq!(load_timeout("SKYFARE_TEST_TIMEOUT_ZERO"), DEFAULT_TIMEOUT_SECS);
        env::set_var("SKYFARE_TEST_TIMEOUT_FIVE", "5");
        assert_eq!(load_timeout("SKYFARE_TEST_TIMEOUT_FIVE"), 5);
    }

    #[test]
    fn blank_values_count_as_unset() {
        env::set_var("SKYFARE_TEST_BLANK", "   ");
        assert_eq!(var("SKYFARE_TEST_BLANK"), None);
        assert_eq!(var("SKYFARE_TEST_NEVER_SET"), None);
    }
}
