//! Hebcal HTTP client.
//!
//! Issues a single request per call with a bounded timeout. There is no
//! retry: a slow or failing provider fails the one request that asked.

use std::time::Duration;

use serde_json::Value;

use crate::domain::City;

use super::error::HebcalError;

/// Default base URL for the Hebcal API.
const DEFAULT_BASE_URL: &str = "https://www.hebcal.com";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default havdalah mode: minutes after sunset (`m` query parameter).
const DEFAULT_HAVDALAH_MINS: u16 = 50;

/// Configuration for the Hebcal client.
#[derive(Debug, Clone)]
pub struct HebcalConfig {
    /// Base URL for the API (defaults to production Hebcal)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Havdalah calculation mode, in minutes after sunset
    pub havdalah_mins: u16,
}

impl HebcalConfig {
    /// Create a config pointing at production Hebcal.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            havdalah_mins: DEFAULT_HAVDALAH_MINS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the havdalah mode.
    pub fn with_havdalah_mins(mut self, mins: u16) -> Self {
        self.havdalah_mins = mins;
        self
    }
}

impl Default for HebcalConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Hebcal API client.
#[derive(Debug, Clone)]
pub struct HebcalClient {
    http: reqwest::Client,
    base_url: String,
    havdalah_mins: u16,
}

impl HebcalClient {
    /// Create a new Hebcal client with the given configuration.
    pub fn new(config: HebcalConfig) -> Result<Self, HebcalError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            havdalah_mins: config.havdalah_mins,
        })
    }

    /// Fetch this week's Shabbat items for a city.
    ///
    /// Returns the decoded JSON payload exactly as Hebcal sent it, so it can
    /// be both normalized and passed through to API clients.
    ///
    /// Any non-success status, timeout or transport failure is reported as
    /// an upstream failure (see [`HebcalError::is_upstream_failure`]).
    pub async fn fetch_shabbat(&self, city: &City) -> Result<Value, HebcalError> {
        let url = format!("{}/shabbat", self.base_url);

        tracing::debug!(city = city.slug, %url, "fetching shabbat times");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("cfg", "json".to_string()),
                ("latitude", city.latitude.to_string()),
                ("longitude", city.longitude.to_string()),
                ("tzid", city.tzid.to_string()),
                ("m", self.havdalah_mins.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HebcalError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| HebcalError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::domain::CityCatalog;

    fn london() -> &'static City {
        CityCatalog::builtin().find("london").unwrap()
    }

    fn client_for(server: &MockServer) -> HebcalClient {
        HebcalClient::new(HebcalConfig::new().with_base_url(server.base_url())).unwrap()
    }

    #[test]
    fn config_builder() {
        let config = HebcalConfig::new()
            .with_base_url("http://localhost:8080")
            .with_timeout(3)
            .with_havdalah_mins(42);

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.havdalah_mins, 42);
    }

    #[test]
    fn config_defaults() {
        let config = HebcalConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.havdalah_mins, 50);
    }

    #[test]
    fn client_creation() {
        assert!(HebcalClient::new(HebcalConfig::new()).is_ok());
    }

    #[tokio::test]
    async fn sends_city_parameters_and_returns_raw_payload() {
        let server = MockServer::start_async().await;
        let payload = json!({
            "title": "Hebcal London",
            "items": [{"category": "candles", "title": "Candle lighting: 5:43pm"}],
            "extra": {"nested": true}
        });

        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/shabbat")
                    .query_param("cfg", "json")
                    .query_param("latitude", "51.5072")
                    .query_param("longitude", "-0.1276")
                    .query_param("tzid", "Europe/London")
                    .query_param("m", "50");
                then.status(200).json_body(payload.clone());
            })
            .await;

        let raw = client_for(&server).fetch_shabbat(london()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(raw, payload);
    }

    #[tokio::test]
    async fn error_status_is_upstream_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/shabbat");
                then.status(500).body("boom");
            })
            .await;

        let err = client_for(&server)
            .fetch_shabbat(london())
            .await
            .unwrap_err();

        assert!(matches!(err, HebcalError::Api { status: 500, ref message } if message == "boom"));
        assert!(err.is_upstream_failure());
    }

    #[tokio::test]
    async fn non_json_body_is_parse_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/shabbat");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let err = client_for(&server)
            .fetch_shabbat(london())
            .await
            .unwrap_err();

        assert!(matches!(err, HebcalError::Json { body: Some(_), .. }));
        assert!(!err.is_upstream_failure());
    }

    #[tokio::test]
    async fn timeout_is_upstream_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/shabbat");
                then.status(200)
                    .json_body(json!({"items": []}))
                    .delay(Duration::from_secs(3));
            })
            .await;

        let client = HebcalClient::new(
            HebcalConfig::new()
                .with_base_url(server.base_url())
                .with_timeout(1),
        )
        .unwrap();

        let err = client.fetch_shabbat(london()).await.unwrap_err();
        assert!(matches!(err, HebcalError::Http(_)));
        assert!(err.is_upstream_failure());
    }

    #[tokio::test]
    async fn unreachable_host_is_upstream_failure() {
        // Port 9 (discard) on localhost is not expected to accept HTTP.
        let client =
            HebcalClient::new(HebcalConfig::new().with_base_url("http://127.0.0.1:9")).unwrap();

        let err = client.fetch_shabbat(london()).await.unwrap_err();
        assert!(err.is_upstream_failure());
    }
}
