//! Data transfer objects for web requests and responses.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use crate::domain::City;
use crate::hebcal::ExtractedTimes;

/// Label reported in the `source` field of every times response.
pub const SOURCE_LABEL: &str = "hebcal.com";

/// Query for `/api/shabbat`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ShabbatQuery {
    /// City slug from `/api/cities`. Required; checked by the handler so a
    /// missing value gets the API's own error body.
    pub city: Option<String>,
}

impl ShabbatQuery {
    /// Build from raw query pairs. A repeated `city` takes its last value;
    /// unknown parameters are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let city = pairs
            .into_iter()
            .filter(|(key, _)| key == "city")
            .map(|(_, value)| value)
            .next_back();
        Self { city }
    }
}

/// Response for `/`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Shabbat times for one city.
#[derive(Debug, Serialize)]
pub struct ShabbatTimes {
    /// The city the times are for
    pub city: &'static City,

    /// Date the query was answered on (server-local today)
    pub date: NaiveDate,

    /// Weekly Torah portion
    pub parsha: Option<String>,

    /// Candle lighting time, as displayed by the provider
    pub candle_lighting: Option<String>,

    /// Havdalah time, as displayed by the provider
    pub havdalah: Option<String>,

    /// Where the times came from
    pub source: &'static str,

    /// Untouched provider payload
    pub raw: Value,
}

impl ShabbatTimes {
    /// Assemble a response from extracted times and the raw payload.
    pub fn new(city: &'static City, date: NaiveDate, times: ExtractedTimes, raw: Value) -> Self {
        Self {
            city,
            date,
            parsha: times.parsha,
            candle_lighting: times.candle_lighting,
            havdalah: times.havdalah,
            source: SOURCE_LABEL,
            raw,
        }
    }
}

/// Response for the `/test` deployment smoke check.
#[derive(Debug, Serialize)]
pub struct SelfTestResponse {
    pub backend: &'static str,
    pub cities_count: usize,
    pub example_city: Option<&'static City>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub detail: String,
}
