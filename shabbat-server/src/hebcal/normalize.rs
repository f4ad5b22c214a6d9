//! Reduction of a Hebcal item list to candle lighting, havdalah and parsha.
//!
//! Hebcal returns a flat, ordered list of tagged items. For each category we
//! care about, the first item that yields a value wins; later items of the
//! same category are ignored. The list is never re-sorted.

use serde::{Deserialize, de};
use serde_json::Value;

use super::types::{ShabbatItem, ShabbatResponse};

const CANDLES: &str = "candles";
const HAVDALAH: &str = "havdalah";
const PARASHAT: &str = "parashat";

/// The values extracted from a Hebcal response.
///
/// Each field is independent: a response with no `havdalah` item still
/// yields its candle lighting time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTimes {
    /// Candle lighting time as displayed by Hebcal, e.g. `"7:01pm"`.
    pub candle_lighting: Option<String>,

    /// Havdalah time as displayed by Hebcal, e.g. `"8:15pm"`.
    pub havdalah: Option<String>,

    /// Weekly portion name, Hebrew where available.
    pub parsha: Option<String>,
}

impl ExtractedTimes {
    fn is_complete(&self) -> bool {
        self.candle_lighting.is_some() && self.havdalah.is_some() && self.parsha.is_some()
    }
}

/// Decode the `items` array out of a raw Hebcal payload.
///
/// The payload itself is only borrowed so it can be returned to clients
/// unchanged. A payload without `items` decodes to an empty list.
///
/// The payload and every item must be JSON objects. serde would otherwise
/// accept arrays in their place, read positionally as struct fields.
pub fn parse_items(raw: &Value) -> Result<Vec<ShabbatItem>, serde_json::Error> {
    let Some(object) = raw.as_object() else {
        return Err(de::Error::custom("shabbat payload is not a JSON object"));
    };

    if let Some(Value::Array(items)) = object.get("items") {
        if let Some(pos) = items.iter().position(|item| !item.is_object()) {
            return Err(de::Error::custom(format!(
                "shabbat item {pos} is not a JSON object"
            )));
        }
    }

    let response = ShabbatResponse::deserialize(raw)?;
    Ok(response.items)
}

/// Extract candle lighting, havdalah and parsha from an ordered item list.
///
/// # Examples
///
/// ```
/// use shabbat_server::hebcal::{ShabbatItem, extract_times};
///
/// let items = vec![
///     ShabbatItem::new("candles", "Candle lighting: 7:01pm"),
///     ShabbatItem::new("havdalah", "Havdalah: 8:15pm"),
///     ShabbatItem::new("parashat", "Parshat Noach").with_hebrew("פרשת נח"),
/// ];
///
/// let times = extract_times(&items);
/// assert_eq!(times.candle_lighting.as_deref(), Some("7:01pm"));
/// assert_eq!(times.havdalah.as_deref(), Some("8:15pm"));
/// assert_eq!(times.parsha.as_deref(), Some("פרשת נח"));
/// ```
pub fn extract_times(items: &[ShabbatItem]) -> ExtractedTimes {
    let mut times = ExtractedTimes::default();

    for item in items {
        let title = item.title.as_deref();

        match item.category.as_deref() {
            Some(CANDLES) if times.candle_lighting.is_none() => {
                times.candle_lighting = title.map(time_from_title);
            }
            Some(HAVDALAH) if times.havdalah.is_none() => {
                times.havdalah = title.map(time_from_title);
            }
            Some(PARASHAT) if times.parsha.is_none() => {
                times.parsha = item
                    .hebrew
                    .as_deref()
                    .filter(|h| !h.is_empty())
                    .or(title)
                    .map(str::to_string);
            }
            _ => continue,
        }

        if times.is_complete() {
            break;
        }
    }

    times
}

/// Pull the time out of a Hebcal display title.
///
/// Keeps whatever follows the first colon, trimmed. A title without a colon
/// is returned unchanged. This is a textual heuristic, not a time parse.
///
/// ```
/// use shabbat_server::hebcal::time_from_title;
///
/// assert_eq!(time_from_title("Candle lighting: 7:01pm"), "7:01pm");
/// assert_eq!(time_from_title("Havdalah (50 min): 8:15pm"), "8:15pm");
/// assert_eq!(time_from_title("CandleLighting7pm"), "CandleLighting7pm");
/// ```
pub fn time_from_title(title: &str) -> String {
    match title.split_once(':') {
        Some((_, rest)) => rest.trim().to_string(),
        None => title.to_string(),
    }
}
