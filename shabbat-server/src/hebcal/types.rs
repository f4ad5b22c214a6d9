//! Hebcal API response DTOs.
//!
//! Only the fields the normalizer reads are modelled. Everything else stays
//! in the raw payload, which is passed through to API clients untouched.

use serde::Deserialize;

/// The part of a `shabbat` response we interpret.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShabbatResponse {
    /// Tagged calendar items. Hebcal omits the key when there is nothing to
    /// report, which is treated as an empty list.
    #[serde(default)]
    pub items: Vec<ShabbatItem>,
}

/// A single tagged item from the `items` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShabbatItem {
    /// Item kind: `"candles"`, `"havdalah"`, `"parashat"`, `"holiday"`, ...
    pub category: Option<String>,

    /// Display title, e.g. `"Candle lighting: 7:01pm"` or `"Parashat Noach"`.
    pub title: Option<String>,

    /// Hebrew-language label, present for parashat and holiday items.
    pub hebrew: Option<String>,
}

impl ShabbatItem {
    /// Create an item with a category and title.
    pub fn new(category: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            title: Some(title.into()),
            hebrew: None,
        }
    }

    /// Attach a Hebrew label.
    pub fn with_hebrew(mut self, hebrew: impl Into<String>) -> Self {
        self.hebrew = Some(hebrew.into());
        self
    }
}
