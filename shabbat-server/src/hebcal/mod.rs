//! Hebcal Shabbat times client.
//!
//! This module provides an HTTP client for the Hebcal `shabbat` endpoint and
//! the logic that reduces its response to the three values the API serves.
//!
//! Key characteristics of the Hebcal response:
//! - Everything of interest lives in a flat `items` array, tagged by `category`
//! - Item order matters: the first item of a category is the one for this week
//! - Times are embedded in display titles (e.g. `"Candle lighting: 7:01pm"`)
//!   and are kept as opaque strings

mod client;
mod error;
mod normalize;
mod types;

pub use client::{HebcalClient, HebcalConfig};
pub use error::HebcalError;
pub use normalize::{ExtractedTimes, extract_times, parse_items, time_from_title};
pub use types::{ShabbatItem, ShabbatResponse};
