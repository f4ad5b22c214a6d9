//! City records.

use serde::Serialize;

/// A city the API can answer for.
///
/// Coordinates are decimal degrees; `tzid` is an IANA zone name that the
/// upstream provider uses to localize sunset-based times.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    /// Unique, lowercase-hyphenated identifier (e.g. `"tel-aviv"`).
    pub slug: &'static str,

    /// Display name.
    pub name: &'static str,

    /// Country display name.
    pub country: &'static str,

    pub latitude: f64,
    pub longitude: f64,

    /// IANA timezone identifier (e.g. `"Europe/London"`).
    pub tzid: &'static str,
}

impl City {
    /// Construct a city record. Used to build the static catalog.
    pub const fn new(
        slug: &'static str,
        name: &'static str,
        country: &'static str,
        latitude: f64,
        longitude: f64,
        tzid: &'static str,
    ) -> Self {
        Self {
            slug,
            name,
            country,
            latitude,
            longitude,
            tzid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_api_field_names() {
        let city = City::new("london", "London", "UK", 51.5072, -0.1276, "Europe/London");
        let json = serde_json::to_value(&city).unwrap();

        assert_eq!(json["slug"], "london");
        assert_eq!(json["name"], "London");
        assert_eq!(json["country"], "UK");
        assert_eq!(json["latitude"], 51.5072);
        assert_eq!(json["longitude"], -0.1276);
        assert_eq!(json["tzid"], "Europe/London");
        assert_eq!(json.as_object().unwrap().len(), 6);
    }
}
