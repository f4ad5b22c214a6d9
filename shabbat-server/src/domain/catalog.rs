//! The fixed city catalog.

use super::City;
use super::error::UnknownCity;

/// Built-in cities, in the order they are listed by the API.
static CITIES: [City; 20] = [
    City::new("new-york", "New York", "USA", 40.7128, -74.0060, "America/New_York"),
    City::new("los-angeles", "Los Angeles", "USA", 34.0522, -118.2437, "America/Los_Angeles"),
    City::new("miami", "Miami", "USA", 25.7617, -80.1918, "America/New_York"),
    City::new("london", "London", "UK", 51.5072, -0.1276, "Europe/London"),
    City::new("paris", "Paris", "France", 48.8566, 2.3522, "Europe/Paris"),
    City::new("jerusalem", "Jerusalem", "Israel", 31.7683, 35.2137, "Asia/Jerusalem"),
    City::new("tel-aviv", "Tel Aviv", "Israel", 32.0853, 34.7818, "Asia/Jerusalem"),
    City::new("toronto", "Toronto", "Canada", 43.6532, -79.3832, "America/Toronto"),
    City::new("montreal", "Montreal", "Canada", 45.5019, -73.5674, "America/Toronto"),
    City::new("sydney", "Sydney", "Australia", -33.8688, 151.2093, "Australia/Sydney"),
    City::new("melbourne", "Melbourne", "Australia", -37.8136, 144.9631, "Australia/Melbourne"),
    City::new("johannesburg", "Johannesburg", "South Africa", -26.2041, 28.0473, "Africa/Johannesburg"),
    City::new("mexico-city", "Mexico City", "Mexico", 19.4326, -99.1332, "America/Mexico_City"),
    City::new("buenos-aires", "Buenos Aires", "Argentina", -34.6037, -58.3816, "America/Argentina/Buenos_Aires"),
    City::new("sao-paulo", "São Paulo", "Brazil", -23.5505, -46.6333, "America/Sao_Paulo"),
    City::new("madrid", "Madrid", "Spain", 40.4168, -3.7038, "Europe/Madrid"),
    City::new("rome", "Rome", "Italy", 41.9028, 12.4964, "Europe/Rome"),
    City::new("moscow", "Moscow", "Russia", 55.7558, 37.6173, "Europe/Moscow"),
    City::new("singapore", "Singapore", "Singapore", 1.3521, 103.8198, "Asia/Singapore"),
    City::new("hong-kong", "Hong Kong", "China", 22.3193, 114.1694, "Asia/Hong_Kong"),
];

/// Read-only lookup over a fixed table of cities.
///
/// The catalog is a cheap handle to a `'static` slice, so it can be copied
/// into request handlers freely. Lookups are exact, case-sensitive slug
/// matches.
///
/// # Examples
///
/// ```
/// use shabbat_server::domain::CityCatalog;
///
/// let catalog = CityCatalog::builtin();
/// assert_eq!(catalog.find("london").unwrap().name, "London");
///
/// // Slugs are case-sensitive
/// assert!(catalog.find("London").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CityCatalog {
    cities: &'static [City],
}

impl CityCatalog {
    /// The built-in catalog of 20 world cities.
    pub fn builtin() -> Self {
        Self { cities: &CITIES }
    }

    /// All cities, in declared order.
    pub fn list(&self) -> &'static [City] {
        self.cities
    }

    /// Look up a city by its slug.
    pub fn find(&self, slug: &str) -> Result<&'static City, UnknownCity> {
        self.cities
            .iter()
            .find(|c| c.slug == slug)
            .ok_or_else(|| UnknownCity {
                slug: slug.to_string(),
            })
    }

    /// The first city in declared order, if any.
    pub fn first(&self) -> Option<&'static City> {
        self.cities.first()
    }

    /// Number of cities in the catalog.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if the catalog holds no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

impl Default for CityCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
