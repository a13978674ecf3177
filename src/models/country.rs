//! Country and continent records as returned by the remote schema.

use serde::{Deserialize, Serialize};

/// A country record.
///
/// `code` is the unique 2-letter identifier; it is immutable once created and
/// is the lookup key used by the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub emoji: String,
    /// Present only in selections that include the continent (detail view,
    /// mutation result). The list query does not select it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continent: Option<Continent>,
}

/// A continent reference as returned by the schema.
///
/// Continents are read-only reference data; this application never creates or
/// mutates them. The `code` field is absent from selections that only need
/// the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub name: String,
}

// =============================================================================
// Query result wrappers
// =============================================================================

/// Result shape of the `GetCountries` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountriesQuery {
    pub countries: Vec<Country>,
}

/// Result shape of the `GetCountry` query.
///
/// A `null` country means no record matched the requested code; this is a
/// distinct non-error state, not a transport failure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryQuery {
    pub country: Option<Country>,
}

/// Result shape of the `GetContinents` query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContinentsQuery {
    pub continents: Vec<Continent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_without_continent() {
        let country: Country =
            serde_json::from_str(r#"{"code":"FR","name":"France","emoji":"🇫🇷"}"#).unwrap();
        assert_eq!(country.code, "FR");
        assert_eq!(country.continent, None);
    }

    #[test]
    fn test_country_with_continent_name_only() {
        let country: Country = serde_json::from_str(
            r#"{"code":"FR","name":"France","emoji":"🇫🇷","continent":{"name":"Europe"}}"#,
        )
        .unwrap();
        let continent = country.continent.unwrap();
        assert_eq!(continent.name, "Europe");
        assert_eq!(continent.code, None);
    }

    #[test]
    fn test_null_country_is_not_found() {
        // A missing record decodes as None rather than failing the query
        let result: CountryQuery = serde_json::from_str(r#"{"country":null}"#).unwrap();
        assert_eq!(result.country, None);
    }
}
