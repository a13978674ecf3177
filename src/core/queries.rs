//! The four named operations against the countries schema.
//!
//! Each operation is a fixed document with a fixed field selection, paired
//! with a typed variables struct and a typed execution function. No
//! validation or transformation happens here; this module is the declarative
//! contract consumed by the views.

use serde::Serialize;

use crate::core::error::GraphQlError;
use crate::core::graphql::execute;
use crate::models::{Continent, ContinentsQuery, CountriesQuery, Country, CountryQuery};

// =============================================================================
// Documents
// =============================================================================

const GET_COUNTRIES: &str = "\
query GetCountries {
  countries {
    code
    name
    emoji
  }
}";

const GET_COUNTRY: &str = "\
query GetCountry($code: String!) {
  country(code: $code) {
    code
    name
    emoji
    continent {
      name
    }
  }
}";

const GET_CONTINENTS: &str = "\
query GetContinents {
  continents {
    code
    name
  }
}";

const ADD_COUNTRY: &str = "\
mutation AddCountry($data: NewCountryInput!) {
  addCountry(data: $data) {
    code
    name
    emoji
    continent {
      name
    }
  }
}";

// =============================================================================
// Variables
// =============================================================================

#[derive(Serialize)]
struct CountryVariables<'a> {
    code: &'a str,
}

/// Input object for the `addCountry` mutation.
///
/// The `continent` key must be absent from the serialized payload (not
/// `null`) when no continent is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCountryInput {
    pub name: String,
    pub code: String,
    pub emoji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<ContinentInput>,
}

/// Reference-by-identifier for the optional continent of a new country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContinentInput {
    pub id: u32,
}

#[derive(Serialize)]
struct AddCountryVariables {
    data: NewCountryInput,
}

#[derive(serde::Deserialize)]
struct AddCountryData {
    #[serde(rename = "addCountry")]
    add_country: Country,
}

// =============================================================================
// Execution
// =============================================================================

/// Fetch all countries (code, name, emoji).
pub async fn fetch_countries() -> Result<Vec<Country>, GraphQlError> {
    let data: CountriesQuery = execute(GET_COUNTRIES, None::<&()>).await?;
    Ok(data.countries)
}

/// Fetch one country by code, including its continent name.
///
/// `Ok(None)` means no record matched the code.
pub async fn fetch_country(code: &str) -> Result<Option<Country>, GraphQlError> {
    let variables = CountryVariables { code };
    let data: CountryQuery = execute(GET_COUNTRY, Some(&variables)).await?;
    Ok(data.country)
}

/// Fetch all continents.
#[allow(dead_code)]
pub async fn fetch_continents() -> Result<Vec<Continent>, GraphQlError> {
    let data: ContinentsQuery = execute(GET_CONTINENTS, None::<&()>).await?;
    Ok(data.continents)
}

/// Create a country, returning the server's view of the new record.
pub async fn add_country(input: NewCountryInput) -> Result<Country, GraphQlError> {
    let variables = AddCountryVariables { data: input };
    let data: AddCountryData = execute(ADD_COUNTRY, Some(&variables)).await?;
    Ok(data.add_country)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_with_continent_reference() {
        let input = NewCountryInput {
            name: "France".to_string(),
            code: "FR".to_string(),
            emoji: "🇫🇷".to_string(),
            continent: Some(ContinentInput { id: 4 }),
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "name": "France",
                "code": "FR",
                "emoji": "🇫🇷",
                "continent": { "id": 4 },
            })
        );
    }

    #[test]
    fn test_payload_without_continent_omits_key() {
        let input = NewCountryInput {
            name: "France".to_string(),
            code: "FR".to_string(),
            emoji: "🇫🇷".to_string(),
            continent: None,
        };
        let value = serde_json::to_value(&input).unwrap();
        // The key must be absent entirely, not serialized as null
        assert!(value.as_object().unwrap().get("continent").is_none());
    }

    #[test]
    fn test_add_country_response_shape() {
        let data: AddCountryData = serde_json::from_value(json!({
            "addCountry": {
                "code": "FR",
                "name": "France",
                "emoji": "🇫🇷",
                "continent": { "name": "Europe" },
            }
        }))
        .unwrap();
        assert_eq!(data.add_country.code, "FR");
        assert_eq!(data.add_country.continent.unwrap().name, "Europe");
    }

    #[test]
    fn test_documents_are_named_operations() {
        assert!(GET_COUNTRIES.starts_with("query GetCountries"));
        assert!(GET_COUNTRY.starts_with("query GetCountry($code: String!)"));
        assert!(GET_CONTINENTS.starts_with("query GetContinents"));
        assert!(ADD_COUNTRY.starts_with("mutation AddCountry($data: NewCountryInput!)"));
    }
}
