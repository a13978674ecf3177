//! Request/response envelope for the GraphQL wire format.
//!
//! Operations are plain POSTs of `{"query": ..., "variables": ...}` against
//! the configured endpoint; responses carry `data` and/or `errors` per the
//! GraphQL over-HTTP convention. Server errors are folded into a single
//! message string surfaced verbatim to the views.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::GRAPHQL_ENDPOINT;
use crate::core::error::GraphQlError;
use crate::utils::post_json;

/// Outgoing operation envelope.
#[derive(Serialize)]
struct GraphQlRequest<'a, V: Serialize> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a V>,
}

/// Incoming response envelope.
#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlResponseError>,
}

/// A single entry of the response `errors` array.
///
/// Only the message is kept; locations and extensions are not used anywhere.
#[derive(Deserialize)]
struct GraphQlResponseError {
    message: String,
}

/// Execute a GraphQL operation against the configured endpoint.
///
/// `T` is the shape of the `data` field for this operation. Variables are
/// optional so that operations without inputs can pass `None::<&()>`.
pub async fn execute<V, T>(query: &str, variables: Option<&V>) -> Result<T, GraphQlError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let request = GraphQlRequest { query, variables };
    let body = serde_json::to_string(&request)
        .map_err(|e| GraphQlError::Server(format!("Failed to encode request: {}", e)))?;

    let text = post_json(GRAPHQL_ENDPOINT, &body).await?;
    decode_response(&text)
}

/// Decode a response body into the operation's data type.
fn decode_response<T: DeserializeOwned>(text: &str) -> Result<T, GraphQlError> {
    let response: GraphQlResponse<T> = serde_json::from_str(text)
        .map_err(|e| GraphQlError::Server(format!("Invalid response: {}", e)))?;

    if !response.errors.is_empty() {
        let message = response
            .errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(GraphQlError::Server(message));
    }

    response.data.ok_or(GraphQlError::MissingData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CountriesQuery;

    #[test]
    fn test_decode_data() {
        let text = r#"{"data":{"countries":[{"code":"FR","name":"France","emoji":"🇫🇷"}]}}"#;
        let data: CountriesQuery = decode_response(text).unwrap();
        assert_eq!(data.countries.len(), 1);
        assert_eq!(data.countries[0].code, "FR");
    }

    #[test]
    fn test_decode_server_errors_verbatim() {
        let text = r#"{"data":null,"errors":[{"message":"Country code already exists"}]}"#;
        let err = decode_response::<CountriesQuery>(text).unwrap_err();
        assert_eq!(
            err,
            GraphQlError::Server("Country code already exists".to_string())
        );
        assert_eq!(err.to_string(), "Country code already exists");
    }

    #[test]
    fn test_decode_multiple_errors_joined() {
        let text = r#"{"errors":[{"message":"first"},{"message":"second"}]}"#;
        let err = decode_response::<CountriesQuery>(text).unwrap_err();
        assert_eq!(err, GraphQlError::Server("first; second".to_string()));
    }

    #[test]
    fn test_decode_missing_data() {
        let err = decode_response::<CountriesQuery>("{}").unwrap_err();
        assert_eq!(err, GraphQlError::MissingData);
    }
}
