//! Core application logic independent of the UI layer.
//!
//! - [`cache`] - Client-side query cache and the merge-on-create contract
//! - [`error`] - Error types for fetch and GraphQL failures
//! - [`graphql`] - Request/response envelope for the GraphQL wire format
//! - [`queries`] - The four named operations against the countries schema
//! - [`validate`] - Creation form validation

mod cache;
mod error;
mod graphql;
mod queries;
mod validate;

pub use cache::{QueryCache, QueryKey};
pub use error::{FetchError, GraphQlError};
pub use queries::{
    ContinentInput, NewCountryInput, add_country, fetch_continents, fetch_countries, fetch_country,
};
pub use validate::{FieldErrors, normalize_code, validate_new_country};
