//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Country`], [`Continent`] - Records from the remote countries schema
//! - [`CountriesQuery`], [`CountryQuery`], [`ContinentsQuery`] - Query result wrappers
//! - [`Route`] - Hash-based navigation
//! - [`Remote`] - Per-view fetch state machine

mod country;
mod remote;
mod route;

pub use country::{Continent, ContinentsQuery, CountriesQuery, Country, CountryQuery};
pub use remote::Remote;
pub use route::Route;
