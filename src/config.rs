//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "Country Explorer";

// =============================================================================
// Network Configuration
// =============================================================================

/// GraphQL endpoint serving the countries schema.
pub const GRAPHQL_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Reference Data
// =============================================================================

/// A continent option for the creation form's select control.
///
/// This is reference data supplied to the client, not fetched from the API:
/// the `id` is the server-side identifier expected by the `addCountry`
/// mutation's `continent: { id }` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContinentOption {
    pub id: u32,
    pub name: &'static str,
}

/// Fixed continent list used to populate the creation form.
pub const CONTINENTS: &[ContinentOption] = &[
    ContinentOption { id: 1, name: "Africa" },
    ContinentOption { id: 2, name: "Antarctica" },
    ContinentOption { id: 3, name: "Asia" },
    ContinentOption { id: 4, name: "Europe" },
    ContinentOption { id: 5, name: "North America" },
    ContinentOption { id: 6, name: "Oceania" },
    ContinentOption { id: 7, name: "South America" },
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
