//! Hash-based routing for the two application views.

/// Application routes for hash-based navigation.
/// URL format: `#/` for the country list, `#/country/FR` for a detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Country list view: #/ or empty hash
    Home,
    /// Country detail view: #/country/{code}
    Country {
        /// 2-letter country code from the URL. May be empty when the hash is
        /// `#/country/`; the detail view then skips the fetch entirely.
        code: String,
    },
}

impl Route {
    /// Parse URL hash into a Route.
    ///
    /// Hashes that match neither view fall back to `Home`.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');

        if path.is_empty() {
            return Self::Home;
        }

        match path.strip_prefix("country/") {
            Some(code) => Self::Country {
                code: code.trim_end_matches('/').to_string(),
            },
            None => Self::Home,
        }
    }

    /// Convert the route to an anchor href.
    pub fn href(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Country { code } => format!("#/country/{}", code),
        }
    }

    /// Build the detail route for a country code.
    pub fn country(code: &str) -> Self {
        Self::Country {
            code: code.to_string(),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(
            Route::from_hash("#/country/FR"),
            Route::Country {
                code: "FR".to_string(),
            }
        );
        assert_eq!(
            Route::from_hash("#/country/NZ/"),
            Route::Country {
                code: "NZ".to_string(),
            }
        );
        // Missing code parses to an empty code; the detail view skips the fetch
        assert_eq!(
            Route::from_hash("#/country/"),
            Route::Country {
                code: String::new(),
            }
        );
        // Unknown paths fall back to the list view
        assert_eq!(Route::from_hash("#/nonsense"), Route::Home);
    }

    #[test]
    fn test_route_href() {
        assert_eq!(Route::Home.href(), "#/");
        assert_eq!(Route::country("FR").href(), "#/country/FR");
    }
}
