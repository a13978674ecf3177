//! Client-side query cache.
//!
//! The cache is the single piece of global mutable state in the application.
//! It has a deliberately narrow contract - `read`, `write`, and a reactive
//! `watch` - so the merge-on-create behavior can be tested in isolation
//! without a network layer.

use leptos::prelude::*;

use crate::models::Country;

/// Identifies a cached query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKey {
    /// The `GetCountries` list query.
    Countries,
}

/// In-memory store for cached query results.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals. The cache
/// lives for the whole session; entries are never evicted. The cached list
/// and the remote source of truth may diverge until the next full refetch -
/// consistency is maintained opportunistically, not transactionally.
#[derive(Clone, Copy)]
pub struct QueryCache {
    countries: RwSignal<Option<Vec<Country>>>,
}

impl QueryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            countries: RwSignal::new(None),
        }
    }

    /// Read the cached result for a query, if any.
    ///
    /// This is a plain snapshot read; it does not subscribe the caller to
    /// later writes. Use [`QueryCache::watch`] for reactive reads.
    pub fn read(&self, key: QueryKey) -> Option<Vec<Country>> {
        match key {
            QueryKey::Countries => self.countries.get_untracked(),
        }
    }

    /// Overwrite the cached result for a query.
    ///
    /// Last writer wins; no reconciliation is attempted against concurrent
    /// writes from elsewhere.
    pub fn write(&self, key: QueryKey, value: Vec<Country>) {
        match key {
            QueryKey::Countries => self.countries.set(Some(value)),
        }
    }

    /// Reactive view of a cache entry.
    ///
    /// Views that render from this signal re-render on every [`write`],
    /// which is how the list picks up a mutation's patch without a refetch.
    ///
    /// [`write`]: QueryCache::write
    pub fn watch(&self, key: QueryKey) -> Signal<Option<Vec<Country>>> {
        match key {
            QueryKey::Countries => self.countries.into(),
        }
    }

    /// Merge a newly created country into the cached list query.
    ///
    /// An absent entry is treated as an empty list. The record is appended at
    /// the end; existing entries are neither reordered nor de-duplicated.
    pub fn insert_country(&self, created: Country) {
        let mut countries = self.read(QueryKey::Countries).unwrap_or_default();
        countries.push(created);
        self.write(QueryKey::Countries, countries);
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str, name: &str, emoji: &str) -> Country {
        Country {
            code: code.to_string(),
            name: name.to_string(),
            emoji: emoji.to_string(),
            continent: None,
        }
    }

    #[test]
    fn test_insert_appends_to_cached_list() {
        let cache = QueryCache::new();
        cache.write(
            QueryKey::Countries,
            vec![country("DE", "Germany", "🇩🇪"), country("ES", "Spain", "🇪🇸")],
        );

        cache.insert_country(country("FR", "France", "🇫🇷"));

        let cached = cache.read(QueryKey::Countries).unwrap();
        let codes: Vec<&str> = cached.iter().map(|c| c.code.as_str()).collect();
        // Appended at the end, previous order untouched
        assert_eq!(codes, ["DE", "ES", "FR"]);
    }

    #[test]
    fn test_insert_into_empty_cache() {
        let cache = QueryCache::new();
        assert_eq!(cache.read(QueryKey::Countries), None);

        cache.insert_country(country("FR", "France", "🇫🇷"));

        let cached = cache.read(QueryKey::Countries).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].code, "FR");
    }

    #[test]
    fn test_insert_does_not_deduplicate() {
        let cache = QueryCache::new();
        cache.write(QueryKey::Countries, vec![country("FR", "France", "🇫🇷")]);

        cache.insert_country(country("FR", "France", "🇫🇷"));

        // Last writer wins, no reconciliation
        assert_eq!(cache.read(QueryKey::Countries).unwrap().len(), 2);
    }

    #[test]
    fn test_write_overwrites() {
        let cache = QueryCache::new();
        cache.write(QueryKey::Countries, vec![country("DE", "Germany", "🇩🇪")]);
        cache.write(QueryKey::Countries, vec![country("ES", "Spain", "🇪🇸")]);

        let cached = cache.read(QueryKey::Countries).unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].code, "ES");
    }
}
