//! Filter criteria and sort keys

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Ordering applied after filtering. Every key sorts descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most recently updated first
    Recent,
    /// Most stars first
    Popular,
    /// Highest completion percentage first
    Completion,
    /// Highest health score first, missing scores count as 0
    Health,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Popular => "popular",
            Self::Completion => "completion",
            Self::Health => "health",
        }
    }

    /// Human readable label for sort pickers
    pub fn label(&self) -> &'static str {
        match self {
            Self::Recent => "Most Recent",
            Self::Popular => "Most Popular",
            Self::Completion => "Completion %",
            Self::Health => "AI Health Score",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "recent" => Some(Self::Recent),
            "popular" => Some(Self::Popular),
            "completion" => Some(Self::Completion),
            "health" => Some(Self::Health),
            _ => None,
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Recent, Self::Popular, Self::Completion, Self::Health]
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current search, filter and sort selection
///
/// Every field is optional. An absent or empty field never restricts the
/// result; `Default` is the "clear filters" state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub search_text: Option<String>,
    pub domain: Option<String>,
    pub difficulty: Option<String>,
    pub status: Option<String>,
    pub sort_key: Option<SortKey>,
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() { None } else { Some(value) }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from untyped control values
    ///
    /// Empty strings become absent. An unrecognized sort key becomes absent,
    /// which keeps the input order.
    pub fn from_raw(
        search_text: Option<&str>,
        domain: Option<&str>,
        difficulty: Option<&str>,
        status: Option<&str>,
        sort_key: Option<&str>,
    ) -> Self {
        let sort_key = sort_key.filter(|s| !s.is_empty()).and_then(|raw| {
            let parsed = SortKey::parse(raw);
            if parsed.is_none() {
                warn!(sort_key = raw, "Ignoring unrecognized sort key");
            }
            parsed
        });

        Self {
            search_text: search_text.and_then(non_empty),
            domain: domain.and_then(non_empty),
            difficulty: difficulty.and_then(non_empty),
            status: status.and_then(non_empty),
            sort_key,
        }
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = non_empty(text);
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = non_empty(domain);
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = non_empty(difficulty);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = non_empty(status);
        self
    }

    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_key = Some(key);
        self
    }

    /// Whether any filter (not the sort) narrows the result
    pub fn has_active_filters(&self) -> bool {
        self.search_text.is_some()
            || self.domain.is_some()
            || self.difficulty.is_some()
            || self.status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_parse() {
        for key in SortKey::all() {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("Recent"), None);
        assert_eq!(SortKey::parse("alphabetical"), None);
    }

    #[test]
    fn test_from_raw_normalizes_empty_values() {
        let criteria = FilterCriteria::from_raw(Some(""), Some(""), None, Some(""), Some(""));
        assert_eq!(criteria, FilterCriteria::default());
        assert!(!criteria.has_active_filters());
    }

    #[test]
    fn test_from_raw_drops_unknown_sort() {
        let criteria = FilterCriteria::from_raw(None, None, None, None, Some("newest"));
        assert_eq!(criteria.sort_key, None);

        let criteria = FilterCriteria::from_raw(None, None, None, None, Some("health"));
        assert_eq!(criteria.sort_key, Some(SortKey::Health));
    }

    #[test]
    fn test_sort_alone_is_not_an_active_filter() {
        let criteria = FilterCriteria::new().with_sort(SortKey::Popular);
        assert!(!criteria.has_active_filters());

        let criteria = criteria.with_status("abandoned");
        assert!(criteria.has_active_filters());
    }

    #[test]
    fn test_builders_treat_empty_as_absent() {
        let criteria = FilterCriteria::new().with_search("").with_domain("IoT");
        assert_eq!(criteria.search_text, None);
        assert_eq!(criteria.domain.as_deref(), Some("IoT"));
    }
}
