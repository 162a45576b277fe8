//! Discovery commands
//!
//! The view-layer side of discovery: holding the current criteria, applying
//! them to the catalog, and reporting what to render.

use serde::Serialize;

use crate::catalog::{KNOWN_DOMAINS, ProjectCatalog};
use crate::domain::discovery::{FilterCriteria, SortKey, apply};
use crate::domain::projects::{Difficulty, Project, ProjectStatus};

/// One rendered result of a discovery query
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryPage {
    pub projects: Vec<Project>,
    /// Number of projects shown
    pub shown: usize,
    /// Number of projects in the catalog
    pub total: usize,
    /// Whether a clear-filters action should be offered
    pub filters_active: bool,
}

impl DiscoveryPage {
    /// True when the empty-state view should be rendered
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// "Showing X of Y projects"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} projects", self.shown, self.total)
    }
}

/// Run one discovery query against the catalog
pub fn discover(catalog: &ProjectCatalog, criteria: &FilterCriteria) -> DiscoveryPage {
    let projects = apply(catalog.projects(), criteria);
    DiscoveryPage {
        shown: projects.len(),
        total: catalog.len(),
        filters_active: criteria.has_active_filters(),
        projects,
    }
}

/// Interactive discovery state
///
/// Owns a catalog snapshot and the current criteria. Each setter replaces
/// one criterion; `results` recomputes from scratch.
#[derive(Debug, Clone)]
pub struct DiscoverySession {
    catalog: ProjectCatalog,
    criteria: FilterCriteria,
}

impl DiscoverySession {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn with_criteria(mut self, criteria: FilterCriteria) -> Self {
        self.criteria = criteria;
        self
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_search(text);
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_domain(domain);
    }

    pub fn set_difficulty(&mut self, difficulty: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_difficulty(difficulty);
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.criteria = std::mem::take(&mut self.criteria).with_status(status);
    }

    /// Set the sort from a picker value; unrecognized values clear the sort
    pub fn set_sort(&mut self, raw: &str) {
        let parsed = FilterCriteria::from_raw(None, None, None, None, Some(raw));
        self.criteria.sort_key = parsed.sort_key;
    }

    /// Reset every criterion to absent
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters()
    }

    pub fn results(&self) -> DiscoveryPage {
        discover(&self.catalog, &self.criteria)
    }
}

/// Values offered by the discovery selectors
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptions {
    pub domains: Vec<String>,
    pub difficulties: Vec<String>,
    pub statuses: Vec<String>,
    /// (key, label) pairs
    pub sort_keys: Vec<(String, String)>,
}

/// Selector options: the known domains plus any extra domain in the catalog
pub fn filter_options(catalog: &ProjectCatalog) -> FilterOptions {
    let mut domains: Vec<String> = KNOWN_DOMAINS.iter().map(|d| d.to_string()).collect();
    for domain in catalog.domains() {
        if !domains.iter().any(|d| d == domain) {
            domains.push(domain.to_string());
        }
    }

    FilterOptions {
        domains,
        difficulties: Difficulty::all()
            .iter()
            .map(|d| d.as_str().to_string())
            .collect(),
        statuses: ProjectStatus::all()
            .iter()
            .map(|s| s.as_str().to_string())
            .collect(),
        sort_keys: SortKey::all()
            .iter()
            .map(|k| (k.as_str().to_string(), k.label().to_string()))
            .collect(),
    }
}
