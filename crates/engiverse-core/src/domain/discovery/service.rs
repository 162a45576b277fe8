//! Filter-then-sort over a project collection

use std::cmp::Reverse;

use tracing::debug;

use crate::domain::projects::Project;

use super::criteria::{FilterCriteria, SortKey};
use super::specification::ProjectSpecBuilder;

/// Compute the visible project list for the given criteria
///
/// Filters first (all active filters must match), then sorts by the
/// criteria's sort key. The input slice is never modified and the returned
/// vector holds clones, so callers keep their own collection intact.
/// Without a sort key the filtered projects keep their input order.
pub fn apply(projects: &[Project], criteria: &FilterCriteria) -> Vec<Project> {
    let builder = ProjectSpecBuilder::from_criteria(criteria);
    let active_filters = builder.active_count();
    let mut visible = builder.filter(projects);

    if let Some(key) = criteria.sort_key {
        sort_projects(&mut visible, key);
    }

    debug!(
        total = projects.len(),
        visible = visible.len(),
        active_filters,
        sort_key = criteria.sort_key.map(|k| k.as_str()),
        "Applied discovery criteria"
    );

    visible
}

/// Stable descending sort on one key
///
/// Ties keep their relative order. Projects without an analysis sort as a
/// health score of 0.
pub fn sort_projects(projects: &mut [Project], key: SortKey) {
    match key {
        SortKey::Recent => projects.sort_by_key(|p| Reverse(p.last_updated)),
        SortKey::Popular => projects.sort_by_key(|p| Reverse(p.stars)),
        SortKey::Completion => projects.sort_by_key(|p| Reverse(p.completion_percentage)),
        SortKey::Health => projects.sort_by_key(|p| Reverse(p.health_score().unwrap_or(0))),
    }
}
