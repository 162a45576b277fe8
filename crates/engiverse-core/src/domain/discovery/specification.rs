//! Discovery specifications
//!
//! Composable specifications for filtering catalog projects.

use std::sync::Arc;

use crate::domain::projects::Project;
use crate::domain::specification::{AndSpecification, Specification, TrueSpec};

use super::criteria::FilterCriteria;

/// Case-insensitive substring match on the title
pub struct TitleContainsSpec {
    needle: String,
}

impl TitleContainsSpec {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl Specification<Project> for TitleContainsSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.title.to_lowercase().contains(&self.needle)
    }
}

/// Case-insensitive substring match on the description
pub struct DescriptionContainsSpec {
    needle: String,
}

impl DescriptionContainsSpec {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl Specification<Project> for DescriptionContainsSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.description.to_lowercase().contains(&self.needle)
    }
}

/// Case-insensitive substring match on any single tech stack entry
pub struct TechStackContainsSpec {
    needle: String,
}

impl TechStackContainsSpec {
    pub fn new(needle: &str) -> Self {
        Self {
            needle: needle.to_lowercase(),
        }
    }
}

impl Specification<Project> for TechStackContainsSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project
            .tech_stack
            .iter()
            .any(|tech| tech.to_lowercase().contains(&self.needle))
    }
}

/// Free-text search: title OR description OR tech stack
pub fn text_search_spec(text: &str) -> impl Specification<Project> + 'static {
    TitleContainsSpec::new(text)
        .or(DescriptionContainsSpec::new(text))
        .or(TechStackContainsSpec::new(text))
}

/// Exact match on the domain
pub struct DomainSpec {
    domain: String,
}

impl DomainSpec {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl Specification<Project> for DomainSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.domain == self.domain
    }
}

/// Exact match on the canonical difficulty name
///
/// A selector that names no known difficulty matches nothing.
pub struct DifficultySpec {
    difficulty: String,
}

impl DifficultySpec {
    pub fn new(difficulty: impl Into<String>) -> Self {
        Self {
            difficulty: difficulty.into(),
        }
    }
}

impl Specification<Project> for DifficultySpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.difficulty.as_str() == self.difficulty
    }
}

/// Exact match on the canonical status name
pub struct StatusSpec {
    status: String,
}

impl StatusSpec {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl Specification<Project> for StatusSpec {
    fn is_satisfied_by(&self, project: &Project) -> bool {
        project.status.as_str() == self.status
    }
}

/// Builder for composing discovery specifications
///
/// Every present spec must hold (logical AND). Absent specs pass everything.
#[derive(Default)]
pub struct ProjectSpecBuilder {
    text_spec: Option<Arc<dyn Specification<Project>>>,
    domain_spec: Option<DomainSpec>,
    difficulty_spec: Option<DifficultySpec>,
    status_spec: Option<StatusSpec>,
}

impl ProjectSpecBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder with one spec per active criterion
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut builder = Self::new();
        if let Some(text) = criteria.search_text.as_deref() {
            builder = builder.with_text(text);
        }
        if let Some(domain) = criteria.domain.as_deref() {
            builder = builder.with_domain(domain);
        }
        if let Some(difficulty) = criteria.difficulty.as_deref() {
            builder = builder.with_difficulty(difficulty);
        }
        if let Some(status) = criteria.status.as_deref() {
            builder = builder.with_status(status);
        }
        builder
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text_spec = Some(Arc::new(text_search_spec(text)));
        self
    }

    pub fn with_domain(mut self, domain: &str) -> Self {
        self.domain_spec = Some(DomainSpec::new(domain));
        self
    }

    pub fn with_difficulty(mut self, difficulty: &str) -> Self {
        self.difficulty_spec = Some(DifficultySpec::new(difficulty));
        self
    }

    pub fn with_status(mut self, status: &str) -> Self {
        self.status_spec = Some(StatusSpec::new(status));
        self
    }

    /// Number of specs that will be checked
    pub fn active_count(&self) -> usize {
        [
            self.text_spec.is_some(),
            self.domain_spec.is_some(),
            self.difficulty_spec.is_some(),
            self.status_spec.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    /// Collapse the present specs into a single AND chain
    pub fn build(self) -> Arc<dyn Specification<Project>> {
        let mut specs: Vec<Arc<dyn Specification<Project>>> = Vec::new();
        if let Some(spec) = self.text_spec {
            specs.push(spec);
        }
        if let Some(spec) = self.domain_spec {
            specs.push(Arc::new(spec));
        }
        if let Some(spec) = self.difficulty_spec {
            specs.push(Arc::new(spec));
        }
        if let Some(spec) = self.status_spec {
            specs.push(Arc::new(spec));
        }

        specs.into_iter().fold(
            Arc::new(TrueSpec::new()) as Arc<dyn Specification<Project>>,
            |acc, spec| Arc::new(AndSpecification::new(acc, spec)),
        )
    }

    /// Keep the projects that satisfy every spec, in input order
    pub fn filter(self, projects: &[Project]) -> Vec<Project> {
        let spec = self.build();
        projects
            .iter()
            .filter(|p| spec.is_satisfied_by(p))
            .cloned()
            .collect()
    }
}
