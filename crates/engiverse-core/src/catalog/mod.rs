//! Project catalog
//!
//! The catalog is the full project collection the discovery view works on.
//! It is supplied wholesale by a [`ProjectSource`] at load time and is
//! read-only afterwards.
//!
//! # Usage
//!
//! ```ignore
//! use engiverse_core::catalog::{FixtureSource, ProjectCatalog};
//!
//! let catalog = ProjectCatalog::load(&FixtureSource).await?;
//! let project = catalog.get("1");
//! ```

pub mod options;
pub mod source;

pub use options::{KNOWN_DOMAINS, is_known_domain};
pub use source::{FixtureSource, JsonFileSource, ProjectSource};

use tracing::info;

use crate::domain::projects::Project;
use crate::error::{Error, Result};

/// Loaded, read-only project collection
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Fetch every project from a source
    pub async fn load(source: &dyn ProjectSource) -> Result<Self> {
        let projects = source.fetch_projects().await?;
        info!(
            source = source.name(),
            count = projects.len(),
            "Loaded project catalog"
        );
        Ok(Self::new(projects))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Find a project by id
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Find a project by id, failing with `ProjectNotFound`
    pub fn require(&self, id: &str) -> Result<&Project> {
        self.get(id)
            .ok_or_else(|| Error::ProjectNotFound(id.to_string()))
    }

    /// Distinct domains present in the catalog, in first-seen order
    pub fn domains(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.domain.as_str()) {
                seen.push(project.domain.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projects::Difficulty;

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            Project::new("a", "", "IoT", Difficulty::Beginner).with_id("1"),
            Project::new("b", "", "Blockchain", Difficulty::Beginner).with_id("2"),
            Project::new("c", "", "IoT", Difficulty::Beginner).with_id("3"),
        ])
    }

    #[test]
    fn test_get_and_require() {
        let catalog = catalog();
        assert_eq!(catalog.get("2").map(|p| p.title.as_str()), Some("b"));
        assert!(catalog.get("9").is_none());

        let err = catalog.require("9").unwrap_err();
        assert_eq!(err.code(), "E001");
    }

    #[test]
    fn test_domains_first_seen_order() {
        assert_eq!(catalog().domains(), vec!["IoT", "Blockchain"]);
    }

    #[tokio::test]
    async fn test_load_fixture() {
        let catalog = ProjectCatalog::load(&FixtureSource).await.unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.get("1").is_some());
    }
}
