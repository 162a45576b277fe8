//! Catalog sources
//!
//! Fetching the project collection is the only asynchronous step in
//! discovery. Sources hand back the complete collection; nothing is paged or
//! cached here.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::domain::projects::Project;
use crate::error::{Error, Result};

/// Sample catalog compiled into the binary
const FIXTURE_CATALOG: &str = include_str!("../../fixtures/projects.json");

/// Something that can supply the full project collection
#[async_trait]
pub trait ProjectSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> String;

    /// Fetch every project
    async fn fetch_projects(&self) -> Result<Vec<Project>>;
}

/// The embedded sample catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

#[async_trait]
impl ProjectSource for FixtureSource {
    fn name(&self) -> String {
        "fixture".to_string()
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        Ok(serde_json::from_str(FIXTURE_CATALOG)?)
    }
}

/// A JSON file holding an array of projects
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProjectSource for JsonFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>> {
        debug!(path = %self.path.display(), "Reading catalog file");

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::CatalogLoad {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(serde_json::from_str(&contents)?)
    }
}
