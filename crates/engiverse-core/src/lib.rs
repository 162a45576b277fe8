//! EngiVerse Core Library
//!
//! This crate provides the core functionality for EngiVerse, including:
//! - Project records and their read-only AI analysis data
//! - Discovery (search, filter and sort over the catalog)
//! - Catalog sources (embedded fixture or JSON file)
//! - Submission validation for newly uploaded projects
//! - Configuration and error types shared by front-ends

pub mod application;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{ProjectCatalog, ProjectSource};
    pub use crate::config::Config;
    pub use crate::domain::discovery::{FilterCriteria, SortKey, apply};
    pub use crate::domain::projects::{Difficulty, Project, ProjectStatus};
    pub use crate::error::{Error, Result};
}
