//! Project domain
//!
//! Read-only project records as supplied by the catalog, plus the static
//! AI analysis data attached to some of them.

pub mod analysis;
pub mod entity;

pub use analysis::{AiAnalysis, HealthBand, PitchDeck, Priority, RoadmapItem};
pub use entity::{
    AdoptionRequest, AdoptionStatus, Difficulty, Project, ProjectStatus, User, UserRole,
};
