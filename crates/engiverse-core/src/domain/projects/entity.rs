//! Project entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::analysis::AiAnalysis;

/// How much experience a project expects from an adopter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Canonical lowercase name, as used by filter selectors
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Parse from the canonical name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn all() -> [Self; 3] {
        [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a project in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Abandoned,
    Active,
    Completed,
}

impl ProjectStatus {
    /// Canonical lowercase name, as used by filter selectors
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Abandoned => "abandoned",
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
        }
    }

    /// Parse from the canonical name
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "abandoned" => Some(ProjectStatus::Abandoned),
            "active" => Some(ProjectStatus::Active),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }

    pub fn all() -> [Self; 3] {
        [
            ProjectStatus::Abandoned,
            ProjectStatus::Active,
            ProjectStatus::Completed,
        ]
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role a user plays on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Contributor,
    Mentor,
}

/// Public profile of a project author or contributor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_profile: Option<String>,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            email: String::new(),
            role: UserRole::Student,
            skills: Vec::new(),
            university: None,
            github_profile: None,
        }
    }
}

/// State of a request to take over a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdoptionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A request from a user to adopt a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub requester_id: String,
    pub message: String,
    #[serde(default)]
    pub status: AdoptionStatus,
    pub created_at: DateTime<Utc>,
}

/// A project listed in the catalog
///
/// Records are read-only once loaded. Field names follow the catalog's JSON
/// shape (`_id`, `techStack`, `completionPercentage`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque unique identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Open set, e.g. "IoT" or "Machine Learning"
    pub domain: String,
    pub difficulty: Difficulty,
    pub status: ProjectStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_author: Option<User>,
    #[serde(default)]
    pub contributors: Vec<User>,
    #[serde(default)]
    pub adoption_requests: Vec<AdoptionRequest>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<AiAnalysis>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// 0..=100
    pub completion_percentage: u8,
    pub stars: u32,
    pub last_updated: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project with a fresh id and no analysis
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        domain: impl Into<String>,
        difficulty: Difficulty,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            tech_stack: Vec::new(),
            domain: domain.into(),
            difficulty,
            status: ProjectStatus::Abandoned,
            repo_url: None,
            demo_url: None,
            video_url: None,
            original_author: None,
            contributors: Vec::new(),
            adoption_requests: Vec::new(),
            ai_analysis: None,
            tags: Vec::new(),
            completion_percentage: 0,
            stars: 0,
            last_updated: now,
            created_at: now,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_tech_stack<I, S>(mut self, tech: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = tech.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_stars(mut self, stars: u32) -> Self {
        self.stars = stars;
        self
    }

    pub fn with_completion(mut self, percentage: u8) -> Self {
        self.completion_percentage = percentage.min(100);
        self
    }

    pub fn with_last_updated(mut self, at: DateTime<Utc>) -> Self {
        self.last_updated = at;
        self
    }

    pub fn with_analysis(mut self, analysis: AiAnalysis) -> Self {
        self.ai_analysis = Some(analysis);
        self
    }

    pub fn with_author(mut self, author: User) -> Self {
        self.original_author = Some(author);
        self
    }

    /// Health score from the attached analysis, if any
    pub fn health_score(&self) -> Option<u8> {
        self.ai_analysis.as_ref().map(|a| a.health_score)
    }
}
