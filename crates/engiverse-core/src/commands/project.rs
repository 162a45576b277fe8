//! Project detail commands
//!
//! Read-only views of a single project: the summary card, the full record,
//! the health report built from its static analysis, and the pitch deck.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Result;
use crate::catalog::ProjectCatalog;
use crate::domain::projects::{AiAnalysis, HealthBand, Project, RoadmapItem};
use crate::error::Error;

/// Compact listing of a project, as shown in discovery results
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub status: String,
    pub difficulty: String,
    pub stars: u32,
    pub completion_percentage: u8,
    pub contributors: usize,
    /// First few tech stack entries
    pub tech_preview: Vec<String>,
    /// How many entries were left out of the preview
    pub tech_hidden: usize,
}

impl ProjectCard {
    /// Build a card showing at most `max_tech` tech stack entries
    pub fn from_project(project: &Project, max_tech: usize) -> Self {
        let tech_preview: Vec<String> =
            project.tech_stack.iter().take(max_tech).cloned().collect();
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            status: project.status.as_str().to_string(),
            difficulty: project.difficulty.as_str().to_string(),
            stars: project.stars,
            completion_percentage: project.completion_percentage,
            contributors: project.contributors.len(),
            tech_hidden: project.tech_stack.len() - tech_preview.len(),
            tech_preview,
        }
    }

    /// Tech preview with a "+N more" suffix when entries were hidden
    pub fn tech_line(&self) -> String {
        let mut line = self.tech_preview.join(", ");
        if self.tech_hidden > 0 {
            line.push_str(&format!(" +{} more", self.tech_hidden));
        }
        line
    }
}

/// Look up the full project record
pub fn show(catalog: &ProjectCatalog, id: &str) -> Result<Project> {
    catalog.require(id).cloned()
}

/// Health report for one project
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub project_id: String,
    pub title: String,
    pub health_score: u8,
    pub band: HealthBand,
    pub completion_percentage: u8,
    pub missing_modules: Vec<String>,
    pub bug_predictions: Vec<String>,
    pub recommendations: Vec<String>,
    /// High priority first
    pub roadmap: Vec<RoadmapItem>,
    pub team_needs: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

/// Build the health report from the project's analysis record
pub fn health_report(catalog: &ProjectCatalog, id: &str) -> Result<HealthReport> {
    let (project, analysis) = analyzed(catalog, id)?;

    Ok(HealthReport {
        project_id: project.id.clone(),
        title: project.title.clone(),
        health_score: analysis.health_score,
        band: analysis.band(),
        completion_percentage: analysis.completion_percentage,
        missing_modules: analysis.missing_modules.clone(),
        bug_predictions: analysis.bug_predictions.clone(),
        recommendations: analysis.recommendations.clone(),
        roadmap: analysis.prioritized_roadmap(),
        team_needs: analysis.pitch_deck.team_needs.clone(),
        generated_at: analysis.generated_at,
    })
}

fn analyzed<'a>(
    catalog: &'a ProjectCatalog,
    id: &str,
) -> Result<(&'a Project, &'a AiAnalysis)> {
    let project = catalog.require(id)?;
    let analysis = project
        .ai_analysis
        .as_ref()
        .ok_or_else(|| Error::AnalysisUnavailable(id.to_string()))?;
    Ok((project, analysis))
}

/// One slide of a pitch deck
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchSlide {
    pub id: &'static str,
    pub heading: &'static str,
    pub items: Vec<String>,
}

/// Pitch deck slides in presentation order
#[derive(Debug, Clone, Serialize)]
pub struct PitchDeckView {
    pub project_id: String,
    pub title: String,
    pub slides: Vec<PitchSlide>,
}

/// Build the six-slide pitch deck from the project's analysis record
///
/// Slides run problem, solution, market, tech stack, roadmap and team needs.
/// Empty slides are kept so the deck always has the same shape.
pub fn pitch_deck(catalog: &ProjectCatalog, id: &str) -> Result<PitchDeckView> {
    let (project, analysis) = analyzed(catalog, id)?;
    let deck = &analysis.pitch_deck;

    let single = |text: &str| {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![text.to_string()]
        }
    };

    let slides = vec![
        PitchSlide {
            id: "problem",
            heading: "The Problem",
            items: single(&deck.problem),
        },
        PitchSlide {
            id: "solution",
            heading: "Our Solution",
            items: single(&deck.solution),
        },
        PitchSlide {
            id: "market",
            heading: "Market Opportunity",
            items: single(&deck.market_size),
        },
        PitchSlide {
            id: "tech",
            heading: "Technology Stack",
            items: deck.tech_stack.clone(),
        },
        PitchSlide {
            id: "roadmap",
            heading: "Development Roadmap",
            items: deck.roadmap.clone(),
        },
        PitchSlide {
            id: "team",
            heading: "Team & Needs",
            items: deck.team_needs.clone(),
        },
    ];

    Ok(PitchDeckView {
        project_id: project.id.clone(),
        title: project.title.clone(),
        slides,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projects::{Difficulty, PitchDeck, Priority};

    fn catalog() -> ProjectCatalog {
        let mut analysis = AiAnalysis::new(58, 100);
        analysis.missing_modules = vec!["Test Suite".to_string()];
        analysis.pitch_deck = PitchDeck {
            problem: "Opaque food provenance".to_string(),
            solution: "Verifiable farm-to-store tracking".to_string(),
            market_size: String::new(),
            tech_stack: vec!["Solidity".to_string(), "Next.js".to_string()],
            roadmap: vec!["Audit".to_string()],
            team_needs: vec!["Smart Contract Auditor".to_string()],
        };
        analysis.roadmap = vec![
            RoadmapItem {
                title: "Docs".to_string(),
                description: String::new(),
                priority: Priority::Low,
                estimated_time: "1 week".to_string(),
                prerequisites: Vec::new(),
            },
            RoadmapItem {
                title: "Tests".to_string(),
                description: String::new(),
                priority: Priority::High,
                estimated_time: "2 weeks".to_string(),
                prerequisites: Vec::new(),
            },
        ];

        ProjectCatalog::new(vec![
            Project::new("Ledger", "", "Blockchain", Difficulty::Advanced)
                .with_id("1")
                .with_tech_stack(["Solidity", "Hardhat", "Next.js", "IPFS", "Go"])
                .with_analysis(analysis),
            Project::new("Engine", "", "Game Development", Difficulty::Beginner)
                .with_id("2")
                .with_tech_stack(["C++"]),
        ])
    }

    #[test]
    fn test_card_tech_preview() {
        let catalog = catalog();
        let card = ProjectCard::from_project(catalog.get("1").unwrap(), 3);
        assert_eq!(card.tech_preview, vec!["Solidity", "Hardhat", "Next.js"]);
        assert_eq!(card.tech_hidden, 2);
        assert_eq!(card.tech_line(), "Solidity, Hardhat, Next.js +2 more");

        let card = ProjectCard::from_project(catalog.get("2").unwrap(), 3);
        assert_eq!(card.tech_line(), "C++");
    }

    #[test]
    fn test_show_unknown_project() {
        let err = show(&catalog(), "404").unwrap_err();
        assert!(matches!(err, Error::ProjectNotFound(_)));
    }

    #[test]
    fn test_health_report() {
        let report = health_report(&catalog(), "1").unwrap();
        assert_eq!(report.health_score, 58);
        assert_eq!(report.band, HealthBand::NeedsAttention);
        assert_eq!(report.missing_modules, vec!["Test Suite"]);
        assert_eq!(report.roadmap[0].title, "Tests");
    }

    #[test]
    fn test_health_report_without_analysis() {
        let err = health_report(&catalog(), "2").unwrap_err();
        assert_eq!(err.code(), "E002");
        assert_eq!(err.suggestion(), Some("engiverse show 2".to_string()));
    }

    #[test]
    fn test_pitch_deck_slides() {
        let deck = pitch_deck(&catalog(), "1").unwrap();
        let ids: Vec<_> = deck.slides.iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec!["problem", "solution", "market", "tech", "roadmap", "team"]
        );
        assert_eq!(deck.slides[0].items, vec!["Opaque food provenance"]);
        // blank market size leaves the slide empty
        assert!(deck.slides[2].items.is_empty());
        assert_eq!(deck.slides[3].items, vec!["Solidity", "Next.js"]);
        assert_eq!(deck.slides[5].items, vec!["Smart Contract Auditor"]);
    }

    #[test]
    fn test_pitch_deck_without_analysis() {
        let err = pitch_deck(&catalog(), "2").unwrap_err();
        assert!(matches!(err, Error::AnalysisUnavailable(ref id) if id == "2"));
    }
}
