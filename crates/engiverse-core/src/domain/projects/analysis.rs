//! AI analysis record
//!
//! Health scores, roadmaps and pitch decks arrive with the catalog as static
//! data. Nothing here is computed; the only behavior is classification for
//! display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a roadmap item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Sort rank, lower comes first
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One suggested next step for reviving a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub estimated_time: String,
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchDeck {
    pub problem: String,
    pub solution: String,
    pub market_size: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<String>,
    #[serde(default)]
    pub team_needs: Vec<String>,
}

/// Analysis data attached to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// 0..=100
    pub health_score: u8,
    pub completion_percentage: u8,
    #[serde(default)]
    pub missing_modules: Vec<String>,
    #[serde(default)]
    pub bug_predictions: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub roadmap: Vec<RoadmapItem>,
    #[serde(default)]
    pub pitch_deck: PitchDeck,
    pub generated_at: DateTime<Utc>,
}

impl AiAnalysis {
    pub fn new(health_score: u8, completion_percentage: u8) -> Self {
        Self {
            health_score: health_score.min(100),
            completion_percentage: completion_percentage.min(100),
            missing_modules: Vec::new(),
            bug_predictions: Vec::new(),
            recommendations: Vec::new(),
            roadmap: Vec::new(),
            pitch_deck: PitchDeck::default(),
            generated_at: Utc::now(),
        }
    }

    pub fn band(&self) -> HealthBand {
        HealthBand::from_score(self.health_score)
    }

    /// Roadmap ordered high priority first, keeping the listed order within a priority
    pub fn prioritized_roadmap(&self) -> Vec<RoadmapItem> {
        let mut items = self.roadmap.clone();
        items.sort_by_key(|item| item.priority.rank());
        items
    }
}

/// Display classification of a health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// 80 and above
    Healthy,
    /// 60 to 79
    Fair,
    /// Below 60
    NeedsAttention,
}

impl HealthBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthBand::Healthy
        } else if score >= 60 {
            HealthBand::Fair
        } else {
            HealthBand::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthBand::Healthy => "healthy",
            HealthBand::Fair => "fair",
            HealthBand::NeedsAttention => "needs attention",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, priority: Priority) -> RoadmapItem {
        RoadmapItem {
            title: title.to_string(),
            description: String::new(),
            priority,
            estimated_time: "1 week".to_string(),
            prerequisites: Vec::new(),
        }
    }

    #[test]
    fn test_health_band_thresholds() {
        assert_eq!(HealthBand::from_score(100), HealthBand::Healthy);
        assert_eq!(HealthBand::from_score(80), HealthBand::Healthy);
        assert_eq!(HealthBand::from_score(79), HealthBand::Fair);
        assert_eq!(HealthBand::from_score(60), HealthBand::Fair);
        assert_eq!(HealthBand::from_score(59), HealthBand::NeedsAttention);
        assert_eq!(HealthBand::from_score(0), HealthBand::NeedsAttention);
    }

    #[test]
    fn test_prioritized_roadmap_is_stable() {
        let mut analysis = AiAnalysis::new(72, 65);
        analysis.roadmap = vec![
            item("docs", Priority::Low),
            item("auth", Priority::High),
            item("tests", Priority::Medium),
            item("security", Priority::High),
        ];

        let titles: Vec<_> = analysis
            .prioritized_roadmap()
            .into_iter()
            .map(|i| i.title)
            .collect();
        assert_eq!(titles, vec!["auth", "security", "tests", "docs"]);
        // source order untouched
        assert_eq!(analysis.roadmap[0].title, "docs");
    }

    #[test]
    fn test_new_caps_scores() {
        let analysis = AiAnalysis::new(250, 101);
        assert_eq!(analysis.health_score, 100);
        assert_eq!(analysis.completion_percentage, 100);
    }
}
