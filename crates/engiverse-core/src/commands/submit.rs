//! Project submission
//!
//! Turns an upload-form submission into a draft catalog record. Drafts are
//! returned to the caller; storing them belongs to whatever backend the
//! front-end talks to.

use tracing::info;

use crate::Result;
use crate::application::validators::{ProjectSubmission, SubmissionValidator};
use crate::domain::projects::{Project, User};

fn clean_url(url: Option<&str>) -> Option<String> {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_string)
}

/// Validate a submission and build the draft project
///
/// The draft starts as an abandoned project with no stars, no completion
/// and no analysis.
pub fn prepare(submission: &ProjectSubmission, author: Option<User>) -> Result<Project> {
    let difficulty = SubmissionValidator::validate(submission)?;

    let mut project = Project::new(
        submission.title.trim(),
        submission.description.trim(),
        submission.domain.as_str(),
        difficulty,
    )
    .with_tech_stack(SubmissionValidator::normalize_tech_stack(
        &submission.tech_stack,
    ));
    project.repo_url = clean_url(submission.repo_url.as_deref());
    project.demo_url = clean_url(submission.demo_url.as_deref());
    project.video_url = clean_url(submission.video_url.as_deref());
    project.tags = project.tech_stack.iter().map(|t| t.to_lowercase()).collect();
    if let Some(author) = author {
        project = project.with_author(author);
    }

    info!(id = %project.id, title = %project.title, "Prepared project submission");
    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::projects::{Difficulty, ProjectStatus};
    use crate::error::Error;

    fn submission() -> ProjectSubmission {
        ProjectSubmission {
            title: "  Weather Station ".to_string(),
            description: "Solar powered weather station".to_string(),
            tech_stack: vec!["ESP32".to_string(), "LoRa".to_string(), "ESP32".to_string()],
            domain: "IoT".to_string(),
            difficulty: "intermediate".to_string(),
            repo_url: Some("https://github.com/user/weather".to_string()),
            demo_url: Some("".to_string()),
            video_url: None,
        }
    }

    #[test]
    fn test_prepare_draft() {
        let project = prepare(&submission(), Some(User::new("Dana"))).unwrap();

        assert_eq!(project.title, "Weather Station");
        assert_eq!(project.tech_stack, vec!["ESP32", "LoRa"]);
        assert_eq!(project.tags, vec!["esp32", "lora"]);
        assert_eq!(project.difficulty, Difficulty::Intermediate);
        assert_eq!(project.status, ProjectStatus::Abandoned);
        assert_eq!(project.stars, 0);
        assert_eq!(project.demo_url, None);
        assert!(project.ai_analysis.is_none());
        assert_eq!(
            project.original_author.map(|a| a.name),
            Some("Dana".to_string())
        );
    }

    #[test]
    fn test_prepare_rejects_unknown_domain() {
        let mut bad = submission();
        bad.domain = "Astrology".to_string();

        let err = prepare(&bad, None).unwrap_err();
        assert!(matches!(err, Error::Validation { ref field, .. } if field == "domain"));
    }

    #[test]
    fn test_prepared_ids_are_unique() {
        let a = prepare(&submission(), None).unwrap();
        let b = prepare(&submission(), None).unwrap();
        assert_ne!(a.id, b.id);
    }
}
