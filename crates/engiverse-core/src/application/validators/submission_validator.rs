//! Project submission validation
//!
//! Validates the fields of an upload-form submission.

use serde::{Deserialize, Serialize};

use crate::catalog::{KNOWN_DOMAINS, is_known_domain};
use crate::domain::projects::Difficulty;
use crate::error::{Error, Result};

const MAX_TITLE_LEN: usize = 120;
const MAX_DESCRIPTION_LEN: usize = 2000;

/// Raw upload-form data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectSubmission {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub domain: String,
    /// Canonical difficulty name; empty means beginner
    pub difficulty: String,
    pub repo_url: Option<String>,
    pub demo_url: Option<String>,
    pub video_url: Option<String>,
}

/// Validator for project submissions
pub struct SubmissionValidator;

impl SubmissionValidator {
    /// Validate a project title
    ///
    /// Rules:
    /// - Must not be empty after trimming
    /// - Must be 120 characters or less
    pub fn validate_title(title: &str) -> Result<()> {
        let title = title.trim();

        if title.is_empty() {
            return Err(Error::validation("title", "Project title cannot be empty"));
        }

        if title.chars().count() > MAX_TITLE_LEN {
            return Err(Error::validation(
                "title",
                format!("Project title must be {} characters or less", MAX_TITLE_LEN),
            ));
        }

        Ok(())
    }

    /// Validate a project description
    pub fn validate_description(description: &str) -> Result<()> {
        let description = description.trim();

        if description.is_empty() {
            return Err(Error::validation(
                "description",
                "Description cannot be empty",
            ));
        }

        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(Error::validation(
                "description",
                format!(
                    "Description must be {} characters or less",
                    MAX_DESCRIPTION_LEN
                ),
            ));
        }

        Ok(())
    }

    /// Validate the domain against the known list
    pub fn validate_domain(domain: &str) -> Result<()> {
        if domain.is_empty() {
            return Err(Error::validation("domain", "Select a domain"));
        }

        if !is_known_domain(domain) {
            return Err(Error::validation(
                "domain",
                format!(
                    "Unknown domain '{}'. Allowed: {}",
                    domain,
                    KNOWN_DOMAINS.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// Parse the difficulty, defaulting to beginner when empty
    pub fn parse_difficulty(difficulty: &str) -> Result<Difficulty> {
        if difficulty.is_empty() {
            return Ok(Difficulty::default());
        }

        Difficulty::parse(difficulty).ok_or_else(|| {
            Error::validation(
                "difficulty",
                format!(
                    "Unknown difficulty '{}'. Allowed: beginner, intermediate, advanced",
                    difficulty
                ),
            )
        })
    }

    /// Validate an optional link
    ///
    /// Rules:
    /// - Absent or blank is fine
    /// - Otherwise must be an http(s) URL
    pub fn validate_url(field: &str, url: Option<&str>) -> Result<()> {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return Ok(());
        };

        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::validation(
                field,
                "Link must start with http:// or https://",
            ));
        }

        if url.chars().any(char::is_whitespace) {
            return Err(Error::validation(field, "Link cannot contain spaces"));
        }

        Ok(())
    }

    /// Trim entries, drop blanks and duplicates (first occurrence wins)
    pub fn normalize_tech_stack(tech_stack: &[String]) -> Vec<String> {
        let mut normalized: Vec<String> = Vec::with_capacity(tech_stack.len());
        for tech in tech_stack {
            let tech = tech.trim();
            if !tech.is_empty() && !normalized.iter().any(|t| t == tech) {
                normalized.push(tech.to_string());
            }
        }
        normalized
    }

    /// Validate all submission fields at once
    pub fn validate(submission: &ProjectSubmission) -> Result<Difficulty> {
        Self::validate_title(&submission.title)?;
        Self::validate_description(&submission.description)?;
        Self::validate_domain(&submission.domain)?;
        let difficulty = Self::parse_difficulty(&submission.difficulty)?;
        Self::validate_url("repo_url", submission.repo_url.as_deref())?;
        Self::validate_url("demo_url", submission.demo_url.as_deref())?;
        Self::validate_url("video_url", submission.video_url.as_deref())?;
        Ok(difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ProjectSubmission {
        ProjectSubmission {
            title: "Weather Station".to_string(),
            description: "Solar powered weather station with LoRa uplink".to_string(),
            tech_stack: vec!["ESP32".to_string()],
            domain: "IoT".to_string(),
            difficulty: String::new(),
            repo_url: Some("https://github.com/user/weather".to_string()),
            demo_url: None,
            video_url: None,
        }
    }

    #[test]
    fn test_validate_title() {
        assert!(SubmissionValidator::validate_title("Weather Station").is_ok());
        assert!(SubmissionValidator::validate_title("").is_err());
        assert!(SubmissionValidator::validate_title("   ").is_err());
        assert!(SubmissionValidator::validate_title(&"a".repeat(121)).is_err());
        assert!(SubmissionValidator::validate_title(&"a".repeat(120)).is_ok());
    }

    #[test]
    fn test_validate_description() {
        assert!(SubmissionValidator::validate_description("Does things").is_ok());
        assert!(SubmissionValidator::validate_description("").is_err());
        assert!(SubmissionValidator::validate_description(&"d".repeat(2001)).is_err());

        // surrounding whitespace is not counted
        let padded = format!("  {}\n\n", "d".repeat(2000));
        assert!(SubmissionValidator::validate_description(&padded).is_ok());
    }

    #[test]
    fn test_validate_domain() {
        assert!(SubmissionValidator::validate_domain("IoT").is_ok());
        assert!(SubmissionValidator::validate_domain("AR/VR").is_ok());
        assert!(SubmissionValidator::validate_domain("").is_err());

        let err = SubmissionValidator::validate_domain("iot").unwrap_err();
        assert_eq!(err.code(), "E800");
        assert_eq!(err.suggestion(), Some("engiverse options".to_string()));
    }

    #[test]
    fn test_parse_difficulty() {
        assert_eq!(
            SubmissionValidator::parse_difficulty("").unwrap(),
            Difficulty::Beginner
        );
        assert_eq!(
            SubmissionValidator::parse_difficulty("advanced").unwrap(),
            Difficulty::Advanced
        );
        assert!(SubmissionValidator::parse_difficulty("expert").is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(SubmissionValidator::validate_url("repo_url", None).is_ok());
        assert!(SubmissionValidator::validate_url("repo_url", Some("  ")).is_ok());
        assert!(SubmissionValidator::validate_url("repo_url", Some("https://x.io")).is_ok());
        assert!(SubmissionValidator::validate_url("repo_url", Some("ftp://x.io")).is_err());
        assert!(SubmissionValidator::validate_url("repo_url", Some("https://x .io")).is_err());
    }

    #[test]
    fn test_normalize_tech_stack() {
        let input = vec![
            " React ".to_string(),
            "".to_string(),
            "Node.js".to_string(),
            "React".to_string(),
        ];
        assert_eq!(
            SubmissionValidator::normalize_tech_stack(&input),
            vec!["React", "Node.js"]
        );
    }

    #[test]
    fn test_validate_submission() {
        assert_eq!(
            SubmissionValidator::validate(&valid_submission()).unwrap(),
            Difficulty::Beginner
        );

        let mut bad = valid_submission();
        bad.demo_url = Some("demo.example.com".to_string());
        let err = SubmissionValidator::validate(&bad).unwrap_err();
        assert!(err.to_string().contains("demo_url"));
    }
}
