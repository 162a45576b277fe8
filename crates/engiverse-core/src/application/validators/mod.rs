//! Validators for user input

mod submission_validator;

pub use submission_validator::{ProjectSubmission, SubmissionValidator};
