//! Commands module - all operations as library functions
//!
//! These commands are used by the CLI and any other front-end.

pub mod discover;
pub mod project;
pub mod submit;
