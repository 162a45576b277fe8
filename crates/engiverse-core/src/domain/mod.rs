//! Domain layer
//!
//! Contains the project model and the discovery rules applied to it.

pub mod discovery;
pub mod projects;
pub mod specification;
