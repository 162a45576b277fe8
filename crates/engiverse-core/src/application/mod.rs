//! Application layer
//!
//! Input validation for operations that accept user-supplied data.

pub mod validators;
