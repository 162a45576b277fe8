//! Project discovery
//!
//! Turns the full catalog plus the user's current criteria into the ordered
//! list of projects to display. Filtering is built from specifications,
//! sorting is a stable descending sort on one key.

pub mod criteria;
pub mod service;
pub mod specification;

pub use criteria::{FilterCriteria, SortKey};
pub use service::{apply, sort_projects};
pub use specification::ProjectSpecBuilder;
