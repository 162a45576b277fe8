//! Selector option lists shown by front-ends

/// Domains offered by the upload form and the domain filter
pub const KNOWN_DOMAINS: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Machine Learning",
    "Data Science",
    "Game Development",
    "IoT",
    "Blockchain",
    "DevOps",
    "Cybersecurity",
    "AR/VR",
];

pub fn is_known_domain(domain: &str) -> bool {
    KNOWN_DOMAINS.contains(&domain)
}
