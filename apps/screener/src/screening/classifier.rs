use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Shortlisted,
    Rejected,
}

impl Status {
    /// CSS class used by the results table.
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Shortlisted => "shortlisted",
            Status::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Shortlisted => f.write_str("Shortlisted"),
            Status::Rejected => f.write_str("Rejected"),
        }
    }
}

/// Shortlists when `score >= threshold`; a score exactly on the cutoff passes.
pub fn classify(score: f64, threshold: f64) -> Status {
    if score >= threshold {
        Status::Shortlisted
    } else {
        Status::Rejected
    }
}
