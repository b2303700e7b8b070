//! Per-résumé screening: score → classify → suggest.

use crate::screening::classifier::{classify, Status};
use crate::screening::similarity::similarity_ratio;
use crate::screening::suggestions::suggest;

/// One row of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningResult {
    pub name: String,
    /// Similarity ratio in [0, 1], unrounded.
    pub score: f64,
    pub status: Status,
    /// Present only for rejected résumés.
    pub suggestions: Option<String>,
}

impl ScreeningResult {
    /// Score rounded to two decimals.
    pub fn score_label(&self) -> String {
        format!("{:.2}", self.score)
    }

    pub fn suggestion_label(&self) -> &str {
        self.suggestions.as_deref().unwrap_or("N/A")
    }
}

/// Screens one résumé. Both texts are expected lowercase.
pub fn screen(name: &str, job_description: &str, resume_text: &str, threshold: f64) -> ScreeningResult {
    let score = similarity_ratio(job_description, resume_text);
    let status = classify(score, threshold);
    let suggestions = match status {
        Status::Rejected => Some(suggest(job_description, resume_text)),
        Status::Shortlisted => None,
    };

    ScreeningResult {
        name: name.to_string(),
        score,
        status,
        suggestions,
    }
}
