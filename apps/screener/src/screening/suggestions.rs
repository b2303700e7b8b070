//! Keyword-gap suggestions for rejected résumés.
//!
//! Job tokens are the comma-separated phrases of the description, kept
//! verbatim (leading spaces included); résumé tokens are whitespace-separated
//! words. A phrase only counts as present when it equals a whole résumé word,
//! so multi-word phrases and every phrase after the first comma (which starts
//! with a space) are always reported missing. Callers rely on this exact
//! behavior; changing the tokenization changes every suggestion shown.

use std::collections::HashSet;

pub const MAX_SUGGESTIONS: usize = 5;

const PREFIX: &str = "Consider adding: ";

/// Up to `MAX_SUGGESTIONS` job phrases absent from the résumé, in the order
/// they appear in the job description. Duplicated phrases are listed once.
pub fn missing_terms<'a>(job_description: &'a str, resume_text: &str) -> Vec<&'a str> {
    let resume_words: HashSet<&str> = resume_text.split_whitespace().collect();
    let mut seen = HashSet::new();

    job_description
        .split(',')
        .filter(|phrase| seen.insert(*phrase))
        .filter(|phrase| !resume_words.contains(*phrase))
        .take(MAX_SUGGESTIONS)
        .collect()
}

/// Suggestion text shown for a rejected résumé.
pub fn suggest(job_description: &str, resume_text: &str) -> String {
    format!(
        "{PREFIX}{}",
        missing_terms(job_description, resume_text).join(", ")
    )
}
