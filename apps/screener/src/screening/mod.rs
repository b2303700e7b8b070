// Résumé screening: fixed job/threshold tables, similarity scoring,
// classification and gap suggestions, plus the HTML handlers that drive them.

pub mod classifier;
pub mod handlers;
pub mod pipeline;
pub mod profiles;
pub mod similarity;
pub mod suggestions;
