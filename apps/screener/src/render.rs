//! HTML pages, rendered with askama from `templates/`.

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;
use crate::screening::pipeline::ScreeningResult;
use crate::screening::profiles::FilterLevel;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub roles: Vec<&'static str>,
    pub levels: [FilterLevel; 3],
}

#[derive(Template)]
#[template(path = "results.html")]
pub struct ResultsPage<'a> {
    pub job_domain: &'a str,
    /// Submitted filter label, capitalized.
    pub filter_level: String,
    pub results: &'a [ScreeningResult],
}

pub fn to_html<T: Template>(page: &T) -> Result<Html<String>, AppError> {
    Ok(Html(page.render()?))
}
