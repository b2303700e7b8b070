//! Axum route handlers for the upload form and the results page.

use axum::{
    extract::{Multipart, State},
    response::Html,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::render::{to_html, IndexPage, ResultsPage};
use crate::screening::pipeline::{screen, ScreeningResult};
use crate::screening::profiles::{find_profile, role_names, FilterLevel, FilterSelection};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// A file part of the `resumes` field.
#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// The screening form, gathered from a multipart body.
#[derive(Debug, Default)]
pub struct ScreeningForm {
    pub resumes: Vec<UploadedFile>,
    pub domain: Option<String>,
    pub filter: Option<String>,
}

impl ScreeningForm {
    /// Reads every field; the browser sends the files before the selects, so
    /// nothing is processed until the whole body is in.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = ScreeningForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "resumes" => {
                    let filename = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    // an empty file input still submits one nameless part
                    if filename.is_empty() {
                        continue;
                    }
                    form.resumes.push(UploadedFile { filename, bytes });
                }
                "domain" => form.domain = Some(field.text().await?),
                "filter" => form.filter = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("'{field}' is required")))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    to_html(&IndexPage {
        roles: role_names().collect(),
        levels: FilterLevel::ALL,
    })
}

/// POST /result
///
/// Saves, extracts and screens each uploaded résumé in submission order.
/// The first unreadable file fails the whole request.
pub async fn handle_result(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Html<String>, AppError> {
    let form = ScreeningForm::from_multipart(multipart).await?;
    let domain = required(form.domain, "domain")?;
    let filter = FilterSelection::resolve(&required(form.filter, "filter")?);

    let profile = find_profile(&domain)
        .ok_or_else(|| AppError::Validation(format!("Unknown job role '{domain}'")))?;
    let job_description = profile.description.to_lowercase();

    let mut results: Vec<ScreeningResult> = Vec::with_capacity(form.resumes.len());
    for upload in &form.resumes {
        let (name, path) = state.store.save(&upload.filename, &upload.bytes).await?;
        let text = state
            .extractor
            .extract(&path)
            .await
            .map_err(|source| AppError::Extraction {
                filename: name.clone(),
                source,
            })?;

        let result = screen(&name, &job_description, &text, filter.threshold);
        info!(
            file = %result.name,
            score = result.score,
            status = %result.status,
            "Screened resume"
        );
        results.push(result);
    }

    to_html(&ResultsPage {
        job_domain: profile.name,
        filter_level: filter.display_label(),
        results: &results,
    })
}
