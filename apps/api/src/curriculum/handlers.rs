//! Axum route handlers for curriculum browsing.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::curriculum::standards::fetch_standards;
use crate::errors::AppError;
use crate::models::curriculum::CurriculumStandardRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StandardsQuery {
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
}

/// GET /api/v1/curriculum/standards?subject=&grade_level=
///
/// Both filters are required; an unknown subject/grade pair returns an
/// empty list, not a 404.
pub async fn handle_list_standards(
    State(state): State<AppState>,
    Query(query): Query<StandardsQuery>,
) -> Result<Json<Vec<CurriculumStandardRow>>, AppError> {
    let subject = query.subject.as_deref().map(str::trim).unwrap_or_default();
    let grade_level = query
        .grade_level
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if subject.is_empty() || grade_level.is_empty() {
        return Err(AppError::Validation(
            "subject and grade_level query parameters are required".to_string(),
        ));
    }

    let standards = fetch_standards(&state.db, subject, grade_level).await?;
    Ok(Json(standards))
}
