//! Axum route handlers for assignment CRUD and the analysis polling target.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::assignments::store::{self, NewAssignment, DEFAULT_TITLE, DEFAULT_TYPE};
use crate::errors::AppError;
use crate::models::assignment::{AnalysisResultRow, AssignmentRow};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[serde(default)]
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub subject: String,
    pub grade_level: String,
    #[serde(default)]
    pub assignment_type: Option<String>,
    #[serde(default)]
    pub course_context: Option<String>,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub objectives: Option<String>,
    #[serde(default)]
    pub due_date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct ListAssignmentsQuery {
    #[serde(default)]
    pub student_id: Option<Uuid>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/assignments
///
/// Creates an assignment with status `submitted`. Analysis is a separate
/// call; the client typically creates first, then posts to /analyze with
/// the returned id.
pub async fn handle_create_assignment(
    State(state): State<AppState>,
    Json(request): Json<CreateAssignmentRequest>,
) -> Result<Json<AssignmentRow>, AppError> {
    if request.subject.trim().is_empty() || request.grade_level.trim().is_empty() {
        return Err(AppError::Validation(
            "subject and gradeLevel are required".to_string(),
        ));
    }

    let new = NewAssignment {
        student_id: request.student_id,
        title: request.title.as_deref().unwrap_or(DEFAULT_TITLE),
        content: request.content.as_deref().unwrap_or(""),
        subject: request.subject.trim(),
        grade_level: request.grade_level.trim(),
        assignment_type: request.assignment_type.as_deref().unwrap_or(DEFAULT_TYPE),
        course_context: request.course_context.as_deref(),
        requirements: request.requirements.as_deref(),
        objectives: request.objectives.as_deref(),
        due_date: request.due_date,
    };

    let row = store::create_assignment(&state.db, &new).await?;
    Ok(Json(row))
}

/// GET /api/v1/assignments/:id
pub async fn handle_get_assignment(
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
) -> Result<Json<AssignmentRow>, AppError> {
    let row = store::get_assignment(&state.db, assignment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assignment {assignment_id} not found")))?;
    Ok(Json(row))
}

/// GET /api/v1/assignments?student_id=
pub async fn handle_list_assignments(
    State(state): State<AppState>,
    Query(query): Query<ListAssignmentsQuery>,
) -> Result<Json<Vec<AssignmentRow>>, AppError> {
    let rows = store::list_assignments(&state.db, query.student_id).await?;
    Ok(Json(rows))
}

/// GET /api/v1/assignments/:id/analysis
///
/// The polling target after an analyze call: 404 until a result exists,
/// then the latest persisted result. The `source` column tells the client
/// whether it is real model output or fallback filler.
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Path(assignment_id): Path<Uuid>,
) -> Result<Json<AnalysisResultRow>, AppError> {
    store::get_assignment(&state.db, assignment_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Assignment {assignment_id} not found")))?;

    let result = store::latest_analysis(&state.db, assignment_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No analysis yet for assignment {assignment_id}"))
        })?;
    Ok(Json(result))
}
