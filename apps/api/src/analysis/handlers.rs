//! Axum route handlers for the analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::engine::run_analysis;
use crate::analysis::models::{AnalysisResult, AnalysisSource};
use crate::assignments::store::{self, NewAssignment, DEFAULT_TITLE, DEFAULT_TYPE};
use crate::curriculum::standards::fetch_standards;
use crate::errors::AppError;
use crate::models::assignment::AssignmentRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of the analyze call. The dashboard client sends camelCase keys.
///
/// Two modes: pass `assignmentId` to analyze an already-created assignment,
/// or send the assignment fields inline and a row is created first. Inline
/// mode requires `subject` and `gradeLevel`; everything else is defaulted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub assignment_id: Option<Uuid>,
    #[serde(default)]
    pub student_id: Option<Uuid>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
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

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub result: AnalysisRecord,
    pub analysis: AnalysisResult,
}

/// Pointers to the persisted rows plus the provenance facts a client needs
/// to label a degraded (fallback) result.
#[derive(Debug, Serialize)]
pub struct AnalysisRecord {
    pub assignment_id: Uuid,
    pub analysis_id: Uuid,
    pub source: AnalysisSource,
    pub model: String,
    pub quality_score: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// The whole pipeline in one call: resolve the assignment, fetch matching
/// curriculum standards, build the prompt, invoke the model once, normalize
/// the reply, persist the result and usage, flip the assignment to
/// `analyzed`. A model failure aborts before any result row is written and
/// leaves the assignment status untouched.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let assignment = resolve_assignment(&state, &request).await?;

    let standards =
        fetch_standards(&state.db, &assignment.subject, &assignment.grade_level).await?;

    let outcome = run_analysis(state.llm.as_ref(), &assignment, &standards).await?;

    let analysis_json = serde_json::to_value(&outcome.normalized.result)
        .map_err(|e| AppError::Internal(e.into()))?;
    let saved = store::insert_analysis(
        &state.db,
        assignment.id,
        &analysis_json,
        outcome.normalized.result.quality_score,
        outcome.normalized.source.as_str(),
        &outcome.model,
    )
    .await?;

    store::log_usage(
        &state.db,
        Some(assignment.id),
        &outcome.model,
        outcome.usage.prompt_tokens as i32,
        outcome.usage.completion_tokens as i32,
    )
    .await?;

    store::mark_analyzed(&state.db, assignment.id).await?;

    info!(
        assignment_id = %assignment.id,
        analysis_id = %saved.id,
        source = outcome.normalized.source.as_str(),
        "analysis persisted"
    );

    Ok(Json(AnalyzeResponse {
        success: true,
        result: AnalysisRecord {
            assignment_id: assignment.id,
            analysis_id: saved.id,
            source: outcome.normalized.source,
            model: outcome.model,
            quality_score: outcome.normalized.result.quality_score,
        },
        analysis: outcome.normalized.result,
    }))
}

/// Loads the referenced assignment, or creates one from the inline fields.
async fn resolve_assignment(
    state: &AppState,
    request: &AnalyzeRequest,
) -> Result<AssignmentRow, AppError> {
    if let Some(assignment_id) = request.assignment_id {
        return store::get_assignment(&state.db, assignment_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Assignment {assignment_id} not found")));
    }

    let subject = request.subject.as_deref().map(str::trim).unwrap_or_default();
    let grade_level = request
        .grade_level
        .as_deref()
        .map(str::trim)
        .unwrap_or_default();
    if subject.is_empty() || grade_level.is_empty() {
        return Err(AppError::Validation(
            "subject and gradeLevel are required".to_string(),
        ));
    }

    // Content may legitimately be empty; an empty submission is still
    // analyzed rather than rejected.
    let new = NewAssignment {
        student_id: request.student_id,
        title: request.title.as_deref().unwrap_or(DEFAULT_TITLE),
        content: request.content.as_deref().unwrap_or(""),
        subject,
        grade_level,
        assignment_type: request.assignment_type.as_deref().unwrap_or(DEFAULT_TYPE),
        course_context: request.course_context.as_deref(),
        requirements: request.requirements.as_deref(),
        objectives: request.objectives.as_deref(),
        due_date: request.due_date,
    };

    Ok(store::create_assignment(&state.db, &new).await?)
}
