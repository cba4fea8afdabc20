//! Data access for assignments, analysis results, and usage logs.
//!
//! Plain CRUD by primary key. Assignment status moves `submitted` →
//! `analyzed` once a result row exists; a failed analysis leaves the status
//! untouched. Analysis results are append-only: every run inserts a new row
//! and readers take the latest.

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::assignment::{AnalysisResultRow, AssignmentRow};

/// Defaults applied when the client omits optional metadata.
pub const DEFAULT_TITLE: &str = "Untitled assignment";
pub const DEFAULT_TYPE: &str = "general";

/// Fields for a new assignment row. Borrowed from the request body; the
/// database fills id, status, and timestamps.
pub struct NewAssignment<'a> {
    pub student_id: Option<Uuid>,
    pub title: &'a str,
    pub content: &'a str,
    pub subject: &'a str,
    pub grade_level: &'a str,
    pub assignment_type: &'a str,
    pub course_context: Option<&'a str>,
    pub requirements: Option<&'a str>,
    pub objectives: Option<&'a str>,
    pub due_date: Option<NaiveDate>,
}

pub async fn create_assignment(
    pool: &PgPool,
    new: &NewAssignment<'_>,
) -> Result<AssignmentRow, sqlx::Error> {
    sqlx::query_as::<_, AssignmentRow>(
        r#"
        INSERT INTO assignments
            (student_id, title, content, subject, grade_level, assignment_type,
             course_context, requirements, objectives, due_date, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'submitted')
        RETURNING *
        "#,
    )
    .bind(new.student_id)
    .bind(new.title)
    .bind(new.content)
    .bind(new.subject)
    .bind(new.grade_level)
    .bind(new.assignment_type)
    .bind(new.course_context)
    .bind(new.requirements)
    .bind(new.objectives)
    .bind(new.due_date)
    .fetch_one(pool)
    .await
}

pub async fn get_assignment(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<AssignmentRow>, sqlx::Error> {
    sqlx::query_as::<_, AssignmentRow>("SELECT * FROM assignments WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Newest first. Capped; the dashboard never pages past the recent window.
pub async fn list_assignments(
    pool: &PgPool,
    student_id: Option<Uuid>,
) -> Result<Vec<AssignmentRow>, sqlx::Error> {
    match student_id {
        Some(student) => {
            sqlx::query_as::<_, AssignmentRow>(
                "SELECT * FROM assignments WHERE student_id = $1 ORDER BY created_at DESC LIMIT 100",
            )
            .bind(student)
            .fetch_all(pool)
            .await
        }
        None => {
            sqlx::query_as::<_, AssignmentRow>(
                "SELECT * FROM assignments ORDER BY created_at DESC LIMIT 100",
            )
            .fetch_all(pool)
            .await
        }
    }
}

pub async fn insert_analysis(
    pool: &PgPool,
    assignment_id: Uuid,
    analysis: &serde_json::Value,
    quality_score: f64,
    source: &str,
    model: &str,
) -> Result<AnalysisResultRow, sqlx::Error> {
    sqlx::query_as::<_, AnalysisResultRow>(
        r#"
        INSERT INTO analysis_results (assignment_id, analysis, quality_score, source, model)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(assignment_id)
    .bind(analysis)
    .bind(quality_score)
    .bind(source)
    .bind(model)
    .fetch_one(pool)
    .await
}

/// The polling target: the most recent result for an assignment, if any.
pub async fn latest_analysis(
    pool: &PgPool,
    assignment_id: Uuid,
) -> Result<Option<AnalysisResultRow>, sqlx::Error> {
    sqlx::query_as::<_, AnalysisResultRow>(
        r#"
        SELECT * FROM analysis_results
        WHERE assignment_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(assignment_id)
    .fetch_optional(pool)
    .await
}

pub async fn mark_analyzed(pool: &PgPool, assignment_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE assignments SET status = 'analyzed', updated_at = NOW() WHERE id = $1")
        .bind(assignment_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn log_usage(
    pool: &PgPool,
    assignment_id: Option<Uuid>,
    model: &str,
    prompt_tokens: i32,
    completion_tokens: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO usage_logs (assignment_id, model, prompt_tokens, completion_tokens)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(assignment_id)
    .bind(model)
    .bind(prompt_tokens)
    .bind(completion_tokens)
    .execute(pool)
    .await?;
    Ok(())
}
