use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One submitted assignment. Immutable once sent for analysis — a re-run
/// never rewrites these fields, only `status` and `updated_at` move.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssignmentRow {
    pub id: Uuid,
    pub student_id: Option<Uuid>,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub grade_level: String,
    pub assignment_type: String,
    pub course_context: Option<String>,
    pub requirements: Option<String>,
    pub objectives: Option<String>,
    pub due_date: Option<NaiveDate>,
    /// 'submitted' until an analysis result is persisted, then 'analyzed'.
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One persisted analysis run. Append-only: each run inserts a new row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisResultRow {
    pub id: Uuid,
    pub assignment_id: Uuid,
    /// The normalized `AnalysisResult` as stored jsonb.
    pub analysis: Value,
    pub quality_score: f64,
    /// Provenance tag: 'model' | 'extracted' | 'fallback'.
    pub source: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}
