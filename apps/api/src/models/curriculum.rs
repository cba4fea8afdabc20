use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One curriculum-standard reference row: what a learner at this subject and
/// grade is expected to achieve. Read-only from the API's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CurriculumStandardRow {
    pub id: Uuid,
    pub subject: String,
    pub grade_level: String,
    pub strand: String,
    pub sub_strand: String,
    pub outcome: String,
}
