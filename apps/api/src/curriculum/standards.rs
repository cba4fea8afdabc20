//! Curriculum-standard lookups.
//!
//! Standards are reference rows seeded out of band; the API only ever reads
//! them. A miss is not an error: analysis proceeds without a standards block
//! and the browse endpoint returns an empty list.

use sqlx::PgPool;

use crate::models::curriculum::CurriculumStandardRow;

/// All standards for a subject and grade level, case-insensitively matched,
/// ordered for stable prompt and display output.
pub async fn fetch_standards(
    pool: &PgPool,
    subject: &str,
    grade_level: &str,
) -> Result<Vec<CurriculumStandardRow>, sqlx::Error> {
    sqlx::query_as::<_, CurriculumStandardRow>(
        r#"
        SELECT * FROM curriculum_standards
        WHERE LOWER(subject) = LOWER($1) AND LOWER(grade_level) = LOWER($2)
        ORDER BY strand, sub_strand
        "#,
    )
    .bind(subject)
    .bind(grade_level)
    .fetch_all(pool)
    .await
}
