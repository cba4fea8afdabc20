//! Axum route handlers for the Nigerian education reference tables.
//!
//! All endpoints are stateless reads over compiled-in data; filters are
//! optional query parameters validated against the filter enums.

use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::reference::data::{
    filter_exams, filter_scholarships, filter_subjects, filter_universities, ExamInfo, ExamLevel,
    Ownership, ScholarshipInfo, SchoolLevel, StudyLevel, SubjectCategory, SubjectInfo,
    UniversityInfo,
};

#[derive(Debug, Deserialize)]
pub struct SubjectsQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExamsQuery {
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UniversitiesQuery {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub ownership: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ScholarshipsQuery {
    #[serde(default)]
    pub level: Option<String>,
}

/// GET /api/v1/reference/subjects?category=&level=
pub async fn handle_list_subjects(
    Query(query): Query<SubjectsQuery>,
) -> Result<Json<Vec<SubjectInfo>>, AppError> {
    let category = parse_filter(query.category.as_deref(), SubjectCategory::parse, "category")?;
    let level = parse_filter(query.level.as_deref(), SchoolLevel::parse, "level")?;
    Ok(Json(filter_subjects(category, level)))
}

/// GET /api/v1/reference/exams?level=
pub async fn handle_list_exams(
    Query(query): Query<ExamsQuery>,
) -> Result<Json<Vec<ExamInfo>>, AppError> {
    let level = parse_filter(query.level.as_deref(), ExamLevel::parse, "level")?;
    Ok(Json(filter_exams(level)))
}

/// GET /api/v1/reference/universities?state=&ownership=
pub async fn handle_list_universities(
    Query(query): Query<UniversitiesQuery>,
) -> Result<Json<Vec<UniversityInfo>>, AppError> {
    let ownership = parse_filter(query.ownership.as_deref(), Ownership::parse, "ownership")?;
    Ok(Json(filter_universities(query.state.as_deref(), ownership)))
}

/// GET /api/v1/reference/scholarships?level=
pub async fn handle_list_scholarships(
    Query(query): Query<ScholarshipsQuery>,
) -> Result<Json<Vec<ScholarshipInfo>>, AppError> {
    let level = parse_filter(query.level.as_deref(), StudyLevel::parse, "level")?;
    Ok(Json(filter_scholarships(level)))
}

/// Parses an optional filter value. An absent or blank parameter means no
/// filter; an unrecognized value is a validation error rather than a
/// silently empty result.
fn parse_filter<T>(
    raw: Option<&str>,
    parse: fn(&str) -> Option<T>,
    name: &str,
) -> Result<Option<T>, AppError> {
    match raw {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => parse(value)
            .map(Some)
            .ok_or_else(|| AppError::Validation(format!("Unknown {name}: {value}"))),
    }
}
