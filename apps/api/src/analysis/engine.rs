//! Analysis engine — one assignment in, one normalized analysis out.
//!
//! The engine is deliberately database-free: it takes the assignment row and
//! the pre-fetched standards, builds the prompt, makes the single model call,
//! and normalizes whatever comes back. Persistence stays in the handler.

use tracing::info;

use crate::llm_client::{ChatModel, LlmError, TokenUsage};
use crate::models::assignment::AssignmentRow;
use crate::models::curriculum::CurriculumStandardRow;

use super::normalizer::{normalize_model_output, NormalizedAnalysis};
use super::prompt_builder::{build_analysis_prompt, PromptInput};
use super::prompts::ANALYSIS_SYSTEM;

/// What one analysis run produced: the normalized result plus the billing
/// facts the caller records.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub normalized: NormalizedAnalysis,
    pub usage: TokenUsage,
    pub model: String,
}

/// Runs the full prompt → model → normalize pipeline for one assignment.
///
/// The only error is a failed model call (transport fault or non-2xx), which
/// aborts the whole operation. Malformed model OUTPUT is not an error: the
/// normalizer absorbs it and tags the result's source accordingly.
pub async fn run_analysis(
    model: &dyn ChatModel,
    assignment: &AssignmentRow,
    standards: &[CurriculumStandardRow],
) -> Result<AnalysisOutcome, LlmError> {
    let prompt = build_analysis_prompt(
        &PromptInput {
            title: &assignment.title,
            content: &assignment.content,
            subject: &assignment.subject,
            grade_level: &assignment.grade_level,
            assignment_type: &assignment.assignment_type,
            course_context: assignment.course_context.as_deref(),
            requirements: assignment.requirements.as_deref(),
            objectives: assignment.objectives.as_deref(),
        },
        standards,
    );

    info!(
        assignment_id = %assignment.id,
        subject = %assignment.subject,
        grade_level = %assignment.grade_level,
        standards = standards.len(),
        prompt_chars = prompt.len(),
        "running assignment analysis"
    );

    let completion = model.complete(ANALYSIS_SYSTEM, &prompt).await?;
    let normalized = normalize_model_output(&completion.text);

    info!(
        assignment_id = %assignment.id,
        source = normalized.source.as_str(),
        quality_score = normalized.result.quality_score,
        "analysis normalized"
    );

    Ok(AnalysisOutcome {
        normalized,
        usage: completion.usage,
        model: model.model_id().to_string(),
    })
}
