//! Typed analysis schema — the fixed shape every model response is coerced
//! into before persistence. The model-facing wire shape is looser; see
//! `normalizer` for the coercion rules.

use serde::{Deserialize, Serialize};

/// Ordinal competency scale. Variant order is the ordering: a `Proficient`
/// learner outranks a `Developing` one.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CompetencyLevel {
    Novice,
    #[default]
    Developing,
    Proficient,
    Advanced,
}

impl CompetencyLevel {
    /// Case-insensitive parse of whatever string the model produced.
    /// Anything unrecognized coerces to `Developing` rather than failing —
    /// the level field must always end up one of the four ordinal values.
    pub fn coerce(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "novice" => Self::Novice,
            "developing" => Self::Developing,
            "proficient" => Self::Proficient,
            "advanced" => Self::Advanced,
            _ => Self::Developing,
        }
    }
}

/// The six-category Socratic-question taxonomy embedded in the rubric prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SocraticCategory {
    /// Ask the student to restate or sharpen an idea.
    #[default]
    Clarification,
    /// Probe what the work takes for granted.
    Assumptions,
    /// Probe reasons, data, and support for claims.
    Evidence,
    /// Invite alternative viewpoints.
    Perspectives,
    /// Push on consequences of the argument.
    Implications,
    /// Question the question or the approach itself.
    Meta,
}

impl SocraticCategory {
    /// Maps whatever category string the model produced onto the taxonomy.
    /// Unknown values coerce to `Clarification`.
    pub fn coerce(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        match lowered.as_str() {
            "clarification" => Self::Clarification,
            "assumptions" => Self::Assumptions,
            "evidence" => Self::Evidence,
            "perspectives" => Self::Perspectives,
            "implications" => Self::Implications,
            "meta" => Self::Meta,
            // Common near-misses the model likes to emit
            _ if lowered.contains("assum") => Self::Assumptions,
            _ if lowered.contains("evidence") || lowered.contains("reason") => Self::Evidence,
            _ if lowered.contains("perspective") || lowered.contains("viewpoint") => {
                Self::Perspectives
            }
            _ if lowered.contains("implication") || lowered.contains("consequence") => {
                Self::Implications
            }
            _ => Self::Clarification,
        }
    }
}

/// Assessment of one competency dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetencyAssessment {
    pub name: String,
    pub description: String,
    pub level: CompetencyLevel,
    pub evidence: Vec<String>,
    pub suggestions: Vec<String>,
    /// Relative importance in [0, 1]. Weights are NOT required to sum to 1
    /// across a result and this is never enforced.
    pub weight: f64,
}

/// The competency section of a result: one overall level plus the per-
/// dimension breakdown. The default is the all-empty analysis at the
/// `Developing` level, used when the model omits the section entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompetencyAnalysis {
    pub overall_level: CompetencyLevel,
    pub summary: String,
    pub competencies: Vec<CompetencyAssessment>,
}

/// A guiding question intended to prompt self-reflection, never to hand the
/// student an answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocraticQuestion {
    pub question: String,
    pub category: SocraticCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSection {
    pub title: String,
    pub content: String,
}

/// One ordered step of the suggested learning path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningStep {
    pub title: String,
    pub description: String,
}

/// The fixed analysis shape persisted and returned to clients.
///
/// Shape guarantee: all four sections are always present (possibly empty),
/// whatever the model returned. `quality_score` is computed by the additive
/// presence heuristic in `quality` and always lands in [0.5, 1.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub competency_analysis: CompetencyAnalysis,
    pub socratic_questions: Vec<SocraticQuestion>,
    pub feedback_sections: Vec<FeedbackSection>,
    pub learning_path: Vec<LearningStep>,
    pub quality_score: f64,
}

/// Provenance of a normalized result.
///
/// `Fallback` marks fabricated filler produced when the model output could
/// not be parsed at all; clients must label such results as degraded instead
/// of presenting them as real feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    /// Strict parse of the model output succeeded.
    Model,
    /// Real model output, recovered by brace extraction from surrounding prose.
    Extracted,
    /// Fabricated placeholder content — the model output was unusable.
    Fallback,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Extracted => "extracted",
            Self::Fallback => "fallback",
        }
    }
}
