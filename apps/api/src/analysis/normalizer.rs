//! Response normalizer — coerces raw model text into the fixed
//! `AnalysisResult` shape and tags every result with its provenance.
//!
//! Three stages, tried in order:
//!   1. strict parse of the (fence-stripped) text as a JSON object
//!   2. brace extraction: first `{` to last `}`, then parse again
//!   3. fallback: fabricate a placeholder analysis, salvaging question and
//!      feedback lines from the raw text by keyword search
//!
//! Whatever stage wins, the result always carries all four sections. The
//! source tag is the contract with clients: a `fallback` result is filler
//! and must be presented as degraded, never as real feedback.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::models::{
    AnalysisResult, AnalysisSource, CompetencyAnalysis, CompetencyAssessment, CompetencyLevel,
    FeedbackSection, LearningStep, SocraticCategory, SocraticQuestion,
};
use super::quality::quality_score;

/// Weight assigned to a competency the model forgot to weight. One even
/// share across the seven rubric dimensions, rounded down.
pub const DEFAULT_WEIGHT: f64 = 0.14;

/// Caps applied to lines salvaged from unparseable model text.
const MAX_SALVAGED_QUESTIONS: usize = 3;
const MAX_SALVAGED_LINES: usize = 3;

/// A normalized analysis plus where it came from.
#[derive(Debug, Clone)]
pub struct NormalizedAnalysis {
    pub result: AnalysisResult,
    pub source: AnalysisSource,
}

/// Entry point. Never fails: stage 3 accepts arbitrary text, including the
/// empty string.
pub fn normalize_model_output(raw: &str) -> NormalizedAnalysis {
    let stripped = strip_json_fences(raw);

    if let Some(result) = parse_document(stripped) {
        return finish(result, AnalysisSource::Model);
    }

    if let Some(block) = extract_json_object(stripped) {
        if let Some(result) = parse_document(block) {
            warn!("model reply wrapped JSON in prose; recovered by brace extraction");
            return finish(result, AnalysisSource::Extracted);
        }
    }

    warn!(
        reply_len = raw.len(),
        "model reply was not parseable as JSON; fabricating fallback analysis"
    );
    finish(build_fallback(raw), AnalysisSource::Fallback)
}

fn finish(mut result: AnalysisResult, source: AnalysisSource) -> NormalizedAnalysis {
    result.quality_score = quality_score(&result);
    NormalizedAnalysis { result, source }
}

// ─────────────────────────── stage 1 + 2: parsing ───────────────────────────

/// Removes a ```json ... ``` wrapper if the model added one. Fenced-but-valid
/// JSON still counts as a strict parse: the content is real model output.
fn strip_json_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open
        .strip_suffix("```")
        .unwrap_or(without_open)
        .trim()
}

/// Parses `text` as a JSON object and coerces it field by field. Returns
/// `None` when the text is not valid JSON or not an object (a bare string or
/// array is valid JSON but not an analysis).
fn parse_document(text: &str) -> Option<AnalysisResult> {
    let doc: Value = serde_json::from_str(text).ok()?;
    doc.is_object().then(|| coerce_document(&doc))
}

/// Widest-span brace slice: first `{` through last `}`. Both are ASCII so
/// the byte slice is always on a char boundary.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

// ─────────────────────────── field coercion ───────────────────────────

/// Per-field coercion of a parsed document. A malformed field never fails
/// the document: it degrades to its default and the rest is kept.
fn coerce_document(doc: &Value) -> AnalysisResult {
    AnalysisResult {
        competency_analysis: doc
            .get("competency_analysis")
            .map(coerce_competency_analysis)
            .unwrap_or_default(),
        socratic_questions: coerce_items(doc, "socratic_questions", coerce_question),
        feedback_sections: coerce_items(doc, "feedback_sections", coerce_section),
        learning_path: coerce_items(doc, "learning_path", coerce_step),
        quality_score: 0.0,
    }
}

fn coerce_items<T>(doc: &Value, key: &str, coerce: fn(&Value) -> Option<T>) -> Vec<T> {
    doc.get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(coerce).collect())
        .unwrap_or_default()
}

fn coerce_competency_analysis(value: &Value) -> CompetencyAnalysis {
    CompetencyAnalysis {
        overall_level: value
            .get("overall_level")
            .and_then(Value::as_str)
            .map(CompetencyLevel::coerce)
            .unwrap_or_default(),
        summary: value
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        competencies: value
            .get("competencies")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(coerce_competency).collect())
            .unwrap_or_default(),
    }
}

/// A competency entry as the model tends to ship it: only the name is
/// required, everything else is defaulted or coerced.
#[derive(Debug, Deserialize)]
struct RawCompetency {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    level: String,
    #[serde(default)]
    evidence: Vec<String>,
    #[serde(default)]
    suggestions: Vec<String>,
    #[serde(default)]
    weight: Option<f64>,
}

fn coerce_competency(item: &Value) -> Option<CompetencyAssessment> {
    let raw = RawCompetency::deserialize(item).ok()?;
    Some(CompetencyAssessment {
        name: raw.name,
        description: raw.description,
        level: CompetencyLevel::coerce(&raw.level),
        evidence: raw.evidence,
        suggestions: raw.suggestions,
        weight: raw.weight.unwrap_or(DEFAULT_WEIGHT).clamp(0.0, 1.0),
    })
}

/// Models emit questions either as bare strings or as structured objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawQuestion {
    Text(String),
    Structured {
        question: String,
        #[serde(default)]
        category: String,
    },
}

fn coerce_question(item: &Value) -> Option<SocraticQuestion> {
    let (question, category) = match RawQuestion::deserialize(item).ok()? {
        RawQuestion::Text(question) => (question, SocraticCategory::default()),
        RawQuestion::Structured { question, category } => {
            (question, SocraticCategory::coerce(&category))
        }
    };
    if question.trim().is_empty() {
        return None;
    }
    Some(SocraticQuestion { question, category })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSection {
    Text(String),
    Structured {
        #[serde(default)]
        title: String,
        #[serde(default)]
        content: String,
    },
}

fn coerce_section(item: &Value) -> Option<FeedbackSection> {
    let (title, content) = match RawSection::deserialize(item).ok()? {
        RawSection::Text(content) => (String::new(), content),
        RawSection::Structured { title, content } => (title, content),
    };
    if content.trim().is_empty() {
        return None;
    }
    let title = if title.trim().is_empty() {
        "Feedback".to_string()
    } else {
        title
    };
    Some(FeedbackSection { title, content })
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawStep {
    Text(String),
    Structured {
        #[serde(default)]
        title: String,
        #[serde(default)]
        description: String,
    },
}

fn coerce_step(item: &Value) -> Option<LearningStep> {
    let (title, description) = match RawStep::deserialize(item).ok()? {
        RawStep::Text(title) => (title, String::new()),
        RawStep::Structured { title, description } => (title, description),
    };
    if title.trim().is_empty() && description.trim().is_empty() {
        return None;
    }
    let title = if title.trim().is_empty() {
        "Next step".to_string()
    } else {
        title
    };
    Some(LearningStep { title, description })
}

// ─────────────────────────── stage 3: fallback ───────────────────────────

const STRENGTH_KEYWORDS: &[&str] = &["strength", "well", "good", "clear", "strong"];
const IMPROVEMENT_KEYWORDS: &[&str] = &["improve", "consider", "try", "suggest", "add", "revise"];

/// Fabricates a placeholder analysis when the model text is unusable.
/// Question and feedback lines are salvaged from the raw text where keyword
/// search finds any; everything else is fixed filler. The overall level is
/// always `developing`.
fn build_fallback(raw: &str) -> AnalysisResult {
    let strengths = salvage_lines(raw, STRENGTH_KEYWORDS);
    let improvements = salvage_lines(raw, IMPROVEMENT_KEYWORDS);

    let evidence = if strengths.is_empty() {
        vec!["The submission addresses the assigned topic.".to_string()]
    } else {
        strengths.clone()
    };
    let suggestions = if improvements.is_empty() {
        vec![
            "Revisit the assignment requirements and expand each main point.".to_string(),
            "Support each claim with a concrete example or source.".to_string(),
        ]
    } else {
        improvements.clone()
    };

    AnalysisResult {
        competency_analysis: CompetencyAnalysis {
            overall_level: CompetencyLevel::Developing,
            summary: "General assessment of the submission as a whole.".to_string(),
            competencies: vec![
                CompetencyAssessment {
                    name: "Critical Thinking and Problem Solving".to_string(),
                    description: "Reasoning through the task and weighing possible approaches"
                        .to_string(),
                    level: CompetencyLevel::Developing,
                    evidence: evidence.clone(),
                    suggestions: suggestions.clone(),
                    weight: DEFAULT_WEIGHT,
                },
                CompetencyAssessment {
                    name: "Communication and Collaboration".to_string(),
                    description: "Expressing ideas clearly and engaging other viewpoints"
                        .to_string(),
                    level: CompetencyLevel::Developing,
                    evidence,
                    suggestions: suggestions.clone(),
                    weight: DEFAULT_WEIGHT,
                },
                CompetencyAssessment {
                    name: "Learning to Learn".to_string(),
                    description: "Reflecting on feedback and directing one's own improvement"
                        .to_string(),
                    level: CompetencyLevel::Developing,
                    evidence: vec!["The submission was completed and handed in.".to_string()],
                    suggestions,
                    weight: DEFAULT_WEIGHT,
                },
            ],
        },
        socratic_questions: salvage_questions(raw),
        feedback_sections: vec![
            FeedbackSection {
                title: "Strengths".to_string(),
                content: join_or(
                    &strengths,
                    "The work engages with the assigned topic and was submitted complete.",
                ),
            },
            FeedbackSection {
                title: "Areas to improve".to_string(),
                content: join_or(
                    &improvements,
                    "Develop each main point further and back it with evidence.",
                ),
            },
        ],
        learning_path: vec![
            LearningStep {
                title: "Review the feedback".to_string(),
                description: "Read each feedback section and note anything unclear.".to_string(),
            },
            LearningStep {
                title: "Revise your work".to_string(),
                description: "Apply the suggested improvements in a new draft.".to_string(),
            },
            LearningStep {
                title: "Reflect on the process".to_string(),
                description: "Write two sentences on what you would do differently next time."
                    .to_string(),
            },
        ],
        quality_score: 0.0,
    }
}

/// Lines ending in `?` become Socratic questions, classified by question
/// wording. Canned questions cover the case where nothing was salvageable.
fn salvage_questions(raw: &str) -> Vec<SocraticQuestion> {
    let salvaged: Vec<SocraticQuestion> = raw
        .lines()
        .map(str::trim)
        .filter(|line| line.len() > 1 && line.ends_with('?'))
        .take(MAX_SALVAGED_QUESTIONS)
        .map(|line| SocraticQuestion {
            question: line.to_string(),
            category: classify_question(line),
        })
        .collect();

    if !salvaged.is_empty() {
        return salvaged;
    }

    vec![
        SocraticQuestion {
            question: "What is the main idea you want your reader to take away?".to_string(),
            category: SocraticCategory::Clarification,
        },
        SocraticQuestion {
            question: "What evidence supports your strongest claim?".to_string(),
            category: SocraticCategory::Evidence,
        },
        SocraticQuestion {
            question: "How would you approach this task differently next time?".to_string(),
            category: SocraticCategory::Meta,
        },
    ]
}

fn classify_question(question: &str) -> SocraticCategory {
    let lowered = question.to_lowercase();
    if lowered.contains("why") {
        SocraticCategory::Assumptions
    } else if lowered.contains("evidence")
        || lowered.contains("support")
        || lowered.contains("how do you know")
    {
        SocraticCategory::Evidence
    } else if lowered.contains("what if")
        || lowered.contains("another way")
        || lowered.contains("different")
    {
        SocraticCategory::Perspectives
    } else if lowered.contains("happen") || lowered.contains("consequence") {
        SocraticCategory::Implications
    } else {
        SocraticCategory::Clarification
    }
}

fn salvage_lines(raw: &str, keywords: &[&str]) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with('?'))
        .filter(|line| {
            let lowered = line.to_lowercase();
            keywords.iter().any(|keyword| lowered.contains(keyword))
        })
        .take(MAX_SALVAGED_LINES)
        .map(str::to_string)
        .collect()
}

fn join_or(lines: &[String], placeholder: &str) -> String {
    if lines.is_empty() {
        placeholder.to_string()
    } else {
        lines.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "competency_analysis": {
            "overall_level": "proficient",
            "summary": "Strong grasp of fractions with minor slips.",
            "competencies": [
                {
                    "name": "Critical Thinking and Problem Solving",
                    "description": "Reasoning about the method",
                    "level": "proficient",
                    "evidence": ["Spots the common-denominator step"],
                    "suggestions": ["Check the final simplification"],
                    "weight": 0.2
                }
            ]
        },
        "socratic_questions": [
            { "question": "Why must the denominators match first?", "category": "assumptions" }
        ],
        "feedback_sections": [
            { "title": "Strengths", "content": "Method is laid out step by step." }
        ],
        "learning_path": [
            { "title": "Practice mixed sums", "description": "Five problems with unlike denominators." }
        ]
    }"#;

    #[test]
    fn test_well_formed_json_is_tagged_model() {
        let normalized = normalize_model_output(WELL_FORMED);
        assert_eq!(normalized.source, AnalysisSource::Model);
        assert_eq!(
            normalized.result.competency_analysis.overall_level,
            CompetencyLevel::Proficient
        );
        assert_eq!(normalized.result.socratic_questions.len(), 1);
        assert_eq!(
            normalized.result.socratic_questions[0].category,
            SocraticCategory::Assumptions
        );
        assert!((normalized.result.quality_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fenced_json_still_counts_as_model_output() {
        let fenced = format!("```json\n{WELL_FORMED}\n```");
        let normalized = normalize_model_output(&fenced);
        assert_eq!(normalized.source, AnalysisSource::Model);
        assert_eq!(normalized.result.feedback_sections.len(), 1);
    }

    #[test]
    fn test_prose_wrapped_json_is_tagged_extracted() {
        let wrapped = format!("Here is the analysis you asked for:\n{WELL_FORMED}\nHope it helps!");
        let normalized = normalize_model_output(&wrapped);
        assert_eq!(normalized.source, AnalysisSource::Extracted);
        assert_eq!(normalized.result.learning_path.len(), 1);
    }

    #[test]
    fn test_unparseable_text_is_tagged_fallback() {
        let normalized = normalize_model_output("Sorry, I cannot produce that analysis.");
        assert_eq!(normalized.source, AnalysisSource::Fallback);
        assert_eq!(
            normalized.result.competency_analysis.overall_level,
            CompetencyLevel::Developing
        );
        assert!(!normalized.result.competency_analysis.competencies.is_empty());
        assert!(!normalized.result.socratic_questions.is_empty());
        assert!(!normalized.result.feedback_sections.is_empty());
        assert!(!normalized.result.learning_path.is_empty());
    }

    #[test]
    fn test_empty_input_falls_back_with_developing_level() {
        let normalized = normalize_model_output("");
        assert_eq!(normalized.source, AnalysisSource::Fallback);
        assert_eq!(
            normalized.result.competency_analysis.overall_level,
            CompetencyLevel::Developing
        );
    }

    #[test]
    fn test_question_lines_are_salvaged_and_capped() {
        let raw = "I could not format this properly.\n\
            Why did you pick this method?\n\
            What evidence supports your answer?\n\
            What if the denominators were equal?\n\
            What would happen with negative numbers?\n\
            How else could you check it?";
        let normalized = normalize_model_output(raw);
        assert_eq!(normalized.source, AnalysisSource::Fallback);

        let questions = &normalized.result.socratic_questions;
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].category, SocraticCategory::Assumptions);
        assert_eq!(questions[1].category, SocraticCategory::Evidence);
        assert_eq!(questions[2].category, SocraticCategory::Perspectives);
    }

    #[test]
    fn test_keyword_lines_feed_feedback_sections() {
        let raw = "The opening paragraph is clear and confident.\n\
            Consider adding a source for the second claim.";
        let normalized = normalize_model_output(raw);
        assert_eq!(normalized.source, AnalysisSource::Fallback);

        let sections = &normalized.result.feedback_sections;
        assert_eq!(sections[0].title, "Strengths");
        assert!(sections[0].content.contains("clear and confident"));
        assert_eq!(sections[1].title, "Areas to improve");
        assert!(sections[1].content.contains("Consider adding a source"));
    }

    #[test]
    fn test_missing_fields_default_instead_of_failing() {
        let normalized = normalize_model_output(r#"{"socratic_questions": ["What comes next?"]}"#);
        assert_eq!(normalized.source, AnalysisSource::Model);
        assert_eq!(normalized.result.socratic_questions.len(), 1);
        assert_eq!(
            normalized.result.socratic_questions[0].category,
            SocraticCategory::Clarification
        );
        assert!(normalized.result.competency_analysis.competencies.is_empty());
        assert!(normalized.result.feedback_sections.is_empty());
        assert!((normalized.result.quality_score - 0.625).abs() < f64::EPSILON);
    }

    #[test]
    fn test_malformed_section_degrades_without_failing_document() {
        let normalized = normalize_model_output(
            r#"{"competency_analysis": 17, "learning_path": ["Practice more"]}"#,
        );
        assert_eq!(normalized.source, AnalysisSource::Model);
        assert_eq!(
            normalized.result.competency_analysis.overall_level,
            CompetencyLevel::Developing
        );
        assert_eq!(normalized.result.learning_path[0].title, "Practice more");
    }

    #[test]
    fn test_unknown_level_and_weights_are_coerced() {
        let raw = r#"{
            "competency_analysis": {
                "overall_level": "EXPERT",
                "competencies": [
                    { "name": "Citizenship", "level": "superb" },
                    { "name": "Digital Literacy", "weight": 3.5 },
                    { "name": "Self-Efficacy", "weight": -0.2 }
                ]
            }
        }"#;
        let normalized = normalize_model_output(raw);
        let analysis = &normalized.result.competency_analysis;
        assert_eq!(analysis.overall_level, CompetencyLevel::Developing);
        assert_eq!(analysis.competencies[0].level, CompetencyLevel::Developing);
        assert!((analysis.competencies[0].weight - DEFAULT_WEIGHT).abs() < f64::EPSILON);
        assert!((analysis.competencies[1].weight - 1.0).abs() < f64::EPSILON);
        assert!((analysis.competencies[2].weight - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_string_and_object_items_mix_in_one_array() {
        let raw = r#"{
            "socratic_questions": [
                "What is your main argument?",
                { "question": "How do you know the source is reliable?", "category": "evidence" }
            ],
            "feedback_sections": ["Tighten the conclusion."],
            "learning_path": [{ "description": "Reread chapter two." }]
        }"#;
        let normalized = normalize_model_output(raw);
        let result = &normalized.result;
        assert_eq!(result.socratic_questions.len(), 2);
        assert_eq!(result.socratic_questions[1].category, SocraticCategory::Evidence);
        assert_eq!(result.feedback_sections[0].title, "Feedback");
        assert_eq!(result.learning_path[0].title, "Next step");
    }

    #[test]
    fn test_shape_guarantee_holds_for_arbitrary_inputs() {
        for raw in ["null", "[]", "42", r#""just a string""#, "{}", "```\n```"] {
            let normalized = normalize_model_output(raw);
            let score = normalized.result.quality_score;
            assert!((0.5..=1.0).contains(&score), "score {score} out of range for {raw:?}");
        }
    }

    #[test]
    fn test_empty_object_is_model_with_floor_score() {
        let normalized = normalize_model_output("{}");
        assert_eq!(normalized.source, AnalysisSource::Model);
        assert!((normalized.result.quality_score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_extract_json_object_spans_first_to_last_brace() {
        assert_eq!(extract_json_object("before {\"a\": 1} after"), Some("{\"a\": 1}"));
        assert_eq!(extract_json_object("no braces here"), None);
        assert_eq!(extract_json_object("} reversed {"), None);
    }

    #[test]
    fn test_strip_json_fences_variants() {
        assert_eq!(strip_json_fences("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_json_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_json_fences("{\"a\":1}"), "{\"a\":1}");
    }
}
