//! Quality score for a normalized analysis.
//!
//! This measures shape completeness only: whether each section came back
//! populated, never how good its content is. Callers wanting a judgement of
//! content quality will not find one here.

use super::models::AnalysisResult;

const BASE_SCORE: f64 = 0.5;
const SECTION_CREDIT: f64 = 0.125;

/// Additive presence heuristic: 0.5 floor plus 0.125 per populated section
/// (competency list, questions, feedback, learning path). The result is in
/// [0.5, 1.0] by construction.
pub fn quality_score(result: &AnalysisResult) -> f64 {
    let populated = [
        !result.competency_analysis.competencies.is_empty(),
        !result.socratic_questions.is_empty(),
        !result.feedback_sections.is_empty(),
        !result.learning_path.is_empty(),
    ]
    .into_iter()
    .filter(|&present| present)
    .count();

    BASE_SCORE + SECTION_CREDIT * populated as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{
        CompetencyAnalysis, CompetencyAssessment, CompetencyLevel, FeedbackSection, LearningStep,
        SocraticCategory, SocraticQuestion,
    };

    fn empty_result() -> AnalysisResult {
        AnalysisResult {
            competency_analysis: CompetencyAnalysis::default(),
            socratic_questions: Vec::new(),
            feedback_sections: Vec::new(),
            learning_path: Vec::new(),
            quality_score: 0.0,
        }
    }

    fn sample_competency() -> CompetencyAssessment {
        CompetencyAssessment {
            name: "Learning to Learn".to_string(),
            description: String::new(),
            level: CompetencyLevel::Developing,
            evidence: Vec::new(),
            suggestions: Vec::new(),
            weight: 0.14,
        }
    }

    #[test]
    fn test_empty_result_scores_the_floor() {
        assert!((quality_score(&empty_result()) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_each_populated_section_adds_credit() {
        let mut result = empty_result();
        result.competency_analysis.competencies.push(sample_competency());
        assert!((quality_score(&result) - 0.625).abs() < f64::EPSILON);

        result.socratic_questions.push(SocraticQuestion {
            question: "What was the hardest step?".to_string(),
            category: SocraticCategory::Meta,
        });
        assert!((quality_score(&result) - 0.75).abs() < f64::EPSILON);

        result.feedback_sections.push(FeedbackSection {
            title: "Strengths".to_string(),
            content: "Shows the working.".to_string(),
        });
        result.learning_path.push(LearningStep {
            title: "Practice".to_string(),
            description: "Five more problems.".to_string(),
        });
        assert!((quality_score(&result) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_ignores_content_quality() {
        // A single one-word question counts exactly as much as a rich one.
        let mut sparse = empty_result();
        sparse.socratic_questions.push(SocraticQuestion {
            question: "Why?".to_string(),
            category: SocraticCategory::Assumptions,
        });

        let mut rich = empty_result();
        for _ in 0..5 {
            rich.socratic_questions.push(SocraticQuestion {
                question: "How does your evidence connect to your conclusion?".to_string(),
                category: SocraticCategory::Evidence,
            });
        }

        assert!((quality_score(&sparse) - quality_score(&rich)).abs() < f64::EPSILON);
    }
}
