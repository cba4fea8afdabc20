//! Assembles the analysis prompt from assignment metadata and the curriculum
//! standards matched for its subject and grade level.

use crate::models::curriculum::CurriculumStandardRow;

use super::prompts::{ANALYSIS_PROMPT_TEMPLATE, JSON_ONLY_RULES, NO_STANDARDS_NOTE};

/// Borrowed view of the fields that go into the prompt. Callers own the
/// strings (request body or a fetched row); the builder never clones them
/// until the final template fill.
pub struct PromptInput<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub subject: &'a str,
    pub grade_level: &'a str,
    pub assignment_type: &'a str,
    pub course_context: Option<&'a str>,
    pub requirements: Option<&'a str>,
    pub objectives: Option<&'a str>,
}

/// Fills `ANALYSIS_PROMPT_TEMPLATE`. The submission text is substituted in
/// unmodified: no sanitization, escaping, or length capping happens here.
///
/// CRITICAL: `{content}` is filled LAST. A submission may contain arbitrary
/// text, including strings that look like template placeholders, and must
/// never be able to fill one.
pub fn build_analysis_prompt(
    input: &PromptInput<'_>,
    standards: &[CurriculumStandardRow],
) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{title}", input.title)
        .replace("{subject}", input.subject)
        .replace("{grade_level}", input.grade_level)
        .replace("{assignment_type}", input.assignment_type)
        .replace("{optional_context}", &render_optional_context(input))
        .replace("{standards}", &render_standards(standards))
        .replace("{json_rules}", JSON_ONLY_RULES)
        .replace("{content}", input.content)
}

fn render_optional_context(input: &PromptInput<'_>) -> String {
    let mut lines = String::new();
    if let Some(context) = input.course_context {
        lines.push_str(&format!("Course context: {context}\n"));
    }
    if let Some(requirements) = input.requirements {
        lines.push_str(&format!("Requirements: {requirements}\n"));
    }
    if let Some(objectives) = input.objectives {
        lines.push_str(&format!("Learning objectives: {objectives}\n"));
    }
    lines
}

fn render_standards(standards: &[CurriculumStandardRow]) -> String {
    if standards.is_empty() {
        return NO_STANDARDS_NOTE.to_string();
    }
    standards
        .iter()
        .map(|s| format!("- {} / {}: {}", s.strand, s.sub_strand, s.outcome))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_input() -> PromptInput<'static> {
        PromptInput {
            title: "Fractions homework",
            content: "I think 1/2 + 1/3 = 2/5 because you add tops and bottoms.",
            subject: "Mathematics",
            grade_level: "Grade 6",
            assignment_type: "homework",
            course_context: None,
            requirements: None,
            objectives: None,
        }
    }

    fn sample_standard() -> CurriculumStandardRow {
        CurriculumStandardRow {
            id: Uuid::new_v4(),
            subject: "Mathematics".to_string(),
            grade_level: "Grade 6".to_string(),
            strand: "Numbers".to_string(),
            sub_strand: "Fractions".to_string(),
            outcome: "Add and subtract fractions with unlike denominators".to_string(),
        }
    }

    #[test]
    fn test_prompt_contains_subject_and_grade_level_verbatim() {
        let prompt = build_analysis_prompt(&sample_input(), &[]);
        assert!(prompt.contains("Mathematics"));
        assert!(prompt.contains("Grade 6"));
    }

    #[test]
    fn test_prompt_fills_every_placeholder() {
        let prompt = build_analysis_prompt(&sample_input(), &[sample_standard()]);
        for placeholder in [
            "{title}",
            "{subject}",
            "{grade_level}",
            "{assignment_type}",
            "{optional_context}",
            "{standards}",
            "{json_rules}",
            "{content}",
        ] {
            assert!(!prompt.contains(placeholder), "unfilled: {placeholder}");
        }
    }

    #[test]
    fn test_prompt_renders_matched_standards_as_bullets() {
        let prompt = build_analysis_prompt(&sample_input(), &[sample_standard()]);
        assert!(prompt
            .contains("- Numbers / Fractions: Add and subtract fractions with unlike denominators"));
        assert!(!prompt.contains(NO_STANDARDS_NOTE));
    }

    #[test]
    fn test_prompt_notes_when_no_standards_matched() {
        let prompt = build_analysis_prompt(&sample_input(), &[]);
        assert!(prompt.contains(NO_STANDARDS_NOTE));
    }

    #[test]
    fn test_optional_fields_render_only_when_present() {
        let mut input = sample_input();
        let bare = build_analysis_prompt(&input, &[]);
        assert!(!bare.contains("Course context:"));
        assert!(!bare.contains("Learning objectives:"));

        input.course_context = Some("Unit 4 of the national syllabus");
        input.objectives = Some("Master fraction addition");
        let full = build_analysis_prompt(&input, &[]);
        assert!(full.contains("Course context: Unit 4 of the national syllabus"));
        assert!(full.contains("Learning objectives: Master fraction addition"));
    }

    #[test]
    fn test_submission_text_cannot_fill_placeholders() {
        let mut input = sample_input();
        input.content = "My essay cites {standards} and {json_rules} literally.";
        let prompt = build_analysis_prompt(&input, &[sample_standard()]);
        // Content is substituted after every other placeholder, so these
        // tokens survive as plain text from the submission.
        assert!(prompt.contains("My essay cites {standards} and {json_rules} literally."));
    }

    #[test]
    fn test_submission_is_never_truncated() {
        let mut input = sample_input();
        let long_content = "word ".repeat(20_000);
        input.content = &long_content;
        let prompt = build_analysis_prompt(&input, &[]);
        assert!(prompt.contains(&long_content));
    }
}
