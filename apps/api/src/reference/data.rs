//! Nigerian education reference tables, compiled into the binary.
//!
//! Pure lookup data for the browsing endpoints: no persistence, no mutation.
//! Rows are `'static` and copied out on query.

use serde::Serialize;

// ────────────────────────────────────────────────────────────────────────────
// Filter enums
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCategory {
    General,
    Sciences,
    Humanities,
    Commercial,
    Languages,
    Vocational,
}

impl SubjectCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "general" => Some(Self::General),
            "science" | "sciences" => Some(Self::Sciences),
            "humanities" | "arts" => Some(Self::Humanities),
            "commercial" | "business" => Some(Self::Commercial),
            "language" | "languages" => Some(Self::Languages),
            "vocational" | "trade" => Some(Self::Vocational),
            _ => None,
        }
    }
}

/// Where a subject is offered. `Both` rows match junior and senior queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolLevel {
    Junior,
    Senior,
    Both,
}

impl SchoolLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "junior" | "jss" => Some(Self::Junior),
            "senior" | "sss" => Some(Self::Senior),
            "both" => Some(Self::Both),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExamLevel {
    Junior,
    Senior,
    Tertiary,
}

impl ExamLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "junior" | "jss" => Some(Self::Junior),
            "senior" | "sss" => Some(Self::Senior),
            "tertiary" => Some(Self::Tertiary),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    Federal,
    State,
    Private,
}

impl Ownership {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "federal" => Some(Self::Federal),
            "state" => Some(Self::State),
            "private" => Some(Self::Private),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyLevel {
    Secondary,
    Undergraduate,
    Postgraduate,
}

impl StudyLevel {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "secondary" => Some(Self::Secondary),
            "undergraduate" => Some(Self::Undergraduate),
            "postgraduate" => Some(Self::Postgraduate),
            _ => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Row types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SubjectInfo {
    pub name: &'static str,
    pub category: SubjectCategory,
    pub level: SchoolLevel,
    /// Compulsory for every student at the levels where it is offered.
    pub core: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExamInfo {
    pub name: &'static str,
    pub body: &'static str,
    pub level: ExamLevel,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UniversityInfo {
    pub name: &'static str,
    pub state: &'static str,
    pub ownership: Ownership,
    pub founded: u16,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScholarshipInfo {
    pub name: &'static str,
    pub sponsor: &'static str,
    pub level: StudyLevel,
    pub description: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

use self::ExamLevel as EL;
use self::Ownership as O;
use self::SchoolLevel as L;
use self::StudyLevel as SL;
use self::SubjectCategory as C;

pub const SUBJECTS: &[SubjectInfo] = &[
    SubjectInfo { name: "English Language", category: C::Languages, level: L::Both, core: true },
    SubjectInfo { name: "Mathematics", category: C::General, level: L::Both, core: true },
    SubjectInfo { name: "Civic Education", category: C::General, level: L::Both, core: true },
    SubjectInfo { name: "Basic Science", category: C::Sciences, level: L::Junior, core: true },
    SubjectInfo { name: "Basic Technology", category: C::Sciences, level: L::Junior, core: true },
    SubjectInfo { name: "Social Studies", category: C::Humanities, level: L::Junior, core: true },
    SubjectInfo { name: "Business Studies", category: C::Commercial, level: L::Junior, core: false },
    SubjectInfo { name: "Cultural and Creative Arts", category: C::Humanities, level: L::Junior, core: false },
    SubjectInfo { name: "Physical and Health Education", category: C::General, level: L::Junior, core: false },
    SubjectInfo { name: "Security Education", category: C::General, level: L::Junior, core: false },
    SubjectInfo { name: "History", category: C::Humanities, level: L::Junior, core: false },
    SubjectInfo { name: "Agricultural Science", category: C::Vocational, level: L::Both, core: false },
    SubjectInfo { name: "Computer Studies", category: C::Sciences, level: L::Both, core: false },
    SubjectInfo { name: "Christian Religious Studies", category: C::Humanities, level: L::Both, core: false },
    SubjectInfo { name: "Islamic Studies", category: C::Humanities, level: L::Both, core: false },
    SubjectInfo { name: "French", category: C::Languages, level: L::Both, core: false },
    SubjectInfo { name: "Yoruba", category: C::Languages, level: L::Both, core: false },
    SubjectInfo { name: "Igbo", category: C::Languages, level: L::Both, core: false },
    SubjectInfo { name: "Hausa", category: C::Languages, level: L::Both, core: false },
    SubjectInfo { name: "Arabic", category: C::Languages, level: L::Both, core: false },
    SubjectInfo { name: "Physics", category: C::Sciences, level: L::Senior, core: false },
    SubjectInfo { name: "Chemistry", category: C::Sciences, level: L::Senior, core: false },
    SubjectInfo { name: "Biology", category: C::Sciences, level: L::Senior, core: false },
    SubjectInfo { name: "Further Mathematics", category: C::Sciences, level: L::Senior, core: false },
    SubjectInfo { name: "Literature in English", category: C::Humanities, level: L::Senior, core: false },
    SubjectInfo { name: "Government", category: C::Humanities, level: L::Senior, core: false },
    SubjectInfo { name: "Geography", category: C::Humanities, level: L::Senior, core: false },
    SubjectInfo { name: "Economics", category: C::Commercial, level: L::Senior, core: false },
    SubjectInfo { name: "Financial Accounting", category: C::Commercial, level: L::Senior, core: false },
    SubjectInfo { name: "Commerce", category: C::Commercial, level: L::Senior, core: false },
    SubjectInfo { name: "Technical Drawing", category: C::Vocational, level: L::Senior, core: false },
    SubjectInfo { name: "Food and Nutrition", category: C::Vocational, level: L::Senior, core: false },
    SubjectInfo { name: "Home Management", category: C::Vocational, level: L::Senior, core: false },
    SubjectInfo { name: "Data Processing", category: C::Vocational, level: L::Senior, core: false },
];

pub const EXAMS: &[ExamInfo] = &[
    ExamInfo {
        name: "WASSCE",
        body: "West African Examinations Council (WAEC)",
        level: EL::Senior,
        description: "Terminal examination for senior secondary school; its certificate is the baseline requirement for university admission.",
    },
    ExamInfo {
        name: "NECO SSCE",
        body: "National Examinations Council (NECO)",
        level: EL::Senior,
        description: "National alternative to the WASSCE, taken in the June/July internal series.",
    },
    ExamInfo {
        name: "WASSCE GCE",
        body: "West African Examinations Council (WAEC)",
        level: EL::Senior,
        description: "Private-candidate series of the WASSCE, held in November/December.",
    },
    ExamInfo {
        name: "BECE",
        body: "NECO and state examination boards",
        level: EL::Junior,
        description: "Basic Education Certificate Examination at the end of JSS3; gateway into senior secondary school.",
    },
    ExamInfo {
        name: "NCEE",
        body: "National Examinations Council (NECO)",
        level: EL::Junior,
        description: "National Common Entrance Examination for admission into Federal Government Colleges (unity schools).",
    },
    ExamInfo {
        name: "UTME",
        body: "Joint Admissions and Matriculation Board (JAMB)",
        level: EL::Tertiary,
        description: "Computer-based Unified Tertiary Matriculation Examination required for entry into universities, polytechnics, and colleges of education.",
    },
];

pub const UNIVERSITIES: &[UniversityInfo] = &[
    UniversityInfo { name: "University of Ibadan", state: "Oyo", ownership: O::Federal, founded: 1948 },
    UniversityInfo { name: "University of Nigeria, Nsukka", state: "Enugu", ownership: O::Federal, founded: 1955 },
    UniversityInfo { name: "Obafemi Awolowo University", state: "Osun", ownership: O::Federal, founded: 1961 },
    UniversityInfo { name: "Ahmadu Bello University", state: "Kaduna", ownership: O::Federal, founded: 1962 },
    UniversityInfo { name: "University of Lagos", state: "Lagos", ownership: O::Federal, founded: 1962 },
    UniversityInfo { name: "University of Benin", state: "Edo", ownership: O::Federal, founded: 1970 },
    UniversityInfo { name: "University of Ilorin", state: "Kwara", ownership: O::Federal, founded: 1975 },
    UniversityInfo { name: "University of Jos", state: "Plateau", ownership: O::Federal, founded: 1975 },
    UniversityInfo { name: "University of Maiduguri", state: "Borno", ownership: O::Federal, founded: 1975 },
    UniversityInfo { name: "University of Port Harcourt", state: "Rivers", ownership: O::Federal, founded: 1975 },
    UniversityInfo { name: "Usmanu Danfodiyo University", state: "Sokoto", ownership: O::Federal, founded: 1975 },
    UniversityInfo { name: "Bayero University Kano", state: "Kano", ownership: O::Federal, founded: 1977 },
    UniversityInfo { name: "Federal University of Technology, Owerri", state: "Imo", ownership: O::Federal, founded: 1980 },
    UniversityInfo { name: "Federal University of Technology, Akure", state: "Ondo", ownership: O::Federal, founded: 1981 },
    UniversityInfo { name: "Federal University of Technology, Minna", state: "Niger", ownership: O::Federal, founded: 1983 },
    UniversityInfo { name: "University of Abuja", state: "Federal Capital Territory", ownership: O::Federal, founded: 1988 },
    UniversityInfo { name: "Nnamdi Azikiwe University", state: "Anambra", ownership: O::Federal, founded: 1991 },
    UniversityInfo { name: "University of Uyo", state: "Akwa Ibom", ownership: O::Federal, founded: 1991 },
    UniversityInfo { name: "Rivers State University", state: "Rivers", ownership: O::State, founded: 1980 },
    UniversityInfo { name: "Enugu State University of Science and Technology", state: "Enugu", ownership: O::State, founded: 1982 },
    UniversityInfo { name: "Ekiti State University", state: "Ekiti", ownership: O::State, founded: 1982 },
    UniversityInfo { name: "Olabisi Onabanjo University", state: "Ogun", ownership: O::State, founded: 1982 },
    UniversityInfo { name: "Lagos State University", state: "Lagos", ownership: O::State, founded: 1983 },
    UniversityInfo { name: "Delta State University, Abraka", state: "Delta", ownership: O::State, founded: 1992 },
    UniversityInfo { name: "Igbinedion University", state: "Edo", ownership: O::Private, founded: 1999 },
    UniversityInfo { name: "Babcock University", state: "Ogun", ownership: O::Private, founded: 1999 },
    UniversityInfo { name: "Bowen University", state: "Osun", ownership: O::Private, founded: 2001 },
    UniversityInfo { name: "Covenant University", state: "Ogun", ownership: O::Private, founded: 2002 },
    UniversityInfo { name: "Pan-Atlantic University", state: "Lagos", ownership: O::Private, founded: 2002 },
    UniversityInfo { name: "American University of Nigeria", state: "Adamawa", ownership: O::Private, founded: 2004 },
    UniversityInfo { name: "Redeemer's University", state: "Osun", ownership: O::Private, founded: 2005 },
    UniversityInfo { name: "Afe Babalola University", state: "Ekiti", ownership: O::Private, founded: 2009 },
    UniversityInfo { name: "Landmark University", state: "Kwara", ownership: O::Private, founded: 2011 },
];

pub const SCHOLARSHIPS: &[ScholarshipInfo] = &[
    ScholarshipInfo {
        name: "MTN Foundation Science and Technology Scholarship",
        sponsor: "MTN Foundation",
        level: SL::Undergraduate,
        description: "Merit award for 300-level students in science and technology disciplines at public universities.",
    },
    ScholarshipInfo {
        name: "NNPC/TotalEnergies National Merit Scholarship",
        sponsor: "NNPC and TotalEnergies joint venture",
        level: SL::Undergraduate,
        description: "Annual merit scholarship for undergraduates of Nigerian tertiary institutions.",
    },
    ScholarshipInfo {
        name: "Agbami Medical and Engineering Professionals Scholarship",
        sponsor: "Agbami field partners, operated by Chevron",
        level: SL::Undergraduate,
        description: "Supports students in medicine, health sciences, and engineering.",
    },
    ScholarshipInfo {
        name: "SPDC Niger Delta Scholarship",
        sponsor: "Shell Petroleum Development Company joint venture",
        level: SL::Undergraduate,
        description: "University scholarship for students from Niger Delta states.",
    },
    ScholarshipInfo {
        name: "SPDC Cradle-to-Career Scholarship",
        sponsor: "Shell Petroleum Development Company joint venture",
        level: SL::Secondary,
        description: "Full secondary-school scholarship placing high-performing pupils in partner boarding schools.",
    },
    ScholarshipInfo {
        name: "NLNG Undergraduate Scholarship",
        sponsor: "Nigeria LNG Limited",
        level: SL::Undergraduate,
        description: "Award for undergraduates, with priority for students from Rivers State host communities.",
    },
    ScholarshipInfo {
        name: "NLNG Overseas Postgraduate Scholarship",
        sponsor: "Nigeria LNG Limited",
        level: SL::Postgraduate,
        description: "Funds master's study abroad in engineering, geosciences, and management fields.",
    },
    ScholarshipInfo {
        name: "PTDF Overseas Scholarship Scheme",
        sponsor: "Petroleum Technology Development Fund",
        level: SL::Postgraduate,
        description: "Government funding for postgraduate study in oil-and-gas-relevant disciplines overseas.",
    },
    ScholarshipInfo {
        name: "Bilateral Education Agreement Scholarship",
        sponsor: "Federal Ministry of Education",
        level: SL::Undergraduate,
        description: "Tuition-free study in partner countries under government-to-government agreements.",
    },
    ScholarshipInfo {
        name: "Jim Ovia Foundation Leaders Scholarship",
        sponsor: "Jim Ovia Foundation",
        level: SL::Undergraduate,
        description: "Covers tuition for admitted undergraduates with demonstrated leadership potential.",
    },
    ScholarshipInfo {
        name: "David Oyedepo Foundation Scholarship",
        sponsor: "David Oyedepo Foundation",
        level: SL::Undergraduate,
        description: "Full tuition for young Africans studying at member universities.",
    },
    ScholarshipInfo {
        name: "NDDC Foreign Postgraduate Scholarship",
        sponsor: "Niger Delta Development Commission",
        level: SL::Postgraduate,
        description: "Sponsors postgraduate study abroad for applicants from the Niger Delta region.",
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Filters
// ────────────────────────────────────────────────────────────────────────────

pub fn filter_subjects(
    category: Option<SubjectCategory>,
    level: Option<SchoolLevel>,
) -> Vec<SubjectInfo> {
    SUBJECTS
        .iter()
        .copied()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .filter(|s| level.map_or(true, |l| s.level == l || s.level == SchoolLevel::Both))
        .collect()
}

pub fn filter_exams(level: Option<ExamLevel>) -> Vec<ExamInfo> {
    EXAMS
        .iter()
        .copied()
        .filter(|e| level.map_or(true, |l| e.level == l))
        .collect()
}

pub fn filter_universities(
    state: Option<&str>,
    ownership: Option<Ownership>,
) -> Vec<UniversityInfo> {
    UNIVERSITIES
        .iter()
        .copied()
        .filter(|u| state.map_or(true, |s| u.state.eq_ignore_ascii_case(s.trim())))
        .filter(|u| ownership.map_or(true, |o| u.ownership == o))
        .collect()
}

pub fn filter_scholarships(level: Option<StudyLevel>) -> Vec<ScholarshipInfo> {
    SCHOLARSHIPS
        .iter()
        .copied()
        .filter(|s| level.map_or(true, |l| s.level == l))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tables_are_populated() {
        assert!(SUBJECTS.len() >= 30);
        assert_eq!(EXAMS.len(), 6);
        assert!(UNIVERSITIES.len() >= 30);
        assert_eq!(SCHOLARSHIPS.len(), 12);
    }

    #[test]
    fn test_entry_names_are_unique() {
        for names in [
            SUBJECTS.iter().map(|s| s.name).collect::<Vec<_>>(),
            UNIVERSITIES.iter().map(|u| u.name).collect::<Vec<_>>(),
            SCHOLARSHIPS.iter().map(|s| s.name).collect::<Vec<_>>(),
            EXAMS.iter().map(|e| e.name).collect::<Vec<_>>(),
        ] {
            let unique: HashSet<_> = names.iter().collect();
            assert_eq!(unique.len(), names.len());
        }
    }

    #[test]
    fn test_both_level_subjects_match_junior_and_senior_queries() {
        let junior = filter_subjects(None, Some(SchoolLevel::Junior));
        let senior = filter_subjects(None, Some(SchoolLevel::Senior));
        assert!(junior.iter().any(|s| s.name == "English Language"));
        assert!(senior.iter().any(|s| s.name == "English Language"));
        // Physics is senior-only
        assert!(!junior.iter().any(|s| s.name == "Physics"));
        assert!(senior.iter().any(|s| s.name == "Physics"));
    }

    #[test]
    fn test_subject_filters_combine() {
        let senior_sciences =
            filter_subjects(Some(SubjectCategory::Sciences), Some(SchoolLevel::Senior));
        assert!(senior_sciences.iter().any(|s| s.name == "Chemistry"));
        assert!(senior_sciences
            .iter()
            .all(|s| s.category == SubjectCategory::Sciences));
        assert!(!senior_sciences.iter().any(|s| s.name == "Basic Science"));
    }

    #[test]
    fn test_exam_level_filter() {
        let tertiary = filter_exams(Some(ExamLevel::Tertiary));
        assert_eq!(tertiary.len(), 1);
        assert_eq!(tertiary[0].name, "UTME");
    }

    #[test]
    fn test_university_filters_combine() {
        let ogun_private = filter_universities(Some("ogun"), Some(Ownership::Private));
        let names: Vec<_> = ogun_private.iter().map(|u| u.name).collect();
        assert!(names.contains(&"Covenant University"));
        assert!(names.contains(&"Babcock University"));
        assert!(!names.contains(&"Olabisi Onabanjo University"));
    }

    #[test]
    fn test_scholarship_level_filter() {
        let postgraduate = filter_scholarships(Some(StudyLevel::Postgraduate));
        assert!(postgraduate
            .iter()
            .any(|s| s.name == "PTDF Overseas Scholarship Scheme"));
        assert!(postgraduate.iter().all(|s| s.level == StudyLevel::Postgraduate));
    }

    #[test]
    fn test_filter_enum_parsing_accepts_common_aliases() {
        assert_eq!(SubjectCategory::parse("Science"), Some(SubjectCategory::Sciences));
        assert_eq!(SubjectCategory::parse("ARTS"), Some(SubjectCategory::Humanities));
        assert_eq!(SchoolLevel::parse("jss"), Some(SchoolLevel::Junior));
        assert_eq!(Ownership::parse(" Federal "), Some(Ownership::Federal));
        assert_eq!(StudyLevel::parse("postgraduate"), Some(StudyLevel::Postgraduate));
        assert_eq!(SubjectCategory::parse("unknown"), None);
    }
}
