//! Focus-area, career and course recommendations from accumulated interests.

use serde::Serialize;

use super::interests::InterestScores;
use crate::catalog::{self, Course};

const FOCUS_AREA_MAP: &[(&str, &[&str])] = &[
    ("programming", &["Software Development", "Computer Science"]),
    ("data_science", &["Data Science", "Analytics"]),
    ("design", &["Digital Media", "Human-Computer Interaction"]),
    ("theory", &["Computer Science", "Research"]),
    ("graphics", &["Digital Media", "Creative Computing"]),
    ("security", &["Cybersecurity", "Information Systems"]),
    ("web_development", &["Software Development", "Web Technologies"]),
    ("artificial_intelligence", &["AI/ML", "Data Science"]),
];

const CAREER_MAP: &[(&str, &[&str])] = &[
    ("programming", &["Software Engineering", "Web Development"]),
    ("data_science", &["Data Science & Analytics", "Research Scientist"]),
    ("design", &["Digital Media & Design", "UX/UI Designer"]),
    ("theory", &["Computer Science Research", "Algorithm Designer"]),
    ("graphics", &["Game Development", "Digital Media & Design"]),
    ("security", &["Cybersecurity", "Security Analyst"]),
    ("web_development", &["Web Developer", "Software Engineering"]),
    ("artificial_intelligence", &["Machine Learning Engineer", "AI Researcher"]),
];

/// Compact course codes per interest. Codes missing from the catalog are
/// skipped when resolving.
const COURSE_MAP: &[(&str, &[&str])] = &[
    ("programming", &["DCS109S", "DCS211", "DCS235"]),
    ("data_science", &["DCS109D", "DCS250", "DCS325"]),
    ("design", &["DCS109T", "DCS229", "DCS305"]),
    ("theory", &["DCS211", "DCS311", "DCS333"]),
    ("graphics", &["DCS109R", "DCS229", "DCS325"]),
    ("security", &["DCS211", "DCS235", "DCS311"]),
    ("web_development", &["DCS109D", "DCS229", "DCS325"]),
    ("artificial_intelligence", &["DCS211", "DCS250", "DCS325"]),
];

const MAX_FOCUS_AREAS: usize = 3;
const MAX_CAREERS: usize = 3;
const MAX_COURSES: usize = 5;

/// A suggested career, with the catalog description when one exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerSuggestion {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

/// All three recommendation lists for one conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub focus_areas: Vec<String>,
    pub careers: Vec<CareerSuggestion>,
    pub courses: Vec<&'static Course>,
}

/// Spread each interest's strength over its mapped targets and rank them.
fn tally(interests: &InterestScores, map: &[(&str, &[&'static str])]) -> InterestScores {
    let mut totals = InterestScores::new();
    for (interest, strength) in interests.iter() {
        let targets = map
            .iter()
            .find(|(key, _)| *key == interest)
            .map(|(_, targets)| *targets)
            .unwrap_or_default();
        for target in targets {
            totals.add(target, strength);
        }
    }
    totals
}

pub fn recommend_focus_areas(interests: &InterestScores) -> Vec<String> {
    tally(interests, FOCUS_AREA_MAP)
        .top(MAX_FOCUS_AREAS)
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn recommend_careers(interests: &InterestScores) -> Vec<CareerSuggestion> {
    tally(interests, CAREER_MAP)
        .top(MAX_CAREERS)
        .into_iter()
        .map(|name| CareerSuggestion {
            name: name.to_string(),
            description: catalog::career_paths()
                .iter()
                .find(|p| p.name == name)
                .map(|p| p.description),
        })
        .collect()
}

/// Top catalog courses for the interests, skipping any already taken.
/// `taken` holds compact codes.
pub fn recommend_courses(interests: &InterestScores, taken: &[String]) -> Vec<&'static Course> {
    tally(interests, COURSE_MAP)
        .ranked()
        .into_iter()
        .filter(|(code, _)| !taken.iter().any(|t| t == code))
        .filter_map(|(code, _)| catalog::find_course(code))
        .take(MAX_COURSES)
        .collect()
}

pub fn recommendations(interests: &InterestScores, taken: &[String]) -> Recommendations {
    Recommendations {
        focus_areas: recommend_focus_areas(interests),
        careers: recommend_careers(interests),
        courses: recommend_courses(interests, taken),
    }
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.focus_areas.is_empty() && self.careers.is_empty() && self.courses.is_empty()
    }

    /// Markdown summary of the three lists. Empty sections are omitted.
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("## Personalized DCS Recommendations\n\n");

        if !self.focus_areas.is_empty() {
            out.push_str("### Recommended DCS Focus Areas\n");
            for area in &self.focus_areas {
                out.push_str(&format!("- {area}\n"));
            }
            out.push('\n');
        }

        if !self.careers.is_empty() {
            out.push_str("### Potential Career Paths\n");
            for career in &self.careers {
                match career.description {
                    Some(description) => out.push_str(&format!(
                        "- **{}**: {}...\n",
                        career.name,
                        excerpt(description, 120)
                    )),
                    None => out.push_str(&format!("- {}\n", career.name)),
                }
            }
            out.push('\n');
        }

        if !self.courses.is_empty() {
            out.push_str("### Recommended Courses\n");
            for course in &self.courses {
                out.push_str(&format!(
                    "- **{} ({})**: {}...\n",
                    course.code,
                    course.title,
                    excerpt(course.description, 120)
                ));
            }
            out.push('\n');
        }

        out
    }
}

fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
