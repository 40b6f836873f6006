//! Faculty roster.
//!
//! The department chair is listed first and doubles as the default advisor
//! for professor notifications.

use serde::Serialize;

/// A faculty member. Immutable after load.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub name: &'static str,
    pub specialties: &'static [&'static str],
    pub email: &'static str,
    pub office: Option<&'static str>,
    pub interests: &'static [&'static str],
    pub is_department_chair: bool,
    pub is_default_advisor: bool,
}

/// The full roster, chair first.
pub fn faculty() -> &'static [Faculty] {
    FACULTY
}

/// The default advisor (department chair).
pub fn default_advisor() -> &'static Faculty {
    FACULTY
        .iter()
        .find(|f| f.is_default_advisor)
        .unwrap_or(&FACULTY[0])
}

/// Find a professor by exact name (case-insensitive).
pub fn find_professor(name: &str) -> Option<&'static Faculty> {
    let wanted = name.trim();
    FACULTY.iter().find(|f| f.name.eq_ignore_ascii_case(wanted))
}

static FACULTY: &[Faculty] = &[
    Faculty {
        name: "Barry Lawson",
        specialties: &[],
        email: "blawson@bates.edu",
        office: None,
        interests: &["algorithms", "programming", "robotics", "parallel computing", "cs education"],
        is_department_chair: true,
        is_default_advisor: true,
    },
    Faculty {
        name: "Dr. Brown",
        specialties: &["Computer Architecture", "Web Development", "Programming Languages"],
        email: "brown@bates.edu",
        office: Some("Pettengill Hall 365"),
        interests: &["software engineering", "web technologies"],
        is_department_chair: false,
        is_default_advisor: false,
    },
    Faculty {
        name: "Dr. Davis",
        specialties: &["Critical Digital Studies", "Digital Humanities", "Technology Ethics"],
        email: "davis@bates.edu",
        office: Some("Pettengill Hall 367"),
        interests: &["critical studies", "digital humanities", "ethics"],
        is_department_chair: false,
        is_default_advisor: false,
    },
    Faculty {
        name: "Dr. Garcia",
        specialties: &["Algorithms", "Artificial Intelligence", "Software Design"],
        email: "garcia@bates.edu",
        office: Some("Pettengill Hall 369"),
        interests: &["software engineering", "AI", "algorithms"],
        is_department_chair: false,
        is_default_advisor: false,
    },
    Faculty {
        name: "Dr. Martinez",
        specialties: &["Technology and Society", "Race and Digital Media", "Interdisciplinary Computing"],
        email: "martinez@bates.edu",
        office: Some("Pettengill Hall 371"),
        interests: &["critical studies", "social justice", "digital media"],
        is_department_chair: false,
        is_default_advisor: false,
    },
    Faculty {
        name: "Dr. Miller",
        specialties: &["Privacy", "Technology Critiques", "Digital Ethics"],
        email: "miller@bates.edu",
        office: Some("Pettengill Hall 373"),
        interests: &["critical studies", "ethics", "privacy"],
        is_department_chair: false,
        is_default_advisor: false,
    },
    Faculty {
        name: "Dr. Thompson",
        specialties: &["Data Science", "Machine Learning", "Computational Problem Solving"],
        email: "thompson@bates.edu",
        office: Some("Pettengill Hall 375"),
        interests: &["data science", "machine learning", "statistical analysis"],
        is_department_chair: false,
        is_default_advisor: false,
    },
    Faculty {
        name: "Dr. Wilson",
        specialties: &["Digital Art", "Data Visualization", "Creative Computing"],
        email: "wilson@bates.edu",
        office: Some("Pettengill Hall 377"),
        interests: &["creative computing", "digital design", "visualization"],
        is_department_chair: false,
        is_default_advisor: false,
    },
];
