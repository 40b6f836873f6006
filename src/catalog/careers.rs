//! Career paths associated with the DCS major.

use serde::Serialize;

/// A career path. Immutable after load.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub key: &'static str,
    /// Display name; also the phrase matched in chat messages.
    pub name: &'static str,
    pub description: &'static str,
    pub related_courses: &'static [&'static str],
    pub skills: &'static [&'static str],
    pub potential_jobs: &'static [&'static str],
}

impl CareerPath {
    /// Interest category derived from the display name
    /// (`"Data Science & Analytics"` → `"data_science_&_analytics"`).
    pub fn interest_key(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// All career paths in display order.
pub fn career_paths() -> &'static [CareerPath] {
    CAREER_PATHS
}

static CAREER_PATHS: &[CareerPath] = &[
    CareerPath {
        key: "dataScienceAnalytics",
        name: "Data Science & Analytics",
        description: "Apply statistical analysis, machine learning, and data visualization to extract insights from large datasets.",
        related_courses: &["DCS211", "DCS309", "DCS310", "DCS311", "MATH205", "MATH365"],
        skills: &["Python", "R", "SQL", "machine learning", "statistical analysis", "data visualization"],
        potential_jobs: &[
            "Data Scientist",
            "Data Analyst",
            "Business Intelligence Analyst",
            "Machine Learning Engineer",
            "Quantitative Analyst",
        ],
    },
    CareerPath {
        key: "softwareEngineering",
        name: "Software Engineering",
        description: "Design, develop, and maintain software systems and applications.",
        related_courses: &["DCS109", "DCS209", "DCS235", "DCS215", "DCS325", "MATH315"],
        skills: &["Java", "Python", "JavaScript", "databases", "algorithms", "software development methodologies"],
        potential_jobs: &[
            "Software Engineer",
            "Full-Stack Developer",
            "Mobile App Developer",
            "DevOps Engineer",
            "Quality Assurance Engineer",
        ],
    },
    CareerPath {
        key: "digitalMedia",
        name: "Digital Media & Design",
        description: "Create digital content and interactive experiences through design principles and digital tools.",
        related_courses: &["DCS105", "DCS107", "DCS227", "DCS304", "AV219", "AV281"],
        skills: &["UI/UX design", "digital storytelling", "multimedia production", "web design", "visual communication"],
        potential_jobs: &[
            "UX/UI Designer",
            "Digital Media Specialist",
            "Web Designer",
            "Interactive Media Designer",
            "Content Creator",
        ],
    },
    CareerPath {
        key: "computerScienceResearch",
        name: "Computer Science Research",
        description: "Advance the theoretical foundations of computing and develop new technologies.",
        related_courses: &["DCS209", "DCS215", "DCS235", "DCS333", "MATH221", "MATH315"],
        skills: &["algorithms", "theoretical CS", "research methods", "mathematical reasoning", "technical writing"],
        potential_jobs: &[
            "Research Scientist",
            "Professor",
            "Algorithm Designer",
            "Computational Biologist",
            "PhD Student",
        ],
    },
    CareerPath {
        key: "cyberSecurity",
        name: "Cybersecurity",
        description: "Protect digital systems, networks, and data from unauthorized access and cyber threats.",
        related_courses: &["DCS209", "DCS235", "DCS325", "PHIL241"],
        skills: &["network security", "cryptography", "ethical hacking", "risk assessment", "security protocols"],
        potential_jobs: &[
            "Security Analyst",
            "Ethical Hacker",
            "Security Engineer",
            "Cryptographer",
            "Security Consultant",
        ],
    },
    CareerPath {
        key: "humanComputerInteraction",
        name: "Human-Computer Interaction",
        description: "Design and evaluate interactive computing systems centered on human needs and experiences.",
        related_courses: &["DCS105", "DCS107", "DCS214", "DCS304", "PSYC218"],
        skills: &["user research", "interaction design", "usability testing", "prototyping", "user psychology"],
        potential_jobs: &[
            "UX Researcher",
            "Interaction Designer",
            "Usability Specialist",
            "Product Designer",
            "Accessibility Specialist",
        ],
    },
];
