//! DCS course table.

use serde::Serialize;

/// A catalog course. Immutable after load.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: &'static str,
    /// Display code, e.g. `"DCS 109D"`.
    pub code: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub credits: u8,
    /// Display codes of prerequisite courses (or free text such as
    /// `"Senior standing"`).
    pub prerequisites: &'static [&'static str],
    /// Method categories; the first entry is the primary one.
    pub method_categories: &'static [&'static str],
    pub typical_offering: &'static str,
    pub faculty: &'static [&'static str],
}

impl Course {
    /// The course code without whitespace, upper-cased (`"DCS109D"`).
    pub fn compact_code(&self) -> String {
        compact_code(self.code)
    }

    /// Primary method category, lower-cased.
    pub fn primary_category(&self) -> String {
        self.method_categories
            .first()
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| "computer science".to_string())
    }
}

/// Normalize a course code for comparison: strip whitespace, upper-case.
pub fn compact_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// All catalog courses in display order.
pub fn courses() -> &'static [Course] {
    COURSES
}

/// Find a course by code, ignoring case and whitespace (`"dcs211"` matches
/// `"DCS 211"`).
pub fn find_course(code: &str) -> Option<&'static Course> {
    let wanted = compact_code(code);
    COURSES.iter().find(|c| c.compact_code() == wanted)
}

static COURSES: &[Course] = &[
    Course {
        id: "dcs109d",
        code: "DCS 109D",
        title: "Introduction to Computational Problem Solving with Data",
        description: "This course introduces computational thinking and problem solving through the lens of data manipulation and analysis. Students learn fundamental programming concepts using Python, including variables, data types, control structures, functions, and basic data visualization techniques. The course emphasizes practical applications for processing and analyzing datasets.",
        credits: 1,
        prerequisites: &[],
        method_categories: &["methods of computer science", "methods of data science"],
        typical_offering: "Fall and Winter semesters",
        faculty: &["Prof. Johnson", "Prof. Martinez"],
    },
    Course {
        id: "dcs109r",
        code: "DCS 109R",
        title: "Introduction to Computational Thinking with Robots",
        description: "This course introduces computational thinking using robotic systems as the primary learning tool. Students explore fundamental programming concepts while controlling robots to solve problems. Topics include basic algorithm design, control flow, event-based programming, and simple sensor integration.",
        credits: 1,
        prerequisites: &[],
        method_categories: &["methods of computer science"],
        typical_offering: "Winter semester",
        faculty: &["Prof. Williams", "Prof. Chen"],
    },
    Course {
        id: "dcs109s",
        code: "DCS 109S",
        title: "Introduction to Computing for Problem Solving",
        description: "This course introduces computational problem solving with a focus on algorithm development and implementation. Students learn to solve problems using fundamental programming concepts, basic data structures, and systematic development approaches. The course emphasizes practices for writing clear, efficient, and maintainable code.",
        credits: 1,
        prerequisites: &[],
        method_categories: &["methods of computer science"],
        typical_offering: "Fall and Winter semesters",
        faculty: &["Prof. Davis", "Prof. Thompson"],
    },
    Course {
        id: "dcs109t",
        code: "DCS 109T",
        title: "Computing Across the Liberal Arts",
        description: "This interdisciplinary course introduces computational methods in the context of different liberal arts disciplines. Students explore how computation can enhance understanding and research in fields such as humanities, social sciences, and arts. The course covers basic programming skills and computational thinking applied to interdisciplinary problems.",
        credits: 1,
        prerequisites: &[],
        method_categories: &["methods of computer science", "methods of critical digital studies"],
        typical_offering: "Fall semester",
        faculty: &["Prof. Garcia", "Prof. Robinson"],
    },
    Course {
        id: "dcs211",
        code: "DCS 211",
        title: "Data Structures and Algorithms",
        description: "This course explores fundamental data structures and algorithms used in computer science. Topics include linked lists, stacks, queues, trees, graphs, sorting and searching algorithms, and analysis of algorithm efficiency. Students implement and analyze various data structures and algorithms to solve computational problems.",
        credits: 1,
        prerequisites: &["DCS 109D", "DCS 109R", "DCS 109S", "DCS 109T"],
        method_categories: &["methods of computer science", "methods of software development"],
        typical_offering: "Fall semester",
        faculty: &["Prof. Anderson", "Prof. Wilson"],
    },
    Course {
        id: "dcs229",
        code: "DCS 229",
        title: "Web Application Development",
        description: "This course covers the design and implementation of web applications. Students learn about client-server architecture, front-end design principles, database integration, and web application security. The course includes hands-on development of web applications using modern frameworks and technologies.",
        credits: 1,
        prerequisites: &["DCS 109D", "DCS 109S"],
        method_categories: &["methods of software development", "methods of human-centered design"],
        typical_offering: "Winter semester",
        faculty: &["Prof. Patel", "Prof. Smith"],
    },
    Course {
        id: "dcs250",
        code: "DCS 250",
        title: "Data Analysis and Visualization",
        description: "This course focuses on techniques for analyzing and visualizing data to extract meaningful insights. Students learn statistical methods, data preprocessing techniques, and visualization principles using modern tools and programming libraries. The course emphasizes effective communication of data-driven findings.",
        credits: 1,
        prerequisites: &["DCS 109D"],
        method_categories: &["methods of data science, analysis, & visualization"],
        typical_offering: "Winter semester",
        faculty: &["Prof. Lee", "Prof. Brown"],
    },
    Course {
        id: "dcs305",
        code: "DCS 305",
        title: "Human-Computer Interaction",
        description: "This course examines the design and evaluation of interactive computing systems from a human-centered perspective. Topics include user research methods, prototyping techniques, usability evaluation, and accessibility considerations. Students apply design thinking principles to create user-friendly interactive systems.",
        credits: 1,
        prerequisites: &["DCS 211", "DCS 229"],
        method_categories: &["methods of human-centered design", "methods of critical digital studies"],
        typical_offering: "Fall semester",
        faculty: &["Prof. Kim", "Prof. Taylor"],
    },
    Course {
        id: "dcs325",
        code: "DCS 325",
        title: "Machine Learning",
        description: "This course introduces the principles and techniques of machine learning. Topics include supervised and unsupervised learning, neural networks, decision trees, and model evaluation. Students implement various machine learning algorithms and apply them to real-world problems.",
        credits: 1,
        prerequisites: &["DCS 211", "DCS 250"],
        method_categories: &[
            "methods of data science, analysis, & visualization",
            "methods of computer science",
        ],
        typical_offering: "Winter semester",
        faculty: &["Prof. Zhang", "Prof. Miller"],
    },
    Course {
        id: "dcs342",
        code: "DCS 342",
        title: "Community-Engaged Digital Projects",
        description: "This project-based course partners students with local community organizations to develop digital solutions addressing real-world needs. Students apply technical skills while engaging with community stakeholders through participatory design processes, reflecting on the social impact of technology.",
        credits: 1,
        prerequisites: &["DCS 229", "DCS 305"],
        method_categories: &["methods of community-engaged learning", "methods of human-centered design"],
        typical_offering: "Fall and Winter semesters",
        faculty: &["Prof. Rodriguez", "Prof. Mitchell"],
    },
    Course {
        id: "dcs457",
        code: "DCS 457",
        title: "Senior Seminar: Critical Digital Studies",
        description: "This capstone seminar explores critical perspectives on digital technologies and their social, cultural, and ethical implications. Students engage with theoretical frameworks for analyzing digital systems and develop research projects examining the relationship between technology and society. The course fulfills the W3 writing requirement.",
        credits: 1,
        prerequisites: &["Senior standing"],
        method_categories: &["methods of critical digital studies", "capstone"],
        typical_offering: "Winter semester",
        faculty: &["Prof. Baker", "Prof. Nelson"],
    },
];
