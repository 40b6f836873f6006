//! Canned reply text.
//!
//! Every string the chat engine can say lives here so the dispatch logic
//! stays readable.

use crate::catalog::Course;

/// Reply to a plain greeting.
pub const GREETING: &str = "Hello! I'm your Bates DCS guide. How can I help you explore the Digital and Computational Studies program today?";

/// Reply after a "start over" / "reset" request.
pub const RESET_GREETING: &str = "Let's start fresh! I'm your Bates DCS guide, providing information based on the official Bates College Digital and Computational Studies website. To help me provide the most relevant information, could you tell me if you're a prospective student, current student, or faculty/staff member?";

pub const ASK_USER_TYPE: &str = "To help me provide more relevant information, could you tell me if you're a prospective student, current student, or faculty/staff member?";

pub const PROSPECTIVE_WELCOME: &str = "Great! As a prospective student, I can help you explore the DCS program. What would you like to know about? You can ask about courses, programming languages, career paths, or research opportunities.";

pub const CURRENT_WELCOME: &str = "Welcome back! As a current student, I can help you with course planning and program requirements. What courses are you currently taking or interested in?";

pub const STAFF_WELCOME: &str = "Hello! As faculty/staff, I can provide information about the DCS program structure and resources. What would you like to know?";

/// Used when no rule produced a reply.
pub const GENERIC_PROMPT: &str = "I'm here to help you explore the DCS program. Could you tell me more about what interests you? You can ask about courses, programming languages, career paths, or research opportunities.";

pub const ASK_COURSES_TAKEN: &str = "As a current student, it would help if you could tell me which DCS courses you've already taken. This will help me recommend appropriate next courses for you.";

pub const STAFF_INFO: &str = "Thank you for identifying as faculty/staff. I can provide information about:

• Current DCS curriculum and requirements
• Course offerings and schedules
• Student resources and advising
• Research opportunities

What specific information about the DCS program would be most helpful to you?";

pub const PROSPECTIVE_COURSES: &str = "Based on your interests, these introductory courses would be excellent starting points:

• DCS 109D: Intro to Computational Problem Solving with Data
• DCS 109: Intro to Computer Science and Software Engineering

No prior experience is needed for these courses. Which aspects of these courses sound most interesting to you?";

pub const CURRENT_COURSES: &str = "Based on your interests and courses you've taken, these next courses might align well with your goals:

• DCS 211: Data Structures and Algorithms
• DCS 229: Web Development
• DCS 250: Data Analysis and Visualization

Would you like more details about any of these courses? Or would you prefer to speak with Professor Barry Lawson about course planning?";

pub const REFLECT_ON_COURSES: &str = "Thank you for sharing your interests! Let's connect them to academic experiences.

Reflecting on courses you've taken or topics you've explored:

• What learning experiences have you found most engaging?
• Which class activities or projects have you enjoyed most?
• When learning something new, what formats help you thrive?
• Have any particular topics or challenges energized you?

Your reflections will help us find DCS courses that match your learning style and interests.";

pub const INTERESTS_PROMPT: &str = "Let's reflect on what aspects of computing resonate with you!

According to the Bates DCS program, students connect with different elements of computing:

• Are you drawn to creative problem-solving?
• Do you enjoy working with data and discovering patterns?
• Are you interested in designing how people interact with technology?
• Do you want to use technology to address social challenges?
• Are you fascinated by how software is built?
• Does artificial intelligence or machine learning intrigue you?

Which of these resonates most with you, or is there something else that sparks your interest?";

pub const CAREERS_PROMPT: &str = "Your course reflections provide valuable insights! Now let's consider how these might connect to future paths.

When you imagine using your technical knowledge after Bates, which of these resonates with you:

• Creating software solutions to real-world problems
• Finding meaningful patterns in complex data
• Designing digital experiences that help people
• Advising organizations on effective technology use
• Building interactive digital media or games
• Protecting systems from cyber threats
• Advancing the frontiers of artificial intelligence

Which of these paths speaks to you, or do you envision something different?";

pub const FOLLOWUP_PROMPT: &str = "Based on our conversation about your interests and goals, I've created this educational plan for you.

Take a moment to reflect on this suggested path:

• Does it align with what excites you about computing?
• Are there areas you'd like to explore further?
• Do you see connections to your other academic interests?
• What questions do you have about implementing this plan?

I'm here to help refine this plan or explore any aspect in more detail.";

/// Canned blocks for prospective students, keyed by topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProspectiveTopic {
    ExploreInterests,
    ProgrammingLanguages,
    CareerPaths,
    Research,
    CoursePlanning,
}

impl ProspectiveTopic {
    /// Pick a topic from a lower-cased message. Checked in a fixed order:
    /// programming, careers, research, course planning, interests.
    pub fn detect(lower: &str) -> Option<Self> {
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
        if has(&["programming", "coding", "code"]) {
            Some(Self::ProgrammingLanguages)
        } else if has(&["career", "job", "work"]) {
            Some(Self::CareerPaths)
        } else if has(&["research", "study", "project"]) {
            Some(Self::Research)
        } else if has(&["course", "plan", "schedule"]) {
            Some(Self::CoursePlanning)
        } else if has(&["interest", "explore", "learn"]) {
            Some(Self::ExploreInterests)
        } else {
            None
        }
    }

    pub fn reply(self) -> &'static str {
        match self {
            Self::ExploreInterests => {
                "Great! Let's explore your interests in DCS. Here are some key areas you might be interested in:

• Programming and Software Development
• Data Science and Analysis
• Artificial Intelligence and Machine Learning
• Web and Mobile Development
• Digital Humanities
• Cybersecurity
• Game Development
• Human-Computer Interaction

Which of these areas interests you most? You can also tell me about other specific interests you have!"
            }
            Self::ProgrammingLanguages => {
                "At Bates, you'll have the opportunity to learn several programming languages:

• Python: Used in DCS 109D for data analysis and computational thinking
• Java: Taught in DCS 211 for object-oriented programming
• JavaScript: Used in DCS 229 for web development
• R: Used in statistics and data science courses
• SQL: For database management
• HTML/CSS: For web development

Would you like to know more about any specific language or see how it's used in our courses?"
            }
            Self::CareerPaths => {
                "DCS graduates pursue diverse career paths:

• Software Engineering
• Data Science and Analytics
• Web Development
• UX/UI Design
• Cybersecurity
• Research and Academia
• Digital Humanities
• Tech Consulting
• Game Development
• AI/ML Engineering

Would you like to explore any of these career paths in more detail?"
            }
            Self::Research => {
                "Bates offers exciting research opportunities in DCS:

• Summer Research Fellowships
• Independent Study Projects
• Senior Thesis Research
• Faculty-Led Research Projects
• Interdisciplinary Research Collaborations
• External Research Internships

Current research areas include:
• Machine Learning and AI
• Data Visualization
• Digital Humanities
• Human-Computer Interaction
• Cybersecurity
• Computational Biology

Would you like to learn more about any specific research area or opportunity?"
            }
            Self::CoursePlanning => {
                "Let's plan your DCS journey! Here's a typical course sequence:

First Year:
• DCS 109D: Intro to Computational Problem Solving with Data
• DCS 150: Digital Storytelling and Culture

Second Year:
• DCS 211: Data Structures and Algorithms
• DCS 229: Web Development
• Methods courses in your area of interest

Third Year:
• Advanced courses in your chosen track
• Research opportunities
• Internships

Fourth Year:
• Senior Seminar
• Capstone Project
• Advanced electives

Would you like to explore any specific year or course in more detail?"
            }
        }
    }
}

/// Next-course suggestions for a current student, built from the compact
/// codes of the courses they have taken.
pub fn taken_course_recommendations(courses_taken: &[String]) -> String {
    let mut text = format!(
        "Based on the courses you've taken ({}), here are some courses you might consider next:\n\n",
        courses_taken.join(", ")
    );

    if courses_taken.iter().any(|c| c.contains("109")) {
        text.push_str("• DCS 211: Data Structures and Algorithms\n");
        text.push_str("• DCS 229: Web Application Development\n\n");
    }
    if courses_taken.iter().any(|c| c.contains("211")) {
        text.push_str("• DCS 305: Human-Computer Interaction\n");
        text.push_str("• DCS 325: Machine Learning\n\n");
    }

    text.push_str(
        "Would you like to discuss your course plan with Professor Barry Lawson? He can provide personalized advising.",
    );
    text
}

/// Follow-up questions about a specific catalog course.
pub fn course_detail(course: &Course) -> String {
    format!(
        "{code} sounds interesting! As you consider this course:

• What specific skills or knowledge from this course seem most valuable to you?
• How do you see this course connecting to your broader educational goals?
• What aspects of the course content most align with your interests?
• What kind of projects would you hope to work on in this course?

I can provide more details on any of these aspects of {code}.",
        code = course.code
    )
}

/// Prompt that steers a conversation back towards known interests.
pub fn interest_summary(top_interests: &[&str]) -> String {
    format!(
        "Based on your interest in {}, let's explore how these connect to your DCS journey:

• What specific courses might deepen these interests?
• How might these interests translate to career opportunities?
• Which faculty members share your passion in these areas?
• What student projects have explored similar interests?
• How might these interests combine with other fields you enjoy?

Which of these directions would you like to explore further?",
        top_interests.join(" and ")
    )
}

/// Keyword-picked reply used when a chat request fails.
pub fn fallback_response(message: &str) -> String {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["programming", "language", "python", "java", "code", "coding"]) {
        return PROGRAMMING_LANGUAGES.to_string();
    }
    if has(&["field", "industry", "company", "job market", "employment"]) {
        return CAREER_FIELDS.to_string();
    }
    if has(&["major", "requirements", "degree"]) {
        return "**DCS Major Requirements**

The DCS major at Bates consists of 10 courses:

• 2 Foundation courses
• 4 Methods Requirements
• 1 Capstone
• 3 Electives

Which aspect interests you most? What other subjects are you studying?"
            .to_string();
    }
    if has(&["course", "class"]) {
        return "**DCS Course Offerings**

Courses are organized by level:

• 100-level: Introductory computing concepts
• 200-level: Core skills in development and analysis
• 300-level: Advanced specialized topics

What topics or skills would you like to learn?"
            .to_string();
    }
    if has(&["faculty", "professor"]) {
        return "**DCS Faculty**

Our faculty specialize in:

• Computer Science
• Data Science
• Digital Humanities
• Critical Digital Studies
• Human-Computer Interaction

Would you like to speak with a professor about your interests? I can help set that up."
            .to_string();
    }
    if has(&["career", "job"]) {
        return CAREER_FIELDS.to_string();
    }

    "**Exploring DCS at Bates**

I'm not sure I understood your question, but I'd like to help.

• What programming languages have you used before?
• What field of computing interests you most?
• Are you looking for courses, career advice, or faculty connections?

Let me know so I can guide you better."
        .to_string()
}

const PROGRAMMING_LANGUAGES: &str = "**Programming Languages in DCS**

Bates DCS courses use various programming languages:

• Python: Used in data science and intro courses
• JavaScript: Used in web development courses
• Java: Used in some data structures courses
• R: Used for statistical analysis

Which of these interests you most? Have you had experience with any programming languages?";

const CAREER_FIELDS: &str = "**DCS Career Fields**

Your DCS skills could lead to careers in:

• Software Development
• Data Science
• UX/UI Design
• Tech Consulting
• Digital Media

Which field interests you most? I can suggest courses that align with that path.";
