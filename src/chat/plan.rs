//! Personalized plan rendering.

use super::state::{ConversationState, UserType};

/// Render the markdown plan for a conversation.
///
/// Depends only on the user type, the courses taken, and the identified
/// interests.
pub fn generate_plan(state: &ConversationState) -> String {
    let mut plan = String::from(match state.user_type {
        UserType::Prospective => "## Your Prospective DCS Path at Bates\n\n",
        UserType::Current => "## Your Personalized Course Plan\n\n",
        UserType::Staff | UserType::Unknown => "## DCS Program Information\n\n",
    });

    let areas: Vec<String> = state
        .identified_interests
        .iter()
        .map(|(category, _)| display_interest(category))
        .collect();
    plan.push_str("Based on our conversation");
    if !areas.is_empty() {
        plan.push_str(" about your interest in ");
        plan.push_str(&join_with_and(&areas));
    }

    match state.user_type {
        UserType::Prospective => {
            plan.push_str(", here's a suggested starting path for your DCS journey at Bates:\n\n");
            plan.push_str("**First Year Courses:**\n");
            plan.push_str("• DCS 109 or DCS 109S: Introduction to Computer Science and Software Engineering\n");
            plan.push_str("• DCS 150: Digital Storytelling and Culture\n\n");
            plan.push_str("**Second Year:**\n");
            plan.push_str("• DCS 211: Data Structures and Algorithms\n");
            plan.push_str("• DCS 229: Web Development\n\n");
            plan.push_str("These introductory courses require no prior programming experience and will build a solid foundation for your DCS education.\n\n");
            plan.push_str("Would you like to speak with Professor Barry Lawson to discuss the DCS program and your interests further?");
        }
        UserType::Current => {
            plan.push_str(", here are recommended next steps in your DCS education:\n\n");
            if state.courses_taken.is_empty() {
                let top = state.top_interests(2).join(" ");
                plan.push_str(&course_path_for_interest(&top));
                plan.push_str("\n\n");
            } else {
                plan.push_str(&format!(
                    "**Building on your current courses ({}):**\n",
                    state.courses_taken.join(", ")
                ));
                if state.courses_taken.iter().any(|c| c.contains("109")) {
                    plan.push_str("• DCS 211: Data Structures and Algorithms\n");
                    plan.push_str("• DCS 229: Web Development\n\n");
                }
                if state.courses_taken.iter().any(|c| c.contains("211")) {
                    plan.push_str("• DCS 305: Human-Computer Interaction\n");
                    plan.push_str("• DCS 325: Machine Learning\n\n");
                }
            }
            plan.push_str("Would you like to schedule an advising session with Professor Barry Lawson to discuss your course plan in more detail?");
        }
        UserType::Staff | UserType::Unknown => {
            plan.push_str(", here are the key components of the DCS program:\n\n");
            plan.push_str("**Foundation Courses (2):**\n");
            plan.push_str("• DCS 109\n");
            plan.push_str("• Software development course (DCS 211 or DCS 229)\n\n");
            plan.push_str("**Methods Requirements (4):**\n");
            plan.push_str("• Methods spanning data science, critical digital studies, human-centered design, and community engagement\n\n");
            plan.push_str("**Capstone (1):**\n");
            plan.push_str("• DCS 457: Senior seminar project course\n\n");
            plan.push_str("**Electives (3):**\n");
            plan.push_str("• Courses to reach a total of 10, with at least 2 at 300-level or above\n\n");
            plan.push_str("Please let me know if you'd like more specific information about any aspect of the DCS program.");
        }
    }

    plan
}

/// A 100-to-400 level course path, with the intro course picked by keyword.
pub fn course_path_for_interest(interest: &str) -> String {
    let has = |words: &[&str]| words.iter().any(|w| interest.contains(w));
    let intro = if has(&["data", "analysis"]) {
        "• DCS 109D: Intro to Computational Problem Solving with Data"
    } else if has(&["robot", "hardware"]) {
        "• DCS 109R: Intro to Computational Thinking with Robots"
    } else if has(&["problem", "algorithm"]) {
        "• DCS 109S: Intro to Computing for Problem Solving"
    } else if has(&["liberal", "interdisciplinary"]) {
        "• DCS 109T: Computing Across the Liberal Arts"
    } else {
        "• Any DCS 109 course based on your specific interests"
    };

    format!(
        "**Recommended Course Path**

**Start with:**
{intro}

**Then explore:**
• DCS 211: Data Structures and Algorithms
• DCS 229: Web Application Development

**Advanced courses:**
• DCS 305: Human-Computer Interaction
• DCS 325: Machine Learning
• DCS 342: Community-Engaged Digital Projects

**Capstone:**
• DCS 457: Senior Seminar in Digital & Computational Studies

Would you like to speak with a professor about this path? I can help set that up."
    )
}

fn display_interest(category: &str) -> String {
    if category == "ai" {
        "artificial intelligence".to_string()
    } else {
        category.replace('_', " ")
    }
}

/// `a`, `a and b`, `a, b, and c`.
fn join_with_and(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [one] => one.clone(),
        [a, b] => format!("{a} and {b}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}
