//! Professor email composition.

use serde::Deserialize;

pub const SUBJECT: &str = "New Student Inquiry about DCS Major";

const SUMMARY_MESSAGE_LIMIT: usize = 10;
const SUMMARY_CHAR_LIMIT: usize = 300;

/// Subject plus plain-text and HTML bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfessorEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// One chat message as the widget reports it.
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryMessage {
    /// `"user"` for the student, anything else for the bot.
    pub sender: String,
    #[serde(default)]
    pub text: String,
}

/// Render the last ten messages as `Student: ...` / `Bot: ...` lines,
/// truncating each to 300 characters.
pub fn format_chat_summary(messages: &[SummaryMessage]) -> String {
    if messages.is_empty() {
        return "No chat history available.".to_string();
    }

    let start = messages.len().saturating_sub(SUMMARY_MESSAGE_LIMIT);
    messages[start..]
        .iter()
        .map(|m| {
            let role = if m.sender == "user" { "Student" } else { "Bot" };
            let text = match m.text.char_indices().nth(SUMMARY_CHAR_LIMIT) {
                Some((idx, _)) => format!("{}...", &m.text[..idx]),
                None => m.text.clone(),
            };
            format!("{role}: {text}")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the inquiry email sent to a professor on a student's behalf.
pub fn compose_professor_email(
    student_email: &str,
    chat_summary: &str,
    professor_name: &str,
) -> ProfessorEmail {
    let text = format!(
        "Dear Professor {professor_name},

A student has expressed interest in learning more about the DCS major through our chatbot and would like to connect with you.

Student Contact Information:
- Email: {student_email}

Chat Summary:
{chat_summary}

Please reach out to the student at your earliest convenience to provide more information about the DCS major or answer any specific questions they might have.

Thank you,
DCS Chatbot
"
    );

    let html = format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2>Student Inquiry About DCS Major</h2>
  <p>Dear Professor {name},</p>
  <p>A student has expressed interest in learning more about the DCS major through our chatbot and would like to connect with you.</p>

  <h3>Student Contact Information:</h3>
  <ul>
    <li><strong>Email:</strong> {email}</li>
  </ul>

  <h3>Chat Summary:</h3>
  <div style="background: #f7f7f7; padding: 15px; border-radius: 5px; margin: 15px 0;">
    <p style="white-space: pre-line;">{summary}</p>
  </div>

  <p>Please reach out to the student at your earliest convenience to provide more information about the DCS major or answer any specific questions they might have.</p>

  <p>Thank you,<br>
  DCS Chatbot</p>
</div>
"#,
        name = escape_html(professor_name),
        email = escape_html(student_email),
        summary = escape_html(chat_summary),
    );

    ProfessorEmail {
        subject: SUBJECT.to_string(),
        text,
        html,
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(sender: &str, text: &str) -> SummaryMessage {
        SummaryMessage {
            sender: sender.into(),
            text: text.into(),
        }
    }

    #[test]
    fn empty_history_has_placeholder() {
        assert_eq!(format_chat_summary(&[]), "No chat history available.");
    }

    #[test]
    fn summary_keeps_last_ten_and_labels_roles() {
        let messages: Vec<_> = (0..12)
            .map(|i| message(if i % 2 == 0 { "user" } else { "bot" }, &format!("m{i}")))
            .collect();
        let summary = format_chat_summary(&messages);
        assert!(summary.starts_with("Student: m2\n\nBot: m3"));
        assert!(summary.ends_with("Bot: m11"));
        assert!(!summary.contains("m1\n"));
    }

    #[test]
    fn long_messages_are_truncated() {
        let long = "x".repeat(400);
        let summary = format_chat_summary(&[message("user", &long)]);
        assert_eq!(summary, format!("Student: {}...", "x".repeat(300)));
    }

    #[test]
    fn email_names_professor_and_student() {
        let email = compose_professor_email("student@bates.edu", "Student: hi", "Barry Lawson");
        assert_eq!(email.subject, "New Student Inquiry about DCS Major");
        assert!(email.text.starts_with("Dear Professor Barry Lawson,"));
        assert!(email.text.contains("- Email: student@bates.edu"));
        assert!(email.text.contains("Chat Summary:\nStudent: hi"));
        assert!(email.html.contains("<p>Dear Professor Barry Lawson,</p>"));
    }

    #[test]
    fn html_body_escapes_summary() {
        let email = compose_professor_email("s@b.edu", "<script>", "Dr. Brown");
        assert!(email.html.contains("&lt;script&gt;"));
        assert!(email.text.contains("<script>"));
    }
}
