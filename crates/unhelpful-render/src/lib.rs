//! Render an [`AnswerRecord`] as a plain-text Q&A thread.
//!
//! The question is echoed, the answer sits between two 50-character `=`
//! rules, and the votes, acceptance mark and comments follow the body.
//!
//! # Example
//!
//! ```
//! use unhelpful::AnswerGenerator;
//! use unhelpful_render::{render, SIGN_OFF};
//!
//! let record = AnswerGenerator::new().generate_answer("why is my code broken");
//! let text = render("why is my code broken", &record);
//!
//! assert!(text.starts_with("\nQuestion: why is my code broken\n\n"));
//! assert!(text.ends_with(&format!("{SIGN_OFF}\n")));
//! ```

use unhelpful::AnswerRecord;

/// Text shown when asking for a question interactively.
pub const PROMPT: &str = "What's your programming problem? ";

/// Width of the `=` rules above and below the answer.
pub const SEPARATOR_WIDTH: usize = 50;

pub const SIGN_OFF: &str = "Good luck with that! 🎯";

pub const UPVOTE_GLYPH: &str = "▲";
pub const ACCEPTED_LINE: &str = "✓ Accepted Answer (probably wrong)";
pub const COMMENT_BULLET: &str = "•";

/// Render `record` as the answer to `question`.
///
/// Every line, including the last, ends with `\n`.
pub fn render(question: &str, record: &AnswerRecord) -> String {
    let rule = separator();
    let mut out = String::new();

    out.push_str(&format!("\nQuestion: {}\n\n", question));
    out.push_str(&rule);
    out.push('\n');

    out.push_str(&format!("Answer ({}):\n\n", record.posted_at()));
    out.push_str(&record.text);
    out.push('\n');
    out.push_str(&format!("\n{} {} votes\n", UPVOTE_GLYPH, record.upvotes));
    if record.accepted {
        out.push_str(ACCEPTED_LINE);
        out.push('\n');
    }

    if !record.comments.is_empty() {
        out.push_str("\nComments:\n");
        for comment in &record.comments {
            out.push_str(&format!("{} {}\n", COMMENT_BULLET, comment));
        }
    }

    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    out.push_str(SIGN_OFF);
    out.push('\n');
    out
}

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}
