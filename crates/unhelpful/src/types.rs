use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format used for the "posted" line, e.g. `Mar 04 '19 at 09:15`.
pub const POSTED_AT_FORMAT: &str = "%b %d '%y at %H:%M";

/// One generated answer.
///
/// Nothing here is tied to the question that produced it; the question is
/// only echoed back by whoever renders the record.
///
/// # JSON shape
///
/// ```json
/// {
///   "text": "Just use jQuery.",
///   "upvotes": 2741,
///   "accepted": false,
///   "timestamp": "2019-03-04T09:15:00+01:00",
///   "comments": ["Why would anyone use this?"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Base answer plus any appended embellishments.
    pub text: String,
    /// Between -5 and 5000 inclusive.
    pub upvotes: i64,
    pub accepted: bool,
    /// Simulated posting date, whole 365-day years in the past.
    pub timestamp: DateTime<Local>,
    /// Zero to three distinct comments, in the order they were drawn.
    pub comments: Vec<String>,
}

impl AnswerRecord {
    /// The posting date as shown next to the answer header.
    pub fn posted_at(&self) -> String {
        self.timestamp.format(POSTED_AT_FORMAT).to_string()
    }
}
