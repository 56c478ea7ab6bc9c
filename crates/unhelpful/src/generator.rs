use chrono::{DateTime, Local, TimeDelta};
use tracing::debug;

use crate::draws::Draws;
use crate::tables::{
    ACCEPTANCE, ANSWERS, BIASED_UPVOTES, CODE_SNIPPET, CODE_SNIPPET_CHANCE, COMMENTS,
    DAYS_PER_YEAR, JQUERY, MAX_COMMENTS, UPVOTES, VERSION_MAJOR, VERSION_MINOR,
    VERSION_NOTE_CHANCE, VERSION_NOTE_PREFIX, WRONG, YEARS_AGO,
};
use crate::types::AnswerRecord;

/// Produces [`AnswerRecord`]s from the fixed answer and comment tables.
///
/// The tables are `'static` constants; generating an answer never mutates
/// the generator, so one instance can be reused for any number of calls.
#[derive(Debug, Clone, Copy)]
pub struct AnswerGenerator {
    answers: &'static [&'static str],
    comments: &'static [&'static str],
}

impl Default for AnswerGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerGenerator {
    pub fn new() -> Self {
        Self {
            answers: &ANSWERS,
            comments: &COMMENTS,
        }
    }

    /// Candidate base answers, in table order.
    pub fn answers(&self) -> &'static [&'static str] {
        self.answers
    }

    /// Candidate comments, in table order.
    pub fn comments(&self) -> &'static [&'static str] {
        self.comments
    }

    /// Generate an answer using the thread RNG and the current local time.
    ///
    /// The question is accepted as-is and never inspected; any string,
    /// including an empty one, produces a complete record.
    pub fn generate_answer(&self, question: &str) -> AnswerRecord {
        self.generate_with(question, &mut rand::rng(), Local::now())
    }

    /// Generate an answer from an explicit random source and clock.
    ///
    /// Draws are taken in a fixed order: base answer, version note (and its
    /// major/minor digits), code snippet, upvotes (and the biased resample),
    /// acceptance, age in years, comment count, comment picks.
    ///
    /// The timestamp is exactly `years * 365` days of elapsed time before
    /// `now`. Across a DST change its local clock reading may differ from
    /// `now`'s by the offset shift.
    pub fn generate_with<D: Draws + ?Sized>(
        &self,
        _question: &str,
        draws: &mut D,
        now: DateTime<Local>,
    ) -> AnswerRecord {
        let base = draws.index(self.answers.len());
        let mut text = self.answers[base].to_string();

        let version_note = draws.chance(VERSION_NOTE_CHANCE);
        if version_note {
            let major = draws.between(VERSION_MAJOR.0, VERSION_MAJOR.1);
            let minor = draws.between(VERSION_MINOR.0, VERSION_MINOR.1);
            text.push_str(&format!("{}{}.{}", VERSION_NOTE_PREFIX, major, minor));
        }

        let code_snippet = draws.chance(CODE_SNIPPET_CHANCE);
        if code_snippet {
            text.push_str(CODE_SNIPPET);
        }

        // The ordinary draw is always taken, even when it gets replaced.
        let mut upvotes = draws.between(UPVOTES.0, UPVOTES.1);
        let biased = attracts_upvotes(&text);
        if biased {
            upvotes = draws.between(BIASED_UPVOTES.0, BIASED_UPVOTES.1);
        }

        let accepted = ACCEPTANCE[draws.index(ACCEPTANCE.len())];

        let years_ago = draws.between(YEARS_AGO.0, YEARS_AGO.1);
        let timestamp = now - TimeDelta::days(DAYS_PER_YEAR * years_ago);

        let count = draws.between(0, MAX_COMMENTS) as usize;
        let comments: Vec<String> = draws
            .distinct(self.comments.len(), count)
            .into_iter()
            .map(|i| self.comments[i].to_string())
            .collect();

        debug!(
            base,
            version_note,
            code_snippet,
            biased,
            upvotes,
            accepted,
            years_ago,
            comments = comments.len(),
            "generated answer"
        );

        AnswerRecord {
            text,
            upvotes,
            accepted,
            timestamp,
            comments,
        }
    }
}

/// Whether `text` earns the inflated vote range: it mentions "wrong" in any
/// case, or "jQuery" spelled exactly.
pub fn attracts_upvotes(text: &str) -> bool {
    text.to_lowercase().contains(WRONG) || text.contains(JQUERY)
}
