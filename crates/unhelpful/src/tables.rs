//! Fixed content tables and the knobs that drive answer generation.

/// Every base answer the generator can pick from.
pub const ANSWERS: [&str; 10] = [
    "This question is a duplicate of a question from 2008.",
    "Just use jQuery.",
    "Have you tried turning it off and on again?",
    "Works on my machine ¯\\_(ツ)_/¯",
    "You're doing it wrong. Use this 500-line framework instead.",
    "The real problem is that you're using Python 3.",
    "This is trivial in Haskell.",
    "\"It depends\" (proceeds to not explain on what)",
    "RTFM - it's clearly documented in the 1998 spec.",
    "Just use async/await (for your synchronous problem)",
];

/// Every comment that can show up under an answer.
pub const COMMENTS: [&str; 5] = [
    "-1 This doesn't answer the question",
    "Accepted answer is wrong but has 10k upvotes",
    "\"This is the way\" (from someone with 200k rep)",
    "Why would anyone use this?",
    "\"First post!\" (on a 9-year-old question)",
];

/// Start of the outdated-version warning; `major.minor` follows it.
pub const VERSION_NOTE_PREFIX: &str = "\n\nNote: This only works in Python ";

/// Code block appended verbatim when the snippet embellishment fires.
pub const CODE_SNIPPET: &str = "\n\n```python\n# Here's some unrelated code\ndef solve_nothing():\n    return 'not your answer'\n```";

pub const VERSION_NOTE_CHANCE: f64 = 0.3;
pub const CODE_SNIPPET_CHANCE: f64 = 0.4;

/// Inclusive bounds for the version quoted in the note.
pub const VERSION_MAJOR: (i64, i64) = (1, 2);
pub const VERSION_MINOR: (i64, i64) = (0, 7);

/// Inclusive bounds for an ordinary answer's votes.
pub const UPVOTES: (i64, i64) = (-5, 1000);
/// Inclusive bounds once the text attracts upvotes.
pub const BIASED_UPVOTES: (i64, i64) = (500, 5000);

/// Words that make an answer popular. `WRONG` is matched case-insensitively,
/// `JQUERY` exactly.
pub const WRONG: &str = "wrong";
pub const JQUERY: &str = "jQuery";

/// Picked from uniformly, so one answer in three is accepted.
pub const ACCEPTANCE: [bool; 3] = [true, false, false];

pub const YEARS_AGO: (i64, i64) = (1, 12);
/// Years are exactly this long; leap days are ignored.
pub const DAYS_PER_YEAR: i64 = 365;

pub const MAX_COMMENTS: i64 = 3;
