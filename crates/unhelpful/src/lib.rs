//! Confidently unhelpful answers to programming questions.
//!
//! An [`AnswerGenerator`] picks a stock non-answer, maybe tacks on an
//! outdated-version warning and an unrelated code block, then invents the
//! votes, acceptance, age and comments that make it look like it has been
//! sitting at the top of a Q&A thread for years.
//!
//! # Example
//!
//! ```
//! use unhelpful::{AnswerGenerator, tables::ANSWERS};
//!
//! let generator = AnswerGenerator::new();
//! let record = generator.generate_answer("why is my code broken");
//!
//! assert!(ANSWERS.iter().any(|a| record.text.starts_with(a)));
//! assert!((-5..=5000).contains(&record.upvotes));
//! assert!(record.comments.len() <= 3);
//! ```
//!
//! Pass a seeded RNG to [`AnswerGenerator::generate_with`] for repeatable
//! output:
//!
//! ```
//! use chrono::Local;
//! use rand::{SeedableRng, rngs::StdRng};
//! use unhelpful::AnswerGenerator;
//!
//! let generator = AnswerGenerator::new();
//! let now = Local::now();
//! let a = generator.generate_with("q", &mut StdRng::seed_from_u64(42), now);
//! let b = generator.generate_with("q", &mut StdRng::seed_from_u64(42), now);
//! assert_eq!(a, b);
//! ```

pub mod draws;
pub mod generator;
pub mod tables;
pub mod types;

pub use draws::Draws;
pub use generator::{AnswerGenerator, attracts_upvotes};
pub use types::{AnswerRecord, POSTED_AT_FORMAT};
