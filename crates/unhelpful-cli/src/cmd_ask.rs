use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::io::{self, BufRead, Write};
use tracing::info;
use unhelpful::{AnswerGenerator, Draws};
use unhelpful_render::PROMPT;

pub fn run(words: Vec<String>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    ask(
        words,
        &mut stdin.lock(),
        &mut stdout,
        &mut rand::rng(),
        Local::now(),
    )
}

/// Answer the question made of `words`, or the one read from `input` when
/// there are no words, and write the thread to `output`.
fn ask<R, W, D>(
    words: Vec<String>,
    input: &mut R,
    output: &mut W,
    draws: &mut D,
    now: DateTime<Local>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    D: Draws + ?Sized,
{
    let question = if words.is_empty() {
        prompt(input, output)?
    } else {
        words.join(" ")
    };

    let record = AnswerGenerator::new().generate_with(&question, draws, now);
    let thread = unhelpful_render::render(&question, &record);

    output
        .write_all(thread.as_bytes())
        .and_then(|_| output.flush())
        .context("Failed to write answer to stdout")
}

/// Ask for a question on `output` and read one line from `input`.
///
/// Only the line terminator is stripped. End of input counts as an empty
/// question.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    output
        .write_all(PROMPT.as_bytes())
        .and_then(|_| output.flush())
        .context("Failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read question from stdin")?;
    if read == 0 {
        info!("no question on stdin, answering the empty question");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
