mod cmd_ask;

use anyhow::Result;
use tracing::Level;

/// Every argument after the program name is a question word; nothing is
/// parsed as an option, so `--help me` is a question like any other.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    cmd_ask::run(question_words(std::env::args_os().skip(1)))
}

/// Arguments as UTF-8 words; invalid sequences are replaced rather than
/// rejected.
fn question_words<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = std::ffi::OsString>,
{
    args.into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
