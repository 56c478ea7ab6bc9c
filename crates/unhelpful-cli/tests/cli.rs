use assert_cmd::Command;
use predicates::prelude::*;

const RULE: &str = "==================================================";

fn unhelpful() -> Command {
    Command::cargo_bin("unhelpful").unwrap()
}

#[test]
fn answers_question_from_arguments() {
    unhelpful()
        .args(["why", "is", "my", "code", "broken"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\nQuestion: why is my code broken\n\n",
        ))
        .stdout(predicate::str::contains(format!("{RULE}\nAnswer (")))
        .stdout(predicate::str::contains(" votes\n"))
        .stdout(predicate::str::ends_with(format!(
            "\n{RULE}\nGood luck with that! 🎯\n"
        )));
}

#[test]
fn flag_lookalikes_are_question_words() {
    for (args, question) in [
        (vec!["--seed", "is", "broken"], "--seed is broken"),
        (vec!["--help", "me"], "--help me"),
        (vec!["--pretty", "q"], "--pretty q"),
        (vec!["-v", "why"], "-v why"),
        (vec!["--version"], "--version"),
        (vec!["--", "x"], "-- x"),
    ] {
        unhelpful()
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(format!(
                "\nQuestion: {question}\n\n"
            )))
            .stdout(predicate::str::contains("Good luck with that! 🎯"));
    }
}

#[test]
fn hyphenated_words_belong_to_question() {
    unhelpful()
        .args(["why", "does", "-O3", "break", "it"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "\nQuestion: why does -O3 break it\n\n",
        ));
}

#[test]
fn prompts_when_no_arguments() {
    unhelpful()
        .write_stdin("segfault in hello world\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "What's your programming problem? \nQuestion: segfault in hello world\n\n",
        ));
}

#[test]
fn empty_line_is_empty_question() {
    unhelpful()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nQuestion: \n\n"))
        .stdout(predicate::str::contains("Good luck with that! 🎯"));
}

#[test]
fn closed_stdin_still_succeeds() {
    unhelpful()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("\nQuestion: \n\n"));
}

#[test]
fn stderr_stays_quiet() {
    unhelpful()
        .arg("q")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
