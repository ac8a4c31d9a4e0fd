use crate::common::command::run_codediff_command;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn missing_submission_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    run_codediff_command(dir.path(), &["compare", "missing_a.c", "missing_b.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read missing_a.c"));

    Ok(())
}
