use crate::common::command::{compare_command, submissions_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn invalid_filter_is_rejected(submissions_dir: TempDir) {
    compare_command(submissions_dir.path(), &["--filter", "EQ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid row filter 'EQ'"));
}
