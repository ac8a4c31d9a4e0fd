use crate::common::command::{compare_command, submissions_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn policy_file_overrides_mode(submissions_dir: TempDir) {
    write_file(FileSpec::new(
        submissions_dir.path().join("policy.toml"),
        "ignore_comments = true\nignore_variable_names = true\n".to_string(),
    ));

    compare_command(
        submissions_dir.path(),
        &["--mode", "strict", "--policy", "policy.toml", "--summary"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("6 structural"));
}

#[rstest]
fn flags_switch_toggles_on_top_of_mode(submissions_dir: TempDir) {
    compare_command(
        submissions_dir.path(),
        &["--mode", "custom", "--ignore-variable-names", "--summary"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains("6 structural"));
}

#[rstest]
fn malformed_policy_file_is_rejected(submissions_dir: TempDir) {
    write_file(FileSpec::new(
        submissions_dir.path().join("policy.toml"),
        "ignore_comments = 3\n".to_string(),
    ));

    compare_command(submissions_dir.path(), &["--policy", "policy.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse policy file"));
}
