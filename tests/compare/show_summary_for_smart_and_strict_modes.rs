use crate::common::command::{TEMPLATE, compare_command, submissions_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::smart("smart", "15 rows: 8 exact, 6 structural, 0 left only, 0 right only, 1 mismatch")]
#[case::balanced("balanced", "15 rows: 8 exact, 0 structural, 0 left only, 0 right only, 7 mismatch")]
#[case::strict("strict", "15 rows: 8 exact, 0 structural, 0 left only, 0 right only, 7 mismatch")]
fn show_summary_for_smart_and_strict_modes(
    submissions_dir: TempDir,
    #[case] mode: &str,
    #[case] expected: &str,
) {
    compare_command(
        submissions_dir.path(),
        &["--mode", mode, "--template", TEMPLATE, "--summary"],
    )
    .assert()
    .success()
    .stdout(predicate::str::contains(expected))
    .stdout(predicate::str::contains("6 template rows"));
}
