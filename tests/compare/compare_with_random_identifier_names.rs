use crate::common::command::{SUBMISSION_B, compare_command, submission_b_with_names, submissions_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use predicates::prelude::predicate;
use rstest::rstest;

fn random_name(suffix: &str) -> String {
    format!("v_{}_{}", Word().fake::<String>(), suffix)
}

#[rstest]
fn compare_with_random_identifier_names(submissions_dir: TempDir) {
    let renamed = submission_b_with_names(
        &random_name("fn"),
        &random_name("lim"),
        &random_name("acc"),
        &random_name("ctr"),
    );
    write_file(FileSpec::new(submissions_dir.path().join(SUBMISSION_B), renamed));

    compare_command(submissions_dir.path(), &["--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "15 rows: 8 exact, 6 structural, 0 left only, 0 right only, 1 mismatch",
        ));
}
