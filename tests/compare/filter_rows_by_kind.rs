use crate::common::command::{compare_command, submissions_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn filter_rows_by_kind(submissions_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let output = compare_command(submissions_dir.path(), &["--filter", "M"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = "!    3 // sums the first n numbers |    3 // adds everything up\n";
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}
