use crate::common::command::{SUBMISSION_A, SUBMISSION_B, run_codediff_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn show_left_only_row_for_extra_trailing_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    write_file(FileSpec::new(
        dir.path().join(SUBMISSION_A),
        "int a;\nint b;\nreturn a;\n".to_string(),
    ));
    write_file(FileSpec::new(
        dir.path().join(SUBMISSION_B),
        "int a;\nint b;\n".to_string(),
    ));

    let output = run_codediff_command(dir.path(), &["compare", SUBMISSION_A, SUBMISSION_B])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let expected = concat!(
        "=    1 int a;    |    1 int a;\n",
        "=    2 int b;    |    2 int b;\n",
        "<    3 return a; |\n",
    );
    pretty_assertions::assert_eq!(stdout, expected);

    Ok(())
}
