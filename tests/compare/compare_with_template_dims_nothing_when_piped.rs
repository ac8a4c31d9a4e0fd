use crate::common::command::{TEMPLATE, compare_command, submissions_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn compare_with_template_dims_nothing_when_piped(
    submissions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = compare_command(submissions_dir.path(), &["--template", TEMPLATE])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    assert!(!stdout.contains('\u{1b}'), "piped output must not carry escape codes");
    assert_eq!(stdout.lines().count(), 15);
    assert!(stdout.lines().next().is_some_and(|line| line.starts_with("=    1 #include <stdio.h>")));

    Ok(())
}
