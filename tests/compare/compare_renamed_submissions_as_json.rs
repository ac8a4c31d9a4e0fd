use crate::common::command::{compare_command, submissions_dir};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn compare_renamed_submissions_as_json(
    submissions_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = compare_command(submissions_dir.path(), &["--format", "json"])
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;
    let rows: serde_json::Value = serde_json::from_str(&stdout)?;
    let rows = rows.as_array().ok_or("expected a JSON array")?;

    assert_eq!(rows.len(), 15);

    let signature = &rows[3];
    assert_eq!(signature["kind"], "Structural");
    assert_eq!(signature["left"]["text"], "int sum_to_n(int n){");
    assert_eq!(signature["right"]["text"], "int sum(int limit){");
    assert_eq!(signature["left"]["lineNumber"], 4);
    assert_eq!(signature["left"]["tokens"][1]["kind"], "Removed");
    assert_eq!(signature["left"]["tokens"][1]["value"], "sum_to_n");
    assert_eq!(signature["right"]["tokens"][1]["kind"], "Added");
    assert_eq!(signature["right"]["tokens"][1]["value"], "sum");

    // comment lines are elided and never match each other
    assert_eq!(rows[2]["kind"], "Mismatch");
    assert_eq!(rows[0]["kind"], "Exact");
    assert_eq!(rows[0]["left"]["isTemplate"], false);

    Ok(())
}
