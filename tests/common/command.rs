use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const SUBMISSION_A: &str = "submission_a.c";
pub const SUBMISSION_B: &str = "submission_b.c";
pub const TEMPLATE: &str = "template.c";

pub fn run_codediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("codediff").expect("Failed to find codediff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn compare_command(dir: &Path, extra_args: &[&str]) -> Command {
    let mut args = vec!["compare", SUBMISSION_A, SUBMISSION_B];
    args.extend_from_slice(extra_args);
    run_codediff_command(dir, &args)
}

#[fixture]
pub fn template() -> String {
    r#"#include <stdio.h>

int main() {
    return 0;
}
"#
    .to_string()
}

#[fixture]
pub fn submission_a() -> String {
    r#"#include <stdio.h>

// sums the first n numbers
int sum_to_n(int n){
    int total = 0;
    for (int i = 1; i <= n; i++) {
        total += i;
    }
    return total;
}

int main() {
    printf("%d\n", sum_to_n(10));
    return 0;
}
"#
    .to_string()
}

pub fn submission_b_with_names(function: &str, limit: &str, acc: &str, counter: &str) -> String {
    format!(
        r#"#include <stdio.h>

// adds everything up
int {function}(int {limit}){{
    int {acc} = 0;
    for (int {counter} = 1; {counter} <= {limit}; {counter}++) {{
        {acc} += {counter};
    }}
    return {acc};
}}

int main() {{
    printf("%d\n", {function}(10));
    return 0;
}}
"#
    )
}

#[fixture]
pub fn submission_b() -> String {
    submission_b_with_names("sum", "limit", "acc", "k")
}

#[fixture]
pub fn submissions_dir(submission_a: String, submission_b: String, template: String) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    write_file(FileSpec::new(dir.path().join(SUBMISSION_A), submission_a));
    write_file(FileSpec::new(dir.path().join(SUBMISSION_B), submission_b));
    write_file(FileSpec::new(dir.path().join(TEMPLATE), template));

    dir
}
