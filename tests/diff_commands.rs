use crate::common::command::{
    learner_blob, run_stepdiff_command, sample_blob, stdout_of, workspace_dir,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::{PredicateBooleanExt, predicate};
use rstest::rstest;

mod common;

fn write_pair(dir: &TempDir, before: (&str, &str), after: (&str, &str)) {
    write_file(FileSpec::new(dir.path().join(before.0), before.1.to_string()));
    write_file(FileSpec::new(dir.path().join(after.0), after.1.to_string()));
}

#[rstest]
fn show_changed_lines_between_two_files(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(
        &workspace_dir,
        ("before.js", "let a = 1;\nlet b = 2;\n"),
        ("after.js", "let a = 1;\nlet b = 3;\n"),
    );

    let expected_output =
        "--- a/before.js\n+++ b/after.js\n let a = 1;\n-let b = 2;\n+let b = 3;\n \n".to_string();
    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["diff", "before.js", "after.js"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
#[case("let a = 1;\n", "let a = 1;\n")]
#[case("", "")]
#[case("a\r\nb", "a\nb")]
fn show_no_differences_sentinel(
    workspace_dir: TempDir,
    #[case] before: &str,
    #[case] after: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, ("a.js", before), ("b.js", after));

    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["diff", "a.js", "b.js"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, "--- a/a.js\n+++ b/b.js\n (no differences)\n");

    Ok(())
}

#[rstest]
fn render_rows_as_escaped_html(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, ("a.html", "<b>"), ("b.html", "<i>"));

    let expected_output = concat!(
        "--- a/a.html\n+++ b/b.html\n",
        r#"<div class="diffLine diffDel"><span class="diffSign">-</span><span>&lt;b&gt;</span></div>"#,
        r#"<div class="diffLine diffAdd"><span class="diffSign">+</span><span>&lt;i&gt;</span></div>"#,
        "\n"
    );
    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["diff", "a.html", "b.html", "--format", "html"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn skip_diffs_over_the_line_limit(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(&workspace_dir, ("a.js", "a\nb"), ("b.js", "c\nd"));

    run_stepdiff_command(workspace_dir.path(), &["diff", "a.js", "b.js", "--max-lines", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(diff skipped: 4 lines exceed the limit of 3)",
        ));

    run_stepdiff_command(workspace_dir.path(), &["diff", "a.js", "b.js"])
        .env("STEPDIFF_MAX_LINES", "4")
        .assert()
        .success()
        .stdout(predicate::str::contains("-a\n-b\n+c\n+d\n"));

    Ok(())
}

#[rstest]
#[case("enemies.js")]
#[case("./enemies.js")]
fn compare_one_file_of_combined_blobs(
    workspace_dir: TempDir,
    sample_blob: String,
    learner_blob: String,
    #[case] file: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(
        &workspace_dir,
        ("sample.js", &sample_blob),
        ("learner.js", &learner_blob),
    );

    let expected_output = "--- a/sample.js (enemies.js)\n+++ b/learner.js (enemies.js)\n-spawn(3);\n+spawn(5);\n+move();\n \n \n"
        .to_string();
    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["diff", "sample.js", "learner.js", "--file", file],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn compare_default_file_when_a_manifest_is_given(
    workspace_dir: TempDir,
    sample_blob: String,
    learner_blob: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_pair(
        &workspace_dir,
        ("sample.js", &sample_blob),
        ("learner.js", &learner_blob),
    );

    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["diff", "sample.js", "learner.js", "--manifest", "main.js, enemies.js"],
    ))?;

    pretty_assertions::assert_eq!(
        actual_output,
        "--- a/sample.js (main.js)\n+++ b/learner.js (main.js)\n (no differences)\n"
    );

    Ok(())
}

#[rstest]
#[case(&["--file", "typo.js"])]
#[case(&["--file", "typo.js", "--manifest", "main.js"])]
fn fail_on_unknown_file(
    workspace_dir: TempDir,
    sample_blob: String,
    learner_blob: String,
    #[case] flags: &[&str],
) {
    write_pair(
        &workspace_dir,
        ("sample.js", &sample_blob),
        ("learner.js", &learner_blob),
    );

    let args = [&["diff", "sample.js", "learner.js"][..], flags].concat();
    run_stepdiff_command(workspace_dir.path(), &args)
        .assert()
        .failure()
        .stdout(predicate::str::contains("no differences").not())
        .stderr(predicate::str::contains(
            "no file named typo.js; available: main.js, enemies.js",
        ));
}

#[rstest]
fn report_the_package_version(workspace_dir: TempDir) {
    run_stepdiff_command(workspace_dir.path(), &["--version"])
        .assert()
        .success()
        .stdout(format!("stepdiff {}\n", env!("CARGO_PKG_VERSION")));

    run_stepdiff_command(workspace_dir.path(), &["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[rstest]
fn fail_on_missing_input(workspace_dir: TempDir) {
    run_stepdiff_command(workspace_dir.path(), &["diff", "nope.js", "nope.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read nope.js"));
}
