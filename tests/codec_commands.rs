use crate::common::command::{run_stepdiff_command, sample_blob, stdout_of, workspace_dir};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn list_files_of_a_combined_blob(
    workspace_dir: TempDir,
    sample_blob: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("step3.js"), sample_blob));

    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["split", "step3.js", "--manifest", "main.js,enemies.js,boss.js"],
    ))?;

    pretty_assertions::assert_eq!(
        actual_output,
        "* main.js (3 lines)\n* enemies.js (2 lines)\n* boss.js (0 lines)\n"
    );

    Ok(())
}

#[rstest]
fn write_split_files_into_a_directory(
    workspace_dir: TempDir,
    sample_blob: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(workspace_dir.path().join("step3.js"), sample_blob));

    run_stepdiff_command(workspace_dir.path(), &["split", "step3.js", "--out", "files"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote files"));

    let files = workspace_dir.path().join("files");
    pretty_assertions::assert_eq!(
        read_file(&files.join("main.js")),
        "const game = start();\nloop(game);\n\n"
    );
    pretty_assertions::assert_eq!(read_file(&files.join("enemies.js")), "spawn(3);\n\n");

    Ok(())
}

#[rstest]
fn refuse_to_write_outside_the_output_directory(workspace_dir: TempDir) {
    write_file(FileSpec::new(
        workspace_dir.path().join("evil.js"),
        "// --- file: ../escape.js ---\nboom();\n".to_string(),
    ));

    run_stepdiff_command(workspace_dir.path(), &["split", "evil.js", "--out", "files"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to write ../escape.js"));

    assert!(!workspace_dir.path().join("escape.js").exists());
}

#[rstest]
fn assemble_files_in_manifest_order(workspace_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path().join("step5");
    write_file(FileSpec::new(dir.join("main.js"), "start();\n\n\n".to_string()));
    write_file(FileSpec::new(dir.join("enemies.js"), "spawn();".to_string()));

    let expected_output = "// --- file: main.js ---\nstart();\n\n// --- file: enemies.js ---\nspawn();\n\n// --- file: boss.js ---\n\n"
        .to_string();
    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["assemble", "step5", "--manifest", "main.js,enemies.js,boss.js"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, expected_output);

    Ok(())
}

#[rstest]
fn assemble_with_the_directory_manifest(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir.path().join("step6");
    write_file(FileSpec::new(
        dir.join("manifest.json"),
        r#"{"js": ["input.js", "main.js"]}"#.to_string(),
    ));
    write_file(FileSpec::new(dir.join("input.js"), "listen();".to_string()));
    write_file(FileSpec::new(dir.join("main.js"), "loop();".to_string()));

    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["assemble", "step6"],
    ))?;

    pretty_assertions::assert_eq!(
        actual_output,
        "// --- file: input.js ---\nlisten();\n\n// --- file: main.js ---\nloop();\n"
    );

    Ok(())
}

#[rstest]
fn split_then_assemble_restores_the_blob(
    workspace_dir: TempDir,
    sample_blob: String,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        workspace_dir.path().join("step3.js"),
        sample_blob.clone(),
    ));
    write_file(FileSpec::new(
        workspace_dir.path().join("manifest.json"),
        r#"{"js": ["main.js", "enemies.js"]}"#.to_string(),
    ));

    run_stepdiff_command(
        workspace_dir.path(),
        &["split", "step3.js", "--manifest-file", "manifest.json", "--out", "files"],
    )
    .assert()
    .success();

    let actual_output = stdout_of(&mut run_stepdiff_command(
        workspace_dir.path(),
        &["assemble", "files", "--manifest-file", "manifest.json"],
    ))?;

    pretty_assertions::assert_eq!(actual_output, sample_blob);

    Ok(())
}

#[rstest]
fn reject_both_manifest_flags(workspace_dir: TempDir) {
    run_stepdiff_command(
        workspace_dir.path(),
        &["assemble", ".", "--manifest", "main.js", "--manifest-file", "manifest.json"],
    )
    .assert()
    .failure();
}
