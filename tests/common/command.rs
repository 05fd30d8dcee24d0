use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn sample_blob() -> String {
    "// --- file: main.js ---\nconst game = start();\nloop(game);\n\n// --- file: enemies.js ---\nspawn(3);\n"
        .to_string()
}

#[fixture]
pub fn learner_blob() -> String {
    "// --- file: main.js ---\nconst game = start();\nloop(game);\n\n// --- file: enemies.js ---\nspawn(5);\nmove();\n"
        .to_string()
}

pub fn run_stepdiff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("stepdiff").expect("Failed to find stepdiff binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("STEPDIFF_MAX_LINES");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let assert = cmd.assert().success();
    Ok(String::from_utf8(assert.get_output().stdout.clone())?)
}
