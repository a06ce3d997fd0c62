use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{TempDir, tempdir};

use namesmith::cli::{build_command, get_action, get_run_options};
use namesmith::workflow::Action;

// Writes a configuration that keeps presets inside the temporary directory
fn write_config(dir: &TempDir) -> PathBuf {
    let config_path = dir.path().join("config.yaml");
    let presets_path = dir.path().join("presets.yaml");
    fs::write(
        &config_path,
        format!(
            "presets_file: \"{}\"\nproject: feature\nuser: kieran\n",
            presets_path.display()
        ),
    )
    .unwrap();
    config_path
}

fn namesmith(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("namesmith").unwrap();
    cmd.arg("--config").arg(config).arg("--log-file").arg("");
    cmd
}

#[test]
fn test_rename_options_are_parsed() {
    let matches = build_command().get_matches_from([
        "namesmith",
        "-f",
        "v1",
        "-r",
        "v2",
        "--any-sequence",
        "-n",
        "a.exr",
        "b.exr",
    ]);

    let options = get_run_options(&matches);

    assert_eq!(get_action(&matches), Action::Rename);
    assert_eq!(options.find.as_deref(), Some("v1"));
    assert_eq!(options.replace.as_deref(), Some("v2"));
    assert!(options.any_sequence);
    assert!(options.dry_run);
    assert_eq!(options.paths, vec![PathBuf::from("a.exr"), PathBuf::from("b.exr")]);
}

#[test]
fn test_preset_subcommands_are_parsed() {
    let matches = build_command().get_matches_from([
        "namesmith", "presets", "save", "Version Up", "-f", "v1", "-r", "v2",
    ]);
    assert_eq!(
        get_action(&matches),
        Action::SavePreset {
            name: "Version Up".to_string(),
            find: "v1".to_string(),
            replace: "v2".to_string(),
        }
    );

    let matches = build_command().get_matches_from(["namesmith", "presets", "delete", "Old"]);
    assert_eq!(
        get_action(&matches),
        Action::DeletePreset {
            name: "Old".to_string()
        }
    );
}

#[test]
fn test_global_options_after_subcommand() {
    let matches =
        build_command().get_matches_from(["namesmith", "tokens", "--timeline", "a.exr"]);

    let options = get_run_options(&matches);

    assert_eq!(get_action(&matches), Action::ListTokens);
    assert!(options.timeline);
    assert_eq!(options.paths, vec![PathBuf::from("a.exr")]);
}

#[test]
fn test_rename_files_with_yes() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);
    let shot_a = dir.path().join("shotA_v1.exr");
    let shot_b = dir.path().join("shotB_v1.exr");
    fs::write(&shot_a, "a").unwrap();
    fs::write(&shot_b, "b").unwrap();

    namesmith(&config)
        .args(["-f", "v1", "-r", "v2", "--yes"])
        .arg(&shot_a)
        .arg(&shot_b)
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed shotA_v1.exr to shotA_v2.exr"));

    assert!(dir.path().join("shotA_v2.exr").is_file());
    assert!(dir.path().join("shotB_v2.exr").is_file());
    assert!(!shot_a.exists());
}

#[test]
fn test_dry_run_leaves_files_alone() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);
    let shot = dir.path().join("shot_v1.exr");
    fs::write(&shot, "").unwrap();

    namesmith(&config)
        .args(["-f", "v1", "-r", "v2", "--dry", "--yes"])
        .arg(&shot)
        .assert()
        .success()
        .stdout(predicate::str::contains("shot_v2.exr"))
        .stdout(predicate::str::contains("Run without --dry flag"));

    assert!(shot.exists());
}

#[test]
fn test_manifest_items_are_renamed_and_saved() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);
    let manifest = dir.path().join("timeline.yaml");
    fs::write(
        &manifest,
        "items:\n  - name: comp_v1\n    kind: segment\n    context: sh010\n  - name: wipe\n    kind: transition\n",
    )
    .unwrap();

    namesmith(&config)
        .args(["--timeline", "--yes", "-f", "comp", "-r", "<shot name>", "--manifest"])
        .arg(&manifest)
        .assert()
        .success();

    let content = fs::read_to_string(&manifest).unwrap();
    assert!(content.contains("name: sh010_v1"));
    assert!(content.contains("name: wipe"));
}

#[test]
fn test_segments_need_the_timeline() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);
    let manifest = dir.path().join("timeline.yaml");
    fs::write(&manifest, "items:\n  - name: comp_v1\n    kind: segment\n").unwrap();

    namesmith(&config)
        .args(["--yes", "-f", "comp", "-r", "x", "--manifest"])
        .arg(&manifest)
        .assert()
        .failure();
}

#[test]
fn test_save_and_list_presets() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);

    namesmith(&config)
        .args(["presets", "save", "Version Up", "-f", "v1", "-r", "v2"])
        .assert()
        .success();

    namesmith(&config)
        .args(["presets", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version Up"))
        .stdout(predicate::str::contains("find 'v1' replace 'v2'"));

    assert!(dir.path().join("presets.yaml").is_file());
}

#[test]
fn test_preset_drives_a_rename() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);
    let shot = dir.path().join("shot_v1.exr");
    fs::write(&shot, "").unwrap();

    namesmith(&config)
        .args(["presets", "save", "Version Up", "-f", "v1", "-r", "v2"])
        .assert()
        .success();

    namesmith(&config)
        .args(["--preset", "Version Up", "--yes"])
        .arg(&shot)
        .assert()
        .success();

    assert!(dir.path().join("shot_v2.exr").is_file());
}

#[test]
fn test_unknown_preset_fails() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);
    let shot = dir.path().join("shot_v1.exr");
    fs::write(&shot, "").unwrap();

    namesmith(&config)
        .args(["--preset", "Missing", "--yes"])
        .arg(&shot)
        .assert()
        .failure();

    assert!(shot.exists());
}

#[test]
fn test_tokens_lists_placeholders_and_wildcards() {
    let dir = tempdir().unwrap();
    let config = write_config(&dir);
    let shot = dir.path().join("shot_v1.exr");
    fs::write(&shot, "").unwrap();

    namesmith(&config)
        .arg("tokens")
        .arg(&shot)
        .assert()
        .success()
        .stdout(predicate::str::contains("<YYYY>"))
        .stdout(predicate::str::contains("<colour space>"))
        .stdout(predicate::str::contains("Match All"));
}
