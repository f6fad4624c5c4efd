//! Integration tests for `hccd init`

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use hccd_testkit::temp_dir_in_workspace;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn test_init_then_generate() {
    let temp = temp_dir_in_workspace();
    let dir = temp.path().join("deck");

    Command::new(cargo_bin!("hccd"))
        .arg("init")
        .arg(&dir)
        .args(["--name", "monsters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("monsters.html"))
        .stdout(predicate::str::contains("hccd.toml"));

    for file in ["monsters.html", "monsters.css", "monsters.csv", "hccd.toml"] {
        assert!(dir.join(file).is_file(), "{} missing", file);
    }

    Command::new(cargo_bin!("hccd"))
        .arg("generate")
        .arg(dir.join("monsters.html"))
        .assert()
        .success();

    let html = fs::read_to_string(dir.join("monsters-GENERATED.html")).unwrap();
    assert!(html.contains("href=\"monsters.css\""));
    assert!(html.contains("Goblin"));
    assert!(!html.contains("[NOT FOUND]"));
}

#[test]
fn test_init_refuses_overwrite() {
    let temp = temp_dir_in_workspace();
    fs::write(temp.path().join("cards.csv"), "name\nmine\n").unwrap();

    Command::new(cargo_bin!("hccd"))
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(
        fs::read_to_string(temp.path().join("cards.csv")).unwrap(),
        "name\nmine\n"
    );
}

#[test]
fn test_init_rejects_path_name() {
    let temp = temp_dir_in_workspace();

    Command::new(cargo_bin!("hccd"))
        .arg("init")
        .arg(temp.path())
        .args(["--name", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PROJECT_INVALID_STRUCTURE"));
}
