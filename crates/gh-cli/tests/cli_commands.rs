//! Integration tests for the gh-cli binary commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn guildhall() -> Command {
    Command::cargo_bin("guildhall").unwrap()
}

// ---------------------------------------------------------------------------
// classes
// ---------------------------------------------------------------------------

#[test]
fn classes_lists_all_five() {
    guildhall()
        .arg("classes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Magic User"))
        .stdout(predicate::str::contains("Cleric"))
        .stdout(predicate::str::contains("Bounty Hunter"))
        .stdout(predicate::str::contains("Warrior"))
        .stdout(predicate::str::contains("Hell Raiser"))
        .stdout(predicate::str::contains("5 classes"));
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_bounty_hunter_shows_kit() {
    guildhall()
        .args(["roll", "b", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bounty Hunter"))
        .stdout(predicate::str::contains("Level 1"))
        .stdout(predicate::str::contains("sneak"))
        .stdout(predicate::str::contains("pick lock"))
        .stdout(predicate::str::contains("Evasion 5"));
}

#[test]
fn roll_is_deterministic_with_seed() {
    let first = guildhall()
        .args(["roll", "w", "--seed", "99"])
        .output()
        .unwrap();
    let second = guildhall()
        .args(["roll", "w", "--seed", "99"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_warrior_has_no_skills() {
    guildhall()
        .args(["roll", "warrior"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no starting skills"));
}

#[test]
fn roll_unknown_class_fails() {
    guildhall()
        .args(["roll", "x"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown class"));
}

// ---------------------------------------------------------------------------
// exp
// ---------------------------------------------------------------------------

#[test]
fn exp_prints_thresholds() {
    guildhall()
        .args(["exp", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("450000"))
        .stdout(predicate::str::contains("10000000"))
        .stdout(predicate::str::contains("staff"));
}

#[test]
fn exp_unknown_class_fails() {
    guildhall().args(["exp", "q"]).assert().failure().code(1);
}

// ---------------------------------------------------------------------------
// titles
// ---------------------------------------------------------------------------

#[test]
fn titles_by_gender() {
    guildhall()
        .args(["titles", "w"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the Swordpupil"))
        .stdout(predicate::str::contains("the Implementor"));

    guildhall()
        .args(["titles", "w", "--female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the Implementress"));
}

#[test]
fn hell_raisers_are_classless() {
    guildhall()
        .args(["titles", "h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("the Classless"));
}

// ---------------------------------------------------------------------------
// abilities
// ---------------------------------------------------------------------------

#[test]
fn abilities_respect_level() {
    guildhall()
        .args(["abilities", "w", "--level", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kick"))
        .stdout(predicate::str::contains("rescue"))
        .stdout(predicate::str::contains("bash").not())
        .stdout(predicate::str::contains("2 skills at level 3"));
}

#[test]
fn abilities_none_at_level_zero() {
    guildhall()
        .args(["abilities", "m", "--level", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No spells available at level 0"));
}

// ---------------------------------------------------------------------------
// level
// ---------------------------------------------------------------------------

#[test]
fn level_to_immortal() {
    guildhall()
        .args(["level", "c", "--to", "31", "--seed", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Level 31"))
        .stdout(predicate::str::contains("disabled"));
}

#[test]
fn level_rejects_non_promotion() {
    guildhall()
        .args(["level", "m", "--to", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not above"));
}

#[test]
fn level_rejects_out_of_range() {
    guildhall()
        .args(["level", "m", "--to", "40"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}

// ---------------------------------------------------------------------------
// mask
// ---------------------------------------------------------------------------

#[test]
fn mask_of_mage_and_warrior() {
    guildhall()
        .args(["mask", "mw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mask 9"))
        .stdout(predicate::str::contains("Magic User, Warrior"));
}

#[test]
fn mask_ignores_unknown_letters() {
    guildhall()
        .args(["mask", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mask 0"))
        .stdout(predicate::str::contains("No classes"));
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

#[test]
fn config_file_changes_starting_points() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guild.toml");
    fs::write(&path, "starting_max_mana = 250\nall_sites_ok = true\n").unwrap();

    guildhall()
        .args(["--config", path.to_str().unwrap(), "roll", "m", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mana 250/250"));
}

#[test]
fn bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guild.toml");
    fs::write(&path, "starting_max_mana = \"lots\"\n").unwrap();

    guildhall()
        .args(["--config", path.to_str().unwrap(), "classes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn missing_config_file_fails() {
    guildhall()
        .args(["--config", "/nonexistent/guild.toml", "classes"])
        .assert()
        .failure()
        .code(1);
}
