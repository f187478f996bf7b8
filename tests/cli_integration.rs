use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn arcana(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("arcana").unwrap();
    cmd.env("ARCANA_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_layouts_lists_builtin_spreads() {
    let home = TempDir::new().unwrap();
    arcana(&home)
        .arg("layouts")
        .assert()
        .success()
        .stdout(predicate::str::contains("timeline"))
        .stdout(predicate::str::contains("Past, Present, Future"))
        .stdout(predicate::str::contains("Option A, Option B, Advice"));
}

#[test]
fn test_draw_save_show_delete() {
    let home = TempDir::new().unwrap();

    arcana(&home)
        .args(["--seed", "7", "draw", "timeline", "-c", "love"])
        .args(["-q", "Where is this going?", "-n", "stay open", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Past: "))
        .stdout(predicate::str::contains("Present: "))
        .stdout(predicate::str::contains("Future: "))
        .stdout(predicate::str::contains("Advice:"))
        .stdout(predicate::str::contains("Reading saved."));

    assert!(home.path().join("tarot_readings.json").exists());

    arcana(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Where is this going?"))
        .stdout(predicate::str::contains("timeline"));

    arcana(&home)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: love"))
        .stdout(predicate::str::contains("Note: stay open"));

    arcana(&home)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Reading deleted (1): Where is this going?",
        ));

    arcana(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved readings."));
}

#[test]
fn test_unknown_layout_fails() {
    let home = TempDir::new().unwrap();
    arcana(&home)
        .args(["draw", "celtic-cross"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown layout: celtic-cross"));
}

#[test]
fn test_delete_out_of_range_fails() {
    let home = TempDir::new().unwrap();
    arcana(&home)
        .args(["delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_export_saved_reading() {
    let home = TempDir::new().unwrap();
    arcana(&home)
        .args(["draw", "single", "-q", "Today?", "--save"])
        .assert()
        .success();

    arcana(&home)
        .args(["export", "1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Tarot Reading"))
        .stdout(predicate::str::contains("Question: Today?"))
        .stdout(predicate::str::contains("Card: "));

    let out_file = home.path().join("today.txt");
    arcana(&home)
        .args(["export", "1", "-o"])
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));
    let text = fs::read_to_string(out_file).unwrap();
    assert!(text.contains("Layout: single"));
}

#[test]
fn test_corrupt_history_shows_warning() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("tarot_readings.json"), "not json").unwrap();
    arcana(&home)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading history unavailable"));
}

#[test]
fn test_config_set_and_show() {
    let home = TempDir::new().unwrap();
    arcana(&home)
        .args(["config", "default-category", "career"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-category set to career"));

    arcana(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default-category = career"))
        .stdout(predicate::str::contains("storage-key = tarot_readings"));
}

#[test]
fn test_custom_deck_and_layout_from_config() {
    let home = TempDir::new().unwrap();
    let deck = r#"[
      {"id": "a", "name": "Alpha", "meanings": {
        "upright": {"general": "alpha up", "advice": "alpha advice"},
        "reversed": {"general": "alpha down", "advice": "alpha advice r"}}},
      {"id": "b", "name": "Beta", "meanings": {
        "upright": {"general": "beta up", "advice": "beta advice"},
        "reversed": {"general": "beta down", "advice": "beta advice r"}}}
    ]"#;
    let deck_path = home.path().join("deck.json");
    fs::write(&deck_path, deck).unwrap();
    let config = serde_json::json!({
        "deck_path": deck_path,
        "layouts": [{"name": "pair", "positions": ["Me", "You"]}]
    });
    fs::write(home.path().join("config.json"), config.to_string()).unwrap();

    arcana(&home)
        .args(["draw", "pair", "-c", "love"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Me: "))
        .stdout(predicate::str::contains("You: "))
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Beta"))
        .stdout(predicate::str::contains("showing 'general' instead"));
}

#[test]
fn test_empty_deck_fails_fast() {
    let home = TempDir::new().unwrap();
    let deck_path = home.path().join("deck.json");
    fs::write(&deck_path, "[]").unwrap();
    let config = serde_json::json!({ "deck_path": deck_path });
    fs::write(home.path().join("config.json"), config.to_string()).unwrap();

    arcana(&home)
        .arg("layouts")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Deck has no cards"));
}

#[test]
fn test_config_repairs_missing_deck_path() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("gone.json");
    let config = serde_json::json!({
        "deck_path": missing,
        "layouts": [{"name": "broken", "positions": []}]
    });
    fs::write(home.path().join("config.json"), config.to_string()).unwrap();

    arcana(&home)
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("gone.json"));

    arcana(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("gone.json"));

    arcana(&home)
        .args(["config", "deck-path", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("deck-path set to (bundled)"));

    arcana(&home)
        .args(["draw", "single"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layout"));
}
