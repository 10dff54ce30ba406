use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Env {
    home: TempDir,
    session: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
            session: tempfile::tempdir().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("quotez").unwrap();
        cmd.current_dir(self.home.path())
            .env("QUOTEZ_HOME", self.home.path())
            .env("QUOTEZ_SESSION_DIR", self.session.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn first_run_seeds_defaults() {
    let env = Env::new();

    env.cmd()
        .args(["list", "-c", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Motivation"))
        .stdout(predicate::str::contains("Success"));

    assert!(env.home.path().join("quotes.json").exists());
}

#[test]
fn add_then_list_by_category() {
    let env = Env::new();

    env.cmd()
        .args(["add", "Stay hungry", "Tech", "-a", "Jobs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stay hungry"));

    env.cmd()
        .args(["list", "-c", "Tech"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stay hungry -- Jobs"))
        .stdout(predicate::str::contains("Motivation").not());
}

#[test]
fn add_with_blank_text_is_rejected() {
    let env = Env::new();

    env.cmd()
        .args(["add", "   ", "Tech"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter both quote text and category.",
        ));

    env.cmd()
        .args(["categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tech").not());
}

#[test]
fn selected_category_survives_restart() {
    let env = Env::new();

    env.cmd()
        .args(["category", "Life"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected category: Life"));

    env.cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("* Life"));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Life"))
        .stdout(predicate::str::contains("Motivation").not());
}

#[test]
fn unknown_category_is_an_error_message() {
    let env = Env::new();

    env.cmd()
        .args(["category", "Nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown category: Nope"));
}

#[test]
fn import_appends_valid_entries() {
    let env = Env::new();
    let file = env.home.path().join("batch.json");
    std::fs::write(
        &file,
        r#"[{"text":"Less is more","category":"Design"},{"text":"","category":"Design"},{"oops":1}]"#,
    )
    .unwrap();

    env.cmd()
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported 1 quotes."))
        .stdout(predicate::str::contains("Skipped 2 invalid entries"));

    env.cmd()
        .args(["list", "-c", "Design"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Less is more"));
}

#[test]
fn import_rejects_non_array() {
    let env = Env::new();
    let file = env.home.path().join("object.json");
    std::fs::write(&file, r#"{"text":"x","category":"y"}"#).unwrap();

    env.cmd()
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Imported JSON must be an array of quote objects.",
        ));
}

#[test]
fn export_to_stdout_is_plain_json() {
    let env = Env::new();

    let output = env.cmd().args(["export", "-o", "-"]).output().unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let quotes = parsed.as_array().unwrap();
    assert_eq!(quotes.len(), 4);
    assert_eq!(quotes[0]["category"], "Motivation");
}

#[test]
fn export_then_import_into_fresh_home() {
    let source = Env::new();
    source
        .cmd()
        .args(["add", "Ship it", "Work"])
        .assert()
        .success();
    let exported = source.session.path().join("backup.json");
    source
        .cmd()
        .arg("export")
        .arg("-o")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 5 quotes"));

    let target = Env::new();
    target
        .cmd()
        .arg("import")
        .arg(&exported)
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully imported 5 quotes."));
}

#[test]
fn reset_with_yes_restores_defaults() {
    let env = Env::new();
    env.cmd().args(["add", "Temp", "Scratch"]).assert().success();

    env.cmd()
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("defaults restored"));

    env.cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Scratch").not());
}

#[test]
fn reset_without_confirmation_is_cancelled() {
    let env = Env::new();
    env.cmd().args(["add", "Keep me", "Scratch"]).assert().success();

    env.cmd()
        .arg("reset")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    env.cmd()
        .args(["list", "-c", "Scratch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep me"));
}

#[test]
fn config_set_and_get() {
    let env = Env::new();

    env.cmd()
        .args(["config", "merge-policy", "server-replaces"])
        .assert()
        .success();

    env.cmd()
        .args(["config", "merge-policy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("server-replaces"));

    env.cmd()
        .args(["config", "sync-interval", "soon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sync-interval"));
}

#[test]
fn show_repeats_last_added_quote() {
    let env = Env::new();
    env.cmd()
        .args(["add", "Remember this", "Memory"])
        .assert()
        .success();

    env.cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remember this"));
}

#[test]
fn config_set_rewrites_broken_file() {
    let env = Env::new();
    std::fs::write(env.home.path().join("config.json"), "{not json").unwrap();

    env.cmd()
        .args(["config", "fetch-limit", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch-limit = 8"));

    env.cmd()
        .args(["config", "fetch-limit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8"));
}
