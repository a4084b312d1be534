//! Binary-level tests for the `forja` CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn forja() -> Command {
    Command::cargo_bin("forja").unwrap()
}

#[test]
fn generate_then_enrich_links_frequent_terms() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("export.csv");
    fs::write(
        &csv_path,
        "\u{1F4DD} Idea,Estado\n\
Comparar modelos robustos,Activa\n\
Documentar modelos simples,Activa\n\
Ajustar modelos finales,Pausada\n",
    )
    .unwrap();
    let notes_dir = dir.path().join("notes");

    forja()
        .args(["generate", "--csv"])
        .arg(&csv_path)
        .arg("--output")
        .arg(&notes_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Notes written:         3"));

    forja()
        .arg("enrich")
        .arg(&notes_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("modelos"));

    let note = fs::read_to_string(
        notes_dir.join("idea-001-Comparar-modelos-robustos.md"),
    )
    .unwrap();
    assert!(note.contains("[[modelos]]"));
    // frontmatter still intact
    assert!(note.starts_with("---\n"));
    assert!(note.contains("title: Comparar modelos robustos"));
}

#[test]
fn enrich_missing_folder_fails_with_path() {
    let dir = TempDir::new().unwrap();
    forja()
        .arg("enrich")
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("notes folder not found"));
}

#[test]
fn generate_without_csv_source_is_an_error() {
    // No flag and no config file: the command must explain what to pass
    let empty_config_home = TempDir::new().unwrap();
    forja()
        .env("XDG_CONFIG_HOME", empty_config_home.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no CSV export given"));
}

#[test]
fn verbose_flag_emits_progress_logs() {
    let dir = TempDir::new().unwrap();
    let notes_dir = dir.path().join("notes");
    fs::create_dir_all(&notes_dir).unwrap();
    fs::write(notes_dir.join("a.md"), "datos y datos\n").unwrap();

    forja()
        .args(["--verbose", "enrich"])
        .arg(&notes_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("starting enrichment"));
}

#[test]
fn enrich_honors_threshold_flags() {
    let dir = TempDir::new().unwrap();
    let notes_dir = dir.path().join("notes");
    fs::create_dir_all(&notes_dir).unwrap();
    fs::write(
        notes_dir.join("a.md"),
        "patrones patrones patrones y señales señales\n",
    )
    .unwrap();

    forja()
        .args(["enrich", "--min-frequency", "3", "--top", "5"])
        .arg(&notes_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("patrones"));

    let body = fs::read_to_string(notes_dir.join("a.md")).unwrap();
    assert!(body.contains("[[patrones]]"));
    // below the raised floor
    assert!(!body.contains("[[señales]]"));
}
