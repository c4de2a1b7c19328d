//! Tests for TOML task catalogs and the ledger built on them

use std::fs;

use ecotrack::adapters::toml::{CatalogError, load_catalog, load_repository};
use ecotrack::core::error::LedgerError;
use ecotrack::core::models::{EvidenceRef, Icon};
use ecotrack::core::services::TaskLedger;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[task]]
id = "bike"
name = "Bike to work"
description = "Leave the car at home"
points = 40
icon = "car"
[task.metrics]
carbon_score = 15

[[task]]
id = "tap"
name = "Shorter shower"
points = 20
[task.metrics]
water_saved = 40
"#;

fn write_catalog(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn test_load_catalog_from_file() {
    let (_dir, path) = write_catalog(CATALOG);

    let tasks = load_catalog(&path).unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "bike");
    assert_eq!(tasks[0].icon, Icon::Car);
    assert_eq!(tasks[0].metrics.carbon_score, Some(15));
    assert_eq!(tasks[1].icon, Icon::Leaf);
    assert_eq!(tasks[1].description, "");
}

#[test]
fn test_load_catalog_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = load_catalog(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_ledger_over_catalog_keeps_order() {
    let (_dir, path) = write_catalog(CATALOG);
    let ledger = TaskLedger::new(Box::new(load_repository(&path).unwrap())).unwrap();

    let ids: Vec<String> = ledger.list_tasks().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec!["bike", "tap"]);
}

#[test]
fn test_ledger_mark_completed_twice() {
    let (_dir, path) = write_catalog(CATALOG);
    let mut ledger = TaskLedger::new(Box::new(load_repository(&path).unwrap())).unwrap();

    let task = ledger.mark_completed("tap", EvidenceRef::for_upload(1, "shower.jpg")).unwrap();
    assert!(task.is_verified());
    assert_eq!(ledger.summary().unwrap().completed, 1);

    let err = ledger.mark_completed("tap", EvidenceRef::for_upload(2, "again.jpg")).unwrap_err();
    assert_eq!(err, LedgerError::AlreadyCompleted("tap".to_string()));
    assert_eq!(
        ledger.get_task("tap").unwrap().evidence().map(EvidenceRef::as_str),
        Some("evidence:1:shower.jpg")
    );
}

#[test]
fn test_ledger_unknown_task() {
    let (_dir, path) = write_catalog(CATALOG);
    let ledger = TaskLedger::new(Box::new(load_repository(&path).unwrap())).unwrap();
    assert_eq!(ledger.get_task("nope").unwrap_err(), LedgerError::NotFound("nope".to_string()));
}
