// run the attrgen binary against the offline fixture page
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../resources/fixtures/attrs.html")
}

/// An `attrgen` command isolated from any user configuration.
fn attrgen(config_dir: &Path) -> Command {
    let config = config_dir.join("empty.toml");
    std::fs::write(&config, "").unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("attrgen"));
    cmd.env("SOURCE_DATE_EPOCH", "0").arg("--config").arg(config);
    cmd
}

#[test]
fn generate_writes_module() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("src").join("mod.rs");

    attrgen(tmp.path())
        .arg("generate")
        .arg("--input")
        .arg(fixture())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("mod.rs"));

    let src = std::fs::read_to_string(&out).unwrap();
    assert!(src.starts_with("// Automatically generated on: 1970-01-01 00:00:00.000000 .\n"));
    assert!(src.contains("pub struct SubgraphAttributes {"));
}

#[test]
fn generate_is_reproducible() {
    let tmp = tempdir().unwrap();
    let first = tmp.path().join("first.rs");
    let second = tmp.path().join("second.rs");

    for out in [&first, &second] {
        attrgen(tmp.path())
            .args(["generate", "--input"])
            .arg(fixture())
            .arg("--output")
            .arg(out)
            .assert()
            .success();
    }

    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn generate_honors_set_type() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("mod.rs");

    attrgen(tmp.path())
        .args(["generate", "--set-type", "crate::types::FxIndexSet", "--input"])
        .arg(fixture())
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let src = std::fs::read_to_string(&out).unwrap();
    assert!(src.contains("use crate::types::FxIndexSet;"));
    assert!(src.contains("attributes: FxIndexSet<Attribute>,"));
}

#[test]
fn strict_mode_rejects_unused_attribute() {
    let tmp = tempdir().unwrap();
    let page = tmp.path().join("page.html");
    std::fs::write(
        &page,
        "<table><tr><th>Name</th><th>Used By</th><th>Description, notes</th></tr>\
         <tr><td>orphan</td><td></td><td>Used by nothing</td></tr></table>",
    )
    .unwrap();
    let out = tmp.path().join("mod.rs");

    attrgen(tmp.path())
        .args(["generate", "--strict", "--input"])
        .arg(&page)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("schema assumption violated"));
    assert!(!out.exists());

    // Without --strict the finding is only a warning
    attrgen(tmp.path())
        .args(["generate", "--input"])
        .arg(&page)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();
    assert!(out.exists());
}

#[test]
fn missing_input_fails() {
    let tmp = tempdir().unwrap();

    attrgen(tmp.path())
        .args(["generate", "--input"])
        .arg(tmp.path().join("missing.html"))
        .arg("--output")
        .arg(tmp.path().join("mod.rs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("attrgen failed"));
}

#[test]
fn page_without_table_fails() {
    let tmp = tempdir().unwrap();
    let page = tmp.path().join("moved.html");
    std::fs::write(&page, "<html><body><p>This page has moved.</p></body></html>").unwrap();

    attrgen(tmp.path())
        .args(["generate", "--input"])
        .arg(&page)
        .arg("--output")
        .arg(tmp.path().join("mod.rs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no table found"));
}

#[test]
fn invalid_source_date_epoch_fails() {
    let tmp = tempdir().unwrap();

    attrgen(tmp.path())
        .env("SOURCE_DATE_EPOCH", "last tuesday")
        .args(["generate", "--input"])
        .arg(fixture())
        .arg("--output")
        .arg(tmp.path().join("mod.rs"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("SOURCE_DATE_EPOCH"));
}

#[test]
fn url_conflicts_with_input() {
    let tmp = tempdir().unwrap();

    attrgen(tmp.path())
        .args(["generate", "--url", "https://example.invalid/attrs.html", "--input"])
        .arg(fixture())
        .assert()
        .failure();
}

#[test]
fn dump_catalog_writes_json() {
    let tmp = tempdir().unwrap();
    let out = tmp.path().join("catalog.json");

    attrgen(tmp.path())
        .args(["dump-catalog", "--input"])
        .arg(fixture())
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("27 attributes"));

    let json = std::fs::read_to_string(&out).unwrap();
    assert!(json.contains("\"_background\""));
    assert!(json.contains("\"Subgraphs\""));
}

#[test]
fn init_config_refuses_to_overwrite() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("attrgen").join("config.toml");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("attrgen"));
    cmd.args(["init-config", "--path"]).arg(&path);
    cmd.assert().success();
    assert!(std::fs::read_to_string(&path).unwrap().contains("indexmap::IndexSet"));

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("attrgen"));
    cmd.args(["init-config", "--path"]).arg(&path);
    cmd.assert().failure().stderr(predicate::str::contains("already exists"));
}
