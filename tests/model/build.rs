//! Generates the attribute model from the checked-in fixture page.

use std::env;
use std::fs;
use std::path::PathBuf;

use catalog::AttributeCatalog;
use chrono::DateTime;
use codegen::EmitOptions;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    let fixture = manifest_dir.join("../../resources/fixtures/attrs.html");
    println!("cargo:rerun-if-changed={}", fixture.display());

    let html = fs::read_to_string(&fixture)?;
    let catalog = AttributeCatalog::from_rows(scrape::extract_rows(&html)?);
    semantics::enforce(semantics::check_schema(&catalog), true)?;
    let groups = semantics::group_by_applicability(&catalog);

    let generated_at = DateTime::from_timestamp(0, 0).ok_or("epoch out of range")?.naive_utc();
    let src = codegen::render_module(&catalog, &groups, &EmitOptions::default(), generated_at)?;
    codegen::write_generated(out_dir.join("attributes.rs"), &src)?;

    Ok(())
}
