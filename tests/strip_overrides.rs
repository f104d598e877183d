// tests/strip_overrides.rs

//! Integration tests for the directory-wide Flexipage override stripping
//! pass, exercised against a real temporary project tree.

use std::fs;

use orgsync::{SilentProgress, strip_all, strip_overrides};
use tempfile::TempDir;

const WITH_FLEXIPAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomObject xmlns="http://soap.sforce.com/2006/04/metadata">
    <actionOverrides>
        <actionName>New</actionName>
        <type>Default</type>
    </actionOverrides>
    <actionOverrides>
        <actionName>View</actionName>
        <content>Invoice_Record_Page</content>
        <formFactor>Large</formFactor>
        <type>Flexipage</type>
    </actionOverrides>
    <label>Invoice</label>
</CustomObject>
"#;

const WITHOUT_FLEXIPAGE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomObject xmlns="http://soap.sforce.com/2006/04/metadata">
    <actionOverrides>
        <actionName>Edit</actionName>
        <type>Default</type>
    </actionOverrides>
    <label>Payment</label>
</CustomObject>
"#;

const NO_OVERRIDES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<CustomObject xmlns="http://soap.sforce.com/2006/04/metadata">
    <label>Ledger</label>
</CustomObject>
"#;

/// Lay out a conventional objects directory with one file per object.
fn setup_project(objects: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (object, content) in objects {
        let object_dir = dir.path().join("objects").join(object);
        fs::create_dir_all(&object_dir).unwrap();
        fs::write(
            object_dir.join(format!("{object}.object-meta.xml")),
            content,
        )
        .unwrap();
    }
    dir
}

fn pattern(dir: &TempDir) -> String {
    format!("{}/objects/**/*.object-meta.xml", dir.path().display())
}

fn read(dir: &TempDir, object: &str) -> String {
    fs::read_to_string(
        dir.path()
            .join("objects")
            .join(object)
            .join(format!("{object}.object-meta.xml")),
    )
    .unwrap()
}

#[test]
fn test_strip_all_rewrites_only_affected_files() {
    let dir = setup_project(&[
        ("Invoice", WITH_FLEXIPAGE),
        ("Payment", WITHOUT_FLEXIPAGE),
        ("Ledger", NO_OVERRIDES),
    ]);

    let summary = strip_all(&pattern(&dir), &SilentProgress).unwrap();
    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_changed, 1);
    assert_eq!(summary.overrides_removed, 1);

    let invoice = read(&dir, "Invoice");
    assert!(!invoice.contains("Flexipage"));
    assert!(invoice.contains("<type>Default</type>"));
    assert!(invoice.contains("<label>Invoice</label>"));

    // untouched files keep their exact bytes
    assert_eq!(read(&dir, "Payment"), WITHOUT_FLEXIPAGE);
    assert_eq!(read(&dir, "Ledger"), NO_OVERRIDES);
}

#[test]
fn test_strip_all_is_idempotent_on_disk() {
    let dir = setup_project(&[("Invoice", WITH_FLEXIPAGE)]);

    let first = strip_all(&pattern(&dir), &SilentProgress).unwrap();
    assert_eq!(first.files_changed, 1);
    let after_first = read(&dir, "Invoice");

    let second = strip_all(&pattern(&dir), &SilentProgress).unwrap();
    assert_eq!(second.files_scanned, 1);
    assert_eq!(second.files_changed, 0);
    assert_eq!(second.overrides_removed, 0);
    assert_eq!(read(&dir, "Invoice"), after_first);
}

#[test]
fn test_strip_all_empty_match_is_a_clean_noop() {
    let dir = tempfile::tempdir().unwrap();
    let summary = strip_all(&pattern(&dir), &SilentProgress).unwrap();
    assert_eq!(summary, orgsync::StripSummary::default());
}

#[test]
fn test_strip_all_aborts_on_first_malformed_file() {
    let dir = setup_project(&[("Invoice", WITH_FLEXIPAGE)]);
    let broken_dir = dir.path().join("objects").join("Broken");
    fs::create_dir_all(&broken_dir).unwrap();
    fs::write(
        broken_dir.join("Broken.object-meta.xml"),
        "<CustomObject><actionOverrides>",
    )
    .unwrap();

    // Broken sorts before Invoice, so the scan stops before rewriting it
    let err = strip_all(&pattern(&dir), &SilentProgress);
    assert!(err.is_err());
    assert_eq!(read(&dir, "Invoice"), WITH_FLEXIPAGE);
}

#[test]
fn test_single_file_strip_reports_change() {
    let dir = setup_project(&[("Invoice", WITH_FLEXIPAGE)]);
    let path = dir
        .path()
        .join("objects")
        .join("Invoice")
        .join("Invoice.object-meta.xml");

    assert!(strip_overrides(&path).unwrap());
    assert!(!strip_overrides(&path).unwrap());
}
