use assert_fs::prelude::*;
use predicates::prelude::*;

use privacy_lock::config::{load_catalog, save_catalog, EXAMPLE_CATALOG};
use privacy_lock::{OptionCatalog, PrivacyLockOption};

#[test]
fn saves_catalog_as_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("options.yaml");

    save_catalog(file.path(), &OptionCatalog::builtin()).unwrap();

    file.assert(predicate::path::is_file());
    file.assert(predicate::str::contains("default_hours: 1"));
    file.assert(predicate::str::contains("title: Never"));
    temp.child("options.yaml.tmp").assert(predicate::path::missing());
}

#[test]
fn saves_catalog_as_toml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("conf").child("options.toml");

    let catalog = OptionCatalog::new(vec![PrivacyLockOption::new("12 Hours", "Half a day", 12)]);
    save_catalog(file.path(), &catalog).unwrap();

    file.assert(predicate::str::contains("[[options]]"));
    file.assert(predicate::str::contains("hours = 12"));
    assert_eq!(load_catalog(file.path()).unwrap(), catalog);
}

#[test]
fn loads_hand_written_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("options.yaml");
    file.write_str(
        "options:\n  - title: \"\"\n    detail: \"\"\n    hours: -1\n  - title: \"48 Hours\"\n    detail: \"Two days\"\n    hours: 48\n",
    )
    .unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.options()[0], PrivacyLockOption::new("", "", -1));
    assert_eq!(catalog.default_option().map(|o| o.hours()), Some(-1));
    assert_eq!(catalog.find_by_hours(48).map(|o| o.detail()), Some("Two days"));
}

#[test]
fn rejects_catalog_missing_a_field() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("options.yaml");
    file.write_str("options:\n  - title: \"1 Hour\"\n    hours: 1\n").unwrap();

    let err = load_catalog(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("options.yaml"));
}

#[test]
fn example_catalog_loads_from_disk() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("options.yaml");
    file.write_str(EXAMPLE_CATALOG).unwrap();

    let catalog = load_catalog(file.path()).unwrap();
    assert_eq!(catalog.default_option().map(|o| o.title()), Some("1 Hour"));
    assert!(catalog.find_by_hours(0).is_some());
}
