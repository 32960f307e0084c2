//! Configuration layering against real captures

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use libscrape::{AppConfig, LibraryParser, LibrarySystem, RuleTables};

use crate::common::{date, load_capture, parse_fixture};

#[test]
fn test_shipped_config_loads_builtin_rules() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config");
    let config = AppConfig::load_from(dir, "integration").unwrap();
    assert_eq!(config.rules, RuleTables::default());
}

#[test]
fn test_layout_drift_is_a_config_edit() {
    // Same Toronto checkout layout expressed without the renew shift
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("default.toml"),
        "[rules.toronto]\n\
         renew_offset = 0\n\
         \n\
         [rules.toronto.checkout]\n\
         title = 1\n\
         format = 5\n\
         contributors = 4\n\
         status = 8\n\
         item_date = 7\n",
    )
    .unwrap();
    let config = AppConfig::load_from(dir.path(), "integration").unwrap();

    let capture = load_capture("toronto_checkouts.json");
    let renewable = &capture.items[..7];
    let parser = LibraryParser::with_rules(Arc::new(config.rules), date(2022, 1, 5));
    let items = parser.parse_checkouts(renewable, LibrarySystem::Toronto);

    let (_, defaults) = parse_fixture("toronto_checkouts.json");
    assert_eq!(items, defaults[..7]);
}
