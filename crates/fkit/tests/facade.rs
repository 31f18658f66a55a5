use fkit::prelude::*;
use serde_json::{Map, json};

#[test]
fn facade_exposes_every_unit() {
    let cfg: FixtureConfig = get_config();
    assert_eq!(cfg.max_retries, 3);
    assert!(!is_feature_enabled("metrics"));

    assert_eq!(calculate_total(&[2, 3]), 5);
    assert!(validate_input("ok"));
    assert_eq!(truncate_string_default("short"), "short");
    assert!(!get_timestamp().is_empty());

    let mut a = Map::new();
    a.insert("a".to_owned(), json!(1));
    let merged = merge_dicts(&a, &Map::new());
    assert_eq!(process_data(&merged).input_keys, ["a"]);
}

#[test]
fn facade_reexports_crates() {
    assert_eq!(fkit::domain::constants::CACHING, "caching");
    assert_eq!(fkit::kernel::helpers::DEFAULT_MAX_LENGTH, 100);
}
