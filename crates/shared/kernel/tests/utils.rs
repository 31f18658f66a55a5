use fkit_kernel::utils::{calculate_total, format_message, process_data};
use serde_json::{Map, Value, json};
use std::collections::BTreeSet;

#[test]
fn calculate_total_empty() {
    assert_eq!(calculate_total(&[]), 0);
}

#[test]
fn calculate_total_single() {
    assert_eq!(calculate_total(&[5]), 5);
}

#[test]
fn calculate_total_multiple() {
    assert_eq!(calculate_total(&[1, 2, 3, 4, 5]), 15);
}

#[test]
fn format_message_output() {
    assert_eq!(format_message("Alice", 10), "Hello Alice, you have 10 items.");
}

#[test]
fn process_data_returns_expected_structure() {
    let mut data = Map::new();
    data.insert("a".to_owned(), json!(1));
    data.insert("b".to_owned(), json!(2));

    let result = process_data(&data);
    assert!(result.processed);
    assert_eq!(result.count, 2);

    let keys: BTreeSet<&str> = result.input_keys.iter().map(String::as_str).collect();
    assert_eq!(keys, BTreeSet::from(["a", "b"]));
}

#[test]
fn process_data_serializes_as_record() {
    let mut data = Map::new();
    data.insert("only".to_owned(), Value::Null);

    let value = serde_json::to_value(process_data(&data)).expect("record serialize");
    assert_eq!(value, json!({ "processed": true, "input_keys": ["only"], "count": 1 }));
}
