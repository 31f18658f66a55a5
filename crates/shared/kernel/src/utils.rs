//! Core utilities: pure, stateless functions over integers, strings and mappings.

use fkit_domain::records::ProcessedData;
use serde_json::{Map, Value};

/// Sums the items; an empty slice totals `0`.
#[must_use]
pub fn calculate_total(items: &[i64]) -> i64 {
    items.iter().sum()
}

/// Formats the greeting `Hello {name}, you have {count} items.` with no escaping.
#[must_use]
pub fn format_message(name: &str, count: i64) -> String {
    format!("Hello {name}, you have {count} items.")
}

/// Summarises a mapping without touching it.
#[must_use]
pub fn process_data(data: &Map<String, Value>) -> ProcessedData {
    ProcessedData { processed: true, input_keys: data.keys().cloned().collect(), count: data.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_calculate_total_handles_negatives() {
        assert_eq!(calculate_total(&[10, -4, -6]), 0);
        assert_eq!(calculate_total(&[-1]), -1);
    }

    #[test]
    fn test_format_message_does_not_escape() {
        assert_eq!(format_message("", 0), "Hello , you have 0 items.");
        assert_eq!(format_message("{x}", -1), "Hello {x}, you have -1 items.");
    }

    #[test]
    fn test_process_data_empty() {
        let result = process_data(&Map::new());
        assert!(result.processed);
        assert_eq!(result.count, 0);
        assert!(result.input_keys.is_empty());
    }

    #[test]
    fn test_process_data_leaves_input_untouched() {
        let Value::Object(data) = json!({ "x": [1, 2], "y": null }) else {
            unreachable!("literal is an object");
        };
        let before = data.clone();

        let result = process_data(&data);
        assert_eq!(result.count, 2);
        assert_eq!(data, before);
    }
}
