use serde::{Deserialize, Serialize};

/// Summary of a processed input mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedData {
    /// Always `true` for a record produced by processing.
    pub processed: bool,
    /// Keys of the input mapping. Order follows the mapping's iteration order.
    pub input_keys: Vec<String>,
    /// Number of entries in the input mapping.
    pub count: usize,
}
