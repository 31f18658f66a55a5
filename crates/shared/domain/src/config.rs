use crate::features::FeatureSet;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT: u64 = 30;
pub const MAX_RETRIES: u32 = 3;
pub const DEBUG_MODE: bool = false;

/// Flags switched on in the fixed record. `metrics` stays off.
pub const DEFAULT_FEATURES: FeatureSet = FeatureSet::CACHING.union(FeatureSet::LOGGING);

/// The fixed-shape configuration record.
///
/// Serializes to exactly four keys: `timeout`, `max_retries`, `debug` and `features`,
/// where `features` is a mapping of every known flag name to a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub timeout: u64,
    pub max_retries: u32,
    pub debug: bool,
    pub features: FeatureSet,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_retries: MAX_RETRIES,
            debug: DEBUG_MODE,
            features: DEFAULT_FEATURES,
        }
    }
}
