pub use crate::config::{ConfigError, ConfigErrorExt, get_config, is_feature_enabled, load_config};
pub use crate::utils::{calculate_total, format_message, process_data};
pub use crate::helpers::{
    DEFAULT_MAX_LENGTH, get_timestamp, merge_dicts, truncate_string, truncate_string_default,
    validate_input,
};
pub use fkit_domain::config::FixtureConfig;
pub use fkit_domain::features::FeatureSet;
pub use fkit_domain::records::ProcessedData;
