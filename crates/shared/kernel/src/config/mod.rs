//! Configuration accessor and layered settings loader.
//!
//! The fixed [`FixtureConfig`] record is rebuilt from constants on every call and is
//! never influenced by files or environment variables. [`load_config`] is the separate
//! path for application settings that may be tuned per environment.

mod error;
mod loader;

pub use self::error::{ConfigError, ConfigErrorExt};
pub use self::loader::{DEFAULT_SETTINGS_PATH, ENV_PREFIX, load_config};

use fkit_domain::config::FixtureConfig;
use tracing::debug;

/// Returns the configuration record.
///
/// Built fresh from fixed constants on each call; callers own the returned value and
/// mutating it has no effect on later calls.
#[must_use]
pub fn get_config() -> FixtureConfig {
    FixtureConfig::default()
}

/// Checks whether a feature flag is enabled in the configuration record.
///
/// Unknown names, including the empty string, are treated as disabled rather than as errors.
#[must_use]
pub fn is_feature_enabled(name: &str) -> bool {
    let enabled = get_config().features.is_enabled(name);
    debug!(feature = name, enabled, "Feature flag lookup");
    enabled
}
