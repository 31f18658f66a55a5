use super::error::{ConfigError, ConfigErrorExt};
use ::config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Settings file looked up when no path is given. The extension picks the format.
pub const DEFAULT_SETTINGS_PATH: &str = "fkit";
/// Prefix of environment overrides, e.g. `FKIT__LOG__LEVEL=debug` maps to `log.level`.
pub const ENV_PREFIX: &str = "FKIT";

/// Loads settings by layering an optional file with environment overrides.
///
/// 1. **Base File**: settings from `path` (defaults to [`DEFAULT_SETTINGS_PATH`]). The file is
///    optional; when absent, `T` is built from its serde defaults plus any overrides.
/// 2. **Environment Overrides**: variables prefixed with `FKIT__`, nested with double
///    underscores.
///
/// # Errors
/// Returns [`ConfigError::Config`] if the file is malformed or the merged values do not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use fkit_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("does/not/exist")).unwrap_or_default();
/// assert_eq!(cfg.port, 0);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(::config::Case::Snake),
        );

    info!("Loading settings from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
