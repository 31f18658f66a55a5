//! Well-known feature flag names.

pub const CACHING: &str = "caching";
pub const LOGGING: &str = "logging";
pub const METRICS: &str = "metrics";
