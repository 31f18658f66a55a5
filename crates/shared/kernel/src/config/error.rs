use std::borrow::Cow;

/// Errors raised while loading layered settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The underlying `config` crate failed to build or deserialize the sources.
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: ::config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Attaches human-readable context to a failing result.
pub trait ConfigErrorExt<T> {
    /// Converts the error into a [`ConfigError`] carrying `context`.
    ///
    /// # Errors
    /// Returns the original failure, now annotated with `context`.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError>;
}

impl<T> ConfigErrorExt<T> for Result<T, ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ConfigError::Config { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> ConfigErrorExt<T> for Result<T, ::config::ConfigError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ConfigError> {
        self.map_err(|source| ConfigError::Config { source, context: Some(context.into()) })
    }
}

impl From<::config::ConfigError> for ConfigError {
    #[inline]
    fn from(source: ::config::ConfigError) -> Self {
        Self::Config { source, context: None }
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_context() {
        let err = ConfigError::from(::config::ConfigError::Message("boom".to_owned()));
        assert_eq!(err.to_string(), "Config error: boom");
    }

    #[test]
    fn test_context_is_attached() {
        let raw: Result<(), ::config::ConfigError> =
            Err(::config::ConfigError::Message("boom".to_owned()));
        let err = raw.context("Failed to build config").unwrap_err();
        assert_eq!(err.to_string(), "Config error (Failed to build config): boom");

        let rewrapped: Result<(), ConfigError> = Err(err);
        let err = rewrapped.context("Retry").unwrap_err();
        assert_eq!(err.to_string(), "Config error (Retry): boom");
    }
}
