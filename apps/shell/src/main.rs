use anyhow::Context;
use fkit::domain::settings::{LogSettings, ShellSettings};
use fkit::kernel::config::{DEFAULT_SETTINGS_PATH, load_config};
use fkit::kernel::utils::format_message;
use fkit_logger::{LevelFilter, Logger, LoggerBuilder, WithName};
use std::io::Write;

const GREETING_NAME: &str = "World";
const GREETING_COUNT: i64 = 42;

fn main() -> anyhow::Result<()> {
    let settings: ShellSettings = load_config(Some(DEFAULT_SETTINGS_PATH))?;
    let _logger = logger_from(&settings.log)?.init()?;

    tracing::info!(name = GREETING_NAME, count = GREETING_COUNT, "Printing greeting");

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", format_message(GREETING_NAME, GREETING_COUNT))
        .context("Failed to write greeting")?;

    Ok(())
}

fn logger_from(settings: &LogSettings) -> anyhow::Result<LoggerBuilder<WithName>> {
    let level: LevelFilter = settings
        .level
        .parse()
        .with_context(|| format!("Invalid log level '{}'", settings.level))?;

    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(level)
        .console(settings.console)
        .max_files(settings.max_files)
        .json(settings.json);

    if let Some(filter) = &settings.filter {
        builder = builder.env_filter(filter.clone());
    }
    if let Some(directory) = &settings.directory {
        builder = builder.directory(directory.clone());
    }

    Ok(builder)
}
