//! Tool configuration parsed from environment variables.
//!
//! All settings can be overridden via environment variables prefixed with
//! `PERMISSION_CHECK_`, and command line flags take precedence over both.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::CheckError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn` so that normal output stays quiet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes compiled clause traces.
    Trace,
    /// Debug-level information such as skipped operators.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warnings, including denied malformed clauses.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CheckError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "PERMISSION_CHECK_LOG_LEVEL";
/// Environment variable holding the default catalog path.
pub const CATALOG_VAR: &str = "PERMISSION_CHECK_CATALOG";

/// Configuration for the command line tool.
///
/// # Environment Variables
///
/// - `PERMISSION_CHECK_LOG_LEVEL`: Sets the log level (trace, debug, info,
///   warn, error)
/// - `PERMISSION_CHECK_CATALOG`: Catalog definition used when the `catalog`
///   command is given no path
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Catalog definition used when none is passed explicitly.
    pub catalog: Option<PathBuf>,
}

impl CheckConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values. An empty catalog variable
    /// counts as unset.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CheckError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidConfig` if a variable contains an invalid
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let catalog = lookup(CATALOG_VAR)
            .filter(|val| !val.is_empty())
            .map(PathBuf::from);

        Ok(Self { log_level, catalog })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults.
    #[must_use]
    pub fn apply_overrides(mut self, log_level: Option<LogLevel>, catalog: Option<PathBuf>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(path) = catalog {
            self.catalog = Some(path);
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Resolve the catalog path to use.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::MissingCatalog` when no path is configured.
    pub fn catalog_path(&self) -> Result<&PathBuf, CheckError> {
        self.catalog.as_ref().ok_or(CheckError::MissingCatalog)
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("Warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_case_insensitively(#[case] input: &str, #[case] expected: LogLevel) {
        assert_eq!(input.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn config_default_values() {
        let config = CheckConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(config.catalog.is_none());
        assert!(matches!(
            config.catalog_path(),
            Err(CheckError::MissingCatalog)
        ));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = CheckConfig::default()
            .apply_overrides(Some(LogLevel::Debug), Some(PathBuf::from("perms.json")));
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.catalog_path().unwrap(), &PathBuf::from("perms.json"));

        let config = config.apply_overrides(None, None);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.catalog.is_some());
    }

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
        }
    }

    #[test]
    fn from_lookup_reads_variables() {
        let vars = [(LOG_LEVEL_VAR, "trace"), (CATALOG_VAR, "catalog.json")];
        let config = CheckConfig::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.catalog, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn from_lookup_ignores_empty_catalog() {
        let vars = [(CATALOG_VAR, "")];
        let config = CheckConfig::from_lookup(lookup(&vars)).unwrap();
        assert!(config.catalog.is_none());
    }

    #[test]
    fn from_lookup_rejects_invalid_log_level() {
        let vars = [(LOG_LEVEL_VAR, "verbose")];
        let result = CheckConfig::from_lookup(lookup(&vars));
        assert!(matches!(result, Err(CheckError::InvalidConfig(_))));
    }
}
