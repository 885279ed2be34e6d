//! CLI argument definitions for the university registry

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use uni_registry::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `file`, `port`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Run the interactive console.
    ///
    /// Presents the numbered management menu over an in-memory registry.
    Console,
    /// Run the network server.
    ///
    /// Listens on the configured host and port and serves the line protocol
    /// to one client at a time.
    Serve,
}

#[derive(Parser, Debug)]
#[command(
    name = "uniregistry",
    about = "University registry command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config server host
    #[arg(long = "config-host", value_name = "HOST")]
    pub config_host: Option<String>,

    /// Override config server host (short form)
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Override config server port
    #[arg(long = "config-port", value_name = "PORT")]
    pub config_port: Option<u16>,

    /// Override config server port (short form)
    #[arg(long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Transforms CLI arguments into a `ConfigOverrides` struct that can be
    /// applied to the loaded configuration. Short-form flags (e.g., `--host`)
    /// take precedence over long-form flags (e.g., `--config-host`) when both
    /// are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            host: self.host.clone().or_else(|| self.config_host.clone()),
            port: self.port.or(self.config_port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_host: None,
            host: None,
            config_port: None,
            port: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = bare_cli();

        let overrides = cli.to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.host.is_none());
        assert!(overrides.port.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli();
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.host = Some("0.0.0.0".to_string());
        cli.port = Some(4000);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.host, Some("0.0.0.0".to_string()));
        assert_eq!(overrides.port, Some(4000));
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        // Short-form flags should take precedence over long-form
        let mut cli = bare_cli();
        cli.config_host = Some("long.example".to_string());
        cli.host = Some("short.example".to_string());
        cli.config_port = Some(4000);
        cli.port = Some(5000);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.host, Some("short.example".to_string()));
        assert_eq!(overrides.port, Some(5000));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let mut cli = bare_cli();
        cli.config_host = Some("long.example".to_string());
        cli.config_port = Some(4000);

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.host, Some("long.example".to_string()));
        assert_eq!(overrides.port, Some(4000));
    }
}
