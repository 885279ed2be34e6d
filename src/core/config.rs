//! Configuration module for the university registry

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Network server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port the server listens on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override server host
    pub host: Option<String>,
    /// Override server port
    pub port: Option<u16>,
}

impl Config {
    /// Get the `$UNI_REGISTRY` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/uniregistry`
    /// - macOS: `~/Library/Application Support/uniregistry`
    /// - Windows: `%APPDATA%\uniregistry`
    #[must_use]
    pub fn get_uniregistry_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("uniregistry")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Used when loading configuration so that newly added fields are
    /// populated with their default values. Only fields that are empty in the
    /// current config and non-empty in defaults are updated.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.server.host.is_empty() && !defaults.server.host.is_empty() {
            self.server.host.clone_from(&defaults.server.host);
            changed = true;
        }
        if self.server.port == 0 && defaults.server.port != 0 {
            self.server.port = defaults.server.port;
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Command-line arguments override configuration file values without
    /// modifying the persistent configuration file. Only non-`None` values in
    /// the overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(host) = &overrides.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    ///
    /// The file is located in the directory returned by [`get_uniregistry_dir`].
    ///
    /// [`get_uniregistry_dir`]: Self::get_uniregistry_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_uniregistry_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$UNI_REGISTRY` variable in a string
    ///
    /// Replaces occurrences of `$UNI_REGISTRY` with the actual uniregistry
    /// directory path, so configuration values can reference the config
    /// directory dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$UNI_REGISTRY") {
            let uniregistry_dir = Self::get_uniregistry_dir();
            value.replace("$UNI_REGISTRY", uniregistry_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Parses a TOML configuration string and expands any `$UNI_REGISTRY`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// Loads the compiled-in default configuration bundled with the binary.
    /// The defaults differ between debug and release builds:
    /// - Debug: Uses `DefaultConfigDebug.toml`
    /// - Release: Uses `DefaultConfigRelease.toml`
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen in practice since the defaults are compiled into
    /// the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found
    ///
    /// This is the primary way to load configuration:
    /// - If the config file exists: loads from file, merges missing fields
    ///   from defaults, saves the updated config
    /// - If it doesn't exist (first run): creates the config directory if
    ///   needed, loads defaults, saves them to file
    ///
    /// The merge behavior ensures that upgrading the application
    /// automatically adds new config fields while preserving existing user
    /// settings. Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save configuration to file
    ///
    /// Serializes the current configuration to TOML and writes it to the
    /// platform-specific config file. The config directory is created if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config cannot be serialized to TOML (shouldn't happen)
    /// - The config directory cannot be created
    /// - The file cannot be written (permissions, disk full, etc.)
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `host`: Server bind address
    /// - `port`: Server TCP port
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "host" => Some(self.server.host.clone()),
            "port" => Some(self.server.port.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Supported keys and their value formats:
    /// - `level`: String ("debug", "info", "warn", "error", "trace", "off")
    /// - `file`: String (file path, can include `$UNI_REGISTRY`)
    /// - `verbose`: Boolean ("true" or "false")
    /// - `host`: String (bind address)
    /// - `port`: Integer in the u16 range
    ///
    /// Note: This method updates the in-memory config. Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The key is not recognized
    /// - The value cannot be parsed (e.g., "maybe" for verbose boolean)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "host" => self.server.host = value.to_string(),
            "port" => {
                self.server.port = value
                    .parse::<u16>()
                    .map_err(|_| format!("Invalid port value for 'port': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Resets a single configuration value to its default, taken from the
    /// provided defaults config (typically [`from_defaults()`]).
    ///
    /// Note: This method updates the in-memory config. Call
    /// [`save()`](Config::save) to persist changes.
    ///
    /// [`from_defaults()`]: Config::from_defaults
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "host" => self.server.host.clone_from(&defaults.server.host),
            "port" => self.server.port = defaults.server.port,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. This is a
    /// destructive operation that removes all user customizations; the CLI
    /// requires confirmation before calling it.
    ///
    /// If the config file doesn't exist, this method succeeds without doing
    /// anything.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    /// (permissions, file locked, etc.)
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[server]")?;
        writeln!(f, "  host = \"{}\"", self.server.host)?;
        writeln!(f, "  port = {}", self.server.port)?;

        Ok(())
    }
}
