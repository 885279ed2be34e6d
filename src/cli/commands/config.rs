//! Config command handler
//!
//! Successful reads and writes print directly; failures bubble up as plain
//! messages so the binary renders them once and exits non-zero.

use crate::args::ConfigSubcommand;
use std::io::{self, Write};
use uni_registry::config::Config;

/// Dispatch a config subcommand
///
/// # Errors
/// Returns a rendered message when the key is unknown, the value is invalid,
/// or the config file cannot be written
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config.get(k).ok_or_else(|| unknown_key(k))?;
            println!("{value}");
        }
        None => {
            println!("\n=== uniregistry configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    persist(config)?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    persist(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Reset all uniregistry settings to their defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    let answer = response.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key '{key}' (expected one of: level, file, verbose, host, port)")
}
