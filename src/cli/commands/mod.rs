//! CLI command handlers for the university registry.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod console;
pub mod serve;
