//! Core module for common functionality across all front ends

pub mod config;
pub mod error;
pub mod models;
pub mod protocol;
pub mod registry;

/// Returns the current version of the crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
