//! Shared library for the university registry
//! Contains the domain models, entity stores, wire protocol, and
//! configuration used by the console and server front ends

pub mod core;

pub use self::core::config;
pub use self::core::config::{Config, ConfigOverrides};
pub use self::core::error::{DomainError, DomainResult};
pub use self::core::models;
pub use self::core::protocol;
pub use self::core::registry::{Keyed, Registry, Store};
