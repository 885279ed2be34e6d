//! Administrator model

use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Represents an administrative staff member
///
/// Unlike the other entities, the admin id is numeric; raw front-end input is
/// validated at the parse boundary so a non-integer assignment can never
/// clobber an existing id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    /// Admin id (integer, unique across the admin repository)
    id: i64,

    /// Full name
    pub name: String,

    /// Administrative role title (e.g. "Registrar")
    pub role: String,

    /// Contact info
    pub contact: String,

    /// Contact email
    pub email: String,
}

impl Admin {
    /// Create a new administrator
    #[must_use]
    pub const fn new(id: i64, name: String, role: String, contact: String, email: String) -> Self {
        Self {
            id,
            name,
            role,
            contact,
            email,
        }
    }

    /// The numeric admin id
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Replace the admin id from raw textual input
    ///
    /// # Errors
    /// Returns `Validation` if `raw` is not an integer; the prior id is left
    /// unchanged
    pub fn set_id_from_str(&mut self, raw: &str) -> DomainResult<()> {
        let new_id: i64 = raw
            .trim()
            .parse()
            .map_err(|_| DomainError::validation("admin id must be an integer"))?;
        self.id = new_id;
        Ok(())
    }
}
