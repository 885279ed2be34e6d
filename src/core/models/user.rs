//! User accounts, roles, and the single-session directory

use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Closed set of account roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Student account
    Student,
    /// Professor account
    Professor,
    /// Administrator account
    Admin,
}

impl Role {
    /// Whether this role may add or update attendance records through the
    /// attendance proxy
    #[must_use]
    pub const fn can_manage_attendance(self) -> bool {
        matches!(self, Self::Admin | Self::Professor)
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" => Ok(Self::Student),
            "professor" => Ok(Self::Professor),
            "admin" | "administrator" => Ok(Self::Admin),
            other => Err(DomainError::validation(format!("unknown role '{other}'"))),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Student => "student",
            Self::Professor => "professor",
            Self::Admin => "admin",
        };
        write!(f, "{as_str}")
    }
}

/// A registered account
///
/// Passwords are stored and compared in clear form; this system makes no
/// attempt at credential security.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User id (front-end chosen, not the registry key)
    pub user_id: String,

    /// Display name
    pub name: String,

    /// Account role
    pub role: Role,

    /// Email (the registry key; unique)
    pub email: String,

    /// Clear-text password
    password: String,
}

impl User {
    /// Compare a candidate password against the stored one
    #[must_use]
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }

    /// Dashboard lines for display
    #[must_use]
    pub fn dashboard(&self) -> Vec<String> {
        vec![
            format!("ID: {}", self.user_id),
            format!("Name: {}", self.name),
            format!("Role: {}", self.role),
            format!("Email: {}", self.email),
        ]
    }
}

/// Process-wide account registry with the single-session rule
///
/// At most one user is logged in at any time. The directory replaces the
/// original design's hidden class-level session pointer with an explicit
/// component the front ends pass around.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectory {
    /// Accounts keyed by email
    users: BTreeMap<String, User>,

    /// Email of the currently logged-in user, if any
    current: Option<String>,
}

impl UserDirectory {
    /// Create an empty directory with no active session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            current: None,
        }
    }

    /// Register a new account
    ///
    /// # Errors
    /// Returns `Validation` if the email is already registered; the directory
    /// is left unchanged
    pub fn register(
        &mut self,
        user_id: &str,
        name: &str,
        role: Role,
        email: &str,
        password: &str,
    ) -> DomainResult<&User> {
        if self.users.contains_key(email) {
            return Err(DomainError::validation(format!(
                "email {email} is already registered"
            )));
        }
        let user = User {
            user_id: user_id.to_string(),
            name: name.to_string(),
            role,
            email: email.to_string(),
            password: password.to_string(),
        };
        self.users.insert(email.to_string(), user);
        Ok(&self.users[email])
    }

    /// Look up an account by email
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    /// Attempt to log an account in
    ///
    /// The password is checked first, then the single-session rule; a failed
    /// attempt has no side effects.
    ///
    /// # Errors
    /// - `NotFound` if no account has this email
    /// - `Validation` if the password does not match
    /// - `Conflict` if any session is already active (including this user's)
    pub fn login(&mut self, email: &str, password: &str) -> DomainResult<&User> {
        let user = self.users.get(email).ok_or_else(|| {
            DomainError::not_found(format!("no user registered with email {email}"))
        })?;
        if !user.password_matches(password) {
            return Err(DomainError::validation(format!(
                "incorrect password for {email}"
            )));
        }
        if let Some(active) = &self.current {
            let name = self
                .users
                .get(active)
                .map_or_else(|| active.clone(), |u| u.name.clone());
            return Err(DomainError::conflict(format!(
                "another user ({name}) is logged in"
            )));
        }
        self.current = Some(email.to_string());
        Ok(&self.users[email])
    }

    /// Log an account out
    ///
    /// Only the currently-logged-in account may clear the session.
    ///
    /// # Errors
    /// Returns `Conflict` if `email` is not the active session
    pub fn logout(&mut self, email: &str) -> DomainResult<()> {
        if self.current.as_deref() == Some(email) {
            self.current = None;
            Ok(())
        } else {
            Err(DomainError::conflict(
                "you are not the logged-in user".to_string(),
            ))
        }
    }

    /// The currently logged-in user, if any
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_deref().and_then(|email| self.users.get(email))
    }

    /// Number of registered accounts
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether no accounts are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory_with_amy() -> UserDirectory {
        let mut dir = UserDirectory::new();
        dir.register("U1", "Amy", Role::Student, "amy@uni.edu", "pw1")
            .unwrap();
        dir
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("PROFESSOR".parse::<Role>().unwrap(), Role::Professor);
        assert_eq!("Student".parse::<Role>().unwrap(), Role::Student);
        assert!("janitor".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_capability() {
        assert!(Role::Admin.can_manage_attendance());
        assert!(Role::Professor.can_manage_attendance());
        assert!(!Role::Student.can_manage_attendance());
    }

    #[test]
    fn test_register_duplicate_email() {
        let mut dir = directory_with_amy();

        let result = dir.register("U2", "Imposter", Role::Admin, "amy@uni.edu", "pw2");
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(dir.len(), 1);
        assert_eq!(dir.find_by_email("amy@uni.edu").unwrap().name, "Amy");
    }

    #[test]
    fn test_login_success() {
        let mut dir = directory_with_amy();

        let user = dir.login("amy@uni.edu", "pw1").unwrap();
        assert_eq!(user.name, "Amy");
        assert_eq!(dir.current_user().unwrap().email, "amy@uni.edu");
    }

    #[test]
    fn test_login_wrong_password() {
        let mut dir = directory_with_amy();

        let result = dir.login("amy@uni.edu", "wrong");
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(dir.current_user().is_none());
    }

    #[test]
    fn test_single_session_rule() {
        let mut dir = directory_with_amy();
        dir.register("U2", "Bob", Role::Professor, "bob@uni.edu", "pw2")
            .unwrap();

        dir.login("amy@uni.edu", "pw1").unwrap();

        let result = dir.login("bob@uni.edu", "pw2");
        assert!(matches!(result, Err(DomainError::Conflict(_))));
        assert_eq!(dir.current_user().unwrap().name, "Amy");
    }

    #[test]
    fn test_logout_only_active_user() {
        let mut dir = directory_with_amy();
        dir.register("U2", "Bob", Role::Professor, "bob@uni.edu", "pw2")
            .unwrap();
        dir.login("amy@uni.edu", "pw1").unwrap();

        assert!(matches!(
            dir.logout("bob@uni.edu"),
            Err(DomainError::Conflict(_))
        ));
        dir.logout("amy@uni.edu").unwrap();
        assert!(dir.current_user().is_none());

        // Session freed: Bob can now log in
        dir.login("bob@uni.edu", "pw2").unwrap();
        assert_eq!(dir.current_user().unwrap().name, "Bob");
    }
}
