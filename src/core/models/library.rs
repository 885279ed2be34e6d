//! Library lending ledger

use crate::core::error::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Catalog entry for a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Author recorded when the title was first added (first-write-wins)
    pub author: String,
    /// Category recorded when the title was first added (first-write-wins)
    pub category: String,
    /// Copies on the shelf; never negative
    pub copies: u32,
}

/// A student registered with a library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Student name at registration time
    pub name: String,
    /// Borrowed titles, one entry per outstanding loan (duplicates allowed)
    borrowed: Vec<String>,
}

impl Member {
    /// Outstanding borrowed titles, one entry per loan
    #[must_use]
    pub fn borrowed(&self) -> &[String] {
        &self.borrowed
    }
}

/// A catalog search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookMatch {
    /// Matching title
    pub title: String,
    /// Author
    pub author: String,
    /// Category
    pub category: String,
    /// Copies currently on the shelf
    pub copies: u32,
}

/// Outcome of returning a title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The title was removed from the borrower's list and reshelved
    Returned,
    /// The borrower never had the title on their list; copies were still
    /// incremented (documented asymmetry)
    NotBorrowed,
}

/// Per-library lending state
///
/// Each library keeps its own catalog and its own member registrations;
/// multiple libraries are fully independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// Library id (unique across the library repository)
    pub id: String,

    /// Catalog keyed by title
    books: BTreeMap<String, Book>,

    /// Registered members keyed by student id
    members: BTreeMap<String, Member>,
}

impl Library {
    /// Create a new empty library
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self {
            id,
            books: BTreeMap::new(),
            members: BTreeMap::new(),
        }
    }

    /// Add copies of a title to the catalog
    ///
    /// An existing title gains copies; its author and category are NOT
    /// updated (first-write-wins for metadata). A new title creates a fresh
    /// entry.
    ///
    /// # Returns
    /// The total copies on the shelf after the add
    pub fn add_book(&mut self, title: &str, author: &str, category: &str, copies: u32) -> u32 {
        let entry = self
            .books
            .entry(title.to_string())
            .and_modify(|book| book.copies += copies)
            .or_insert_with(|| Book {
                author: author.to_string(),
                category: category.to_string(),
                copies,
            });
        entry.copies
    }

    /// Register a student with this library (idempotent)
    ///
    /// # Returns
    /// `true` if newly registered, `false` if the id was already registered
    /// (no change)
    pub fn register_student(&mut self, student_id: &str, student_name: &str) -> bool {
        if self.members.contains_key(student_id) {
            return false;
        }
        self.members.insert(
            student_id.to_string(),
            Member {
                name: student_name.to_string(),
                borrowed: Vec::new(),
            },
        );
        true
    }

    /// Whether a student id is registered with this library
    #[must_use]
    pub fn is_registered(&self, student_id: &str) -> bool {
        self.members.contains_key(student_id)
    }

    /// Look up a registered member
    #[must_use]
    pub fn member(&self, student_id: &str) -> Option<&Member> {
        self.members.get(student_id)
    }

    /// Copies of a title currently on the shelf (0 if the title is unknown)
    #[must_use]
    pub fn copies_available(&self, title: &str) -> u32 {
        self.books.get(title).map_or(0, |book| book.copies)
    }

    /// Borrow a title
    ///
    /// On success decrements copies and appends the title to the member's
    /// borrowed list; a member may hold the same title more than once.
    ///
    /// # Errors
    /// - `NotFound` if the student is not registered with this library
    /// - `Conflict` if the title is absent or has no copies on the shelf
    pub fn borrow(&mut self, student_id: &str, title: &str) -> DomainResult<()> {
        if !self.members.contains_key(student_id) {
            return Err(DomainError::not_found(format!(
                "student with ID '{student_id}' is not registered in the library"
            )));
        }
        match self.books.get_mut(title) {
            Some(book) if book.copies > 0 => {
                book.copies -= 1;
            }
            _ => {
                return Err(DomainError::conflict(format!(
                    "book '{title}' is not available"
                )));
            }
        }
        if let Some(member) = self.members.get_mut(student_id) {
            member.borrowed.push(title.to_string());
        }
        Ok(())
    }

    /// Return a title
    ///
    /// Copies are incremented unconditionally once the student and title pass
    /// the existence checks; one occurrence is removed from the borrowed list
    /// only if present there (documented asymmetry).
    ///
    /// # Errors
    /// - `NotFound` if the student is not registered with this library
    /// - `NotFound` if the title was never known to this library
    pub fn return_book(&mut self, student_id: &str, title: &str) -> DomainResult<ReturnOutcome> {
        if !self.members.contains_key(student_id) {
            return Err(DomainError::not_found(format!(
                "student with ID '{student_id}' is not registered in the library"
            )));
        }
        let Some(book) = self.books.get_mut(title) else {
            return Err(DomainError::not_found(format!(
                "book '{title}' does not belong to this library"
            )));
        };
        book.copies += 1;

        let outcome = self.members.get_mut(student_id).map_or(
            ReturnOutcome::NotBorrowed,
            |member| {
                member
                    .borrowed
                    .iter()
                    .position(|t| t == title)
                    .map_or(ReturnOutcome::NotBorrowed, |pos| {
                        member.borrowed.remove(pos);
                        ReturnOutcome::Returned
                    })
            },
        );
        Ok(outcome)
    }

    /// Case-insensitive substring search over title, author, and category
    ///
    /// # Returns
    /// All matching catalog entries; empty when nothing matches
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<BookMatch> {
        let needle = keyword.to_lowercase();
        self.books
            .iter()
            .filter(|(title, book)| {
                title.to_lowercase().contains(&needle)
                    || book.author.to_lowercase().contains(&needle)
                    || book.category.to_lowercase().contains(&needle)
            })
            .map(|(title, book)| BookMatch {
                title: title.clone(),
                author: book.author.clone(),
                category: book.category.clone(),
                copies: book.copies,
            })
            .collect()
    }
}
