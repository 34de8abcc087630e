//! Domain models shared by the corpus, the lookup functions, the profile store
//! and the TUI. They stay plain data holders: the corpus owns the nested
//! translation/book/chapter structure, the lookup layer hands out `Verse`
//! records, and the store round-trips `UserProfile` as JSON.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single verse resolved from the corpus. Only the lookup layer builds these;
/// everything downstream treats them as read-only.
///
/// The serialized shape is `{ book, abbrev, chapter, verse, text, version }`
/// so the record can be handed to other tooling unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Display name of the book, e.g. "João".
    #[serde(rename = "book")]
    pub book_name: String,
    /// Book code within its translation, e.g. "jo".
    #[serde(rename = "abbrev")]
    pub book_code: String,
    /// 1-based chapter number.
    pub chapter: u32,
    /// 1-based verse number.
    pub verse: u32,
    pub text: String,
    /// Code of the translation the verse came from, e.g. "NVI".
    #[serde(rename = "version")]
    pub translation_code: String,
}

/// A book inside one translation. Chapters are stored 0-based here, while the
/// public lookup API speaks 1-based chapter and verse numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "abbrev")]
    pub code: String,
    #[serde(rename = "book")]
    pub name: String,
    pub chapters: Vec<Vec<String>>,
}

impl Book {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}

/// A translation (edition) of the scripture text. `code` is the unique key
/// used everywhere else: the selector, the persisted config and `Verse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub name: String,
    #[serde(rename = "abbreviation")]
    pub code: String,
    pub books: Vec<Book>,
}

impl Translation {
    /// Find a book by its code. Codes are only meaningful within a single
    /// translation, so the same code may resolve differently elsewhere.
    pub fn book(&self, code: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.code == code)
    }

    pub fn summary(&self) -> TranslationSummary {
        TranslationSummary {
            code: self.code.clone(),
            name: self.name.clone(),
        }
    }
}

/// The light-weight `{code, name}` pair the translation selector lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationSummary {
    pub code: String,
    pub name: String,
}

impl fmt::Display for TranslationSummary {
    /// Selector label, e.g. "Nova Versão Internacional (NVI)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

/// Onboarding data captured by the welcome form and persisted as a single JSON
/// blob. Both fields are required and stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub church: String,
}

/// Validation failures raised while building a `UserProfile` from raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("name is required")]
    MissingName,
    #[error("church is required")]
    MissingChurch,
}

impl UserProfile {
    /// Trim both inputs and reject blank ones. The welcome form relies on this
    /// so the store never sees a half-filled profile.
    pub fn new(name: &str, church: &str) -> Result<Self, ProfileError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProfileError::MissingName);
        }
        let church = church.trim();
        if church.is_empty() {
            return Err(ProfileError::MissingChurch);
        }
        Ok(Self {
            name: name.to_string(),
            church: church.to_string(),
        })
    }
}
