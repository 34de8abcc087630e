//! In-memory scripture corpus. The bundled dataset is materialized once per
//! process on first access and never changes afterwards, so every lookup can
//! run against a shared `&'static Corpus` without locking.

mod bundled;

use std::collections::HashSet;
use std::sync::LazyLock;

use thiserror::Error;
use tracing::debug;

use crate::models::{Book, Translation, TranslationSummary};

static BUNDLED: LazyLock<Corpus> = LazyLock::new(|| {
    let corpus = Corpus {
        translations: bundled::translations(),
    };
    debug!(
        translations = corpus.translations.len(),
        "bundled corpus materialized"
    );
    corpus
});

/// Reasons a caller-supplied set of translations cannot form a corpus.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("a corpus needs at least one translation")]
    EmptyCorpus,
    #[error("translation code must not be blank")]
    EmptyTranslationCode,
    #[error("translation code {0} is declared more than once")]
    DuplicateTranslation(String),
}

/// Immutable set of translations in declaration order.
#[derive(Debug, Clone)]
pub struct Corpus {
    translations: Vec<Translation>,
}

impl Corpus {
    /// Build a corpus from explicit translations. Codes must be non-blank and
    /// unique; empty books and chapters are accepted because lookups report
    /// them as absence.
    pub fn new(translations: Vec<Translation>) -> Result<Self, CorpusError> {
        if translations.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        let mut seen = HashSet::new();
        for translation in &translations {
            if translation.code.trim().is_empty() {
                return Err(CorpusError::EmptyTranslationCode);
            }
            if !seen.insert(translation.code.as_str()) {
                return Err(CorpusError::DuplicateTranslation(translation.code.clone()));
            }
        }
        Ok(Self { translations })
    }

    /// The dataset compiled into the binary.
    pub fn bundled() -> &'static Corpus {
        &BUNDLED
    }

    /// `{code, name}` pairs in declaration order.
    pub fn list_translations(&self) -> Vec<TranslationSummary> {
        self.translations.iter().map(Translation::summary).collect()
    }

    /// Full translations in declaration order.
    pub fn translations(&self) -> &[Translation] {
        &self.translations
    }

    /// Translation with exactly this code, if any.
    pub fn translation(&self, code: &str) -> Option<&Translation> {
        self.translations.iter().find(|t| t.code == code)
    }

    /// Book `book_code` inside translation `code`; `None` if either is unknown.
    pub fn book(&self, code: &str, book_code: &str) -> Option<&Book> {
        self.translation(code)?.book(book_code)
    }

    /// First declared translation; the default for random draws.
    pub fn primary(&self) -> &Translation {
        // `new` and the bundled tables both guarantee at least one entry.
        &self.translations[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(code: &str) -> Translation {
        Translation {
            name: format!("Translation {code}"),
            code: code.to_string(),
            books: Vec::new(),
        }
    }

    #[test]
    fn bundled_corpus_passes_validation() {
        let translations = Corpus::bundled().translations().to_vec();
        let rebuilt = Corpus::new(translations).expect("bundled corpus should be valid");
        assert_eq!(rebuilt.list_translations(), Corpus::bundled().list_translations());
    }

    #[test]
    fn bundled_books_and_chapters_are_populated() {
        for translation in Corpus::bundled().translations() {
            assert!(!translation.books.is_empty(), "{} has no books", translation.code);
            for book in &translation.books {
                assert!(book.chapter_count() > 0, "{}/{} has no chapters", translation.code, book.code);
                for chapter in &book.chapters {
                    assert!(!chapter.is_empty(), "{}/{} has an empty chapter", translation.code, book.code);
                }
            }
        }
    }

    #[test]
    fn primary_translation_is_first_declared() {
        assert_eq!(Corpus::bundled().primary().code, "NVI");
        let listed = Corpus::bundled().list_translations();
        assert_eq!(listed[0].code, "NVI");
        assert_eq!(listed[1].code, "ACF");
    }

    #[test]
    fn rejects_duplicate_codes() {
        let err = Corpus::new(vec![translation("NVI"), translation("NVI")]).unwrap_err();
        assert_eq!(err, CorpusError::DuplicateTranslation("NVI".to_string()));
    }

    #[test]
    fn rejects_empty_and_blank_input() {
        assert_eq!(Corpus::new(Vec::new()).unwrap_err(), CorpusError::EmptyCorpus);
        assert_eq!(
            Corpus::new(vec![translation("  ")]).unwrap_err(),
            CorpusError::EmptyTranslationCode
        );
    }

    #[test]
    fn unknown_codes_resolve_to_none() {
        let corpus = Corpus::bundled();
        assert!(corpus.translation("KJV").is_none());
        assert!(corpus.book("NVI", "gn").is_none());
        assert!(corpus.book("KJV", "jo").is_none());
        assert_eq!(corpus.book("ACF", "jo").map(|b| b.name.as_str()), Some("João"));
    }
}
