//! Verse lookups over a `Corpus`. Every function here is total: an unknown
//! translation, book, chapter or verse comes back as `None` (or an empty book
//! list), never as an error or a panic.
//!
//! The free functions at the bottom run against the bundled corpus and are
//! what the TUI calls; the `Corpus` methods exist so tests and other tooling
//! can supply their own data and a seeded RNG.

use rand::Rng;

use crate::corpus::Corpus;
use crate::models::{Book, Translation, TranslationSummary, Verse};

impl Corpus {
    /// Same as `list_translations`, kept alongside the other lookups.
    pub fn list_available_translations(&self) -> Vec<TranslationSummary> {
        self.list_translations()
    }

    /// Resolve one verse by exact 1-based coordinates.
    pub fn specific_verse(
        &self,
        translation_code: &str,
        book_code: &str,
        chapter: u32,
        verse: u32,
    ) -> Option<Verse> {
        let translation = self.translation(translation_code)?;
        let book = translation.book(book_code)?;
        let chapter_index = to_index(chapter)?;
        let verse_index = to_index(verse)?;
        let text = book.chapters.get(chapter_index)?.get(verse_index)?;

        Some(build_verse(translation, book, chapter, verse, text))
    }

    /// Draw one verse uniformly at each level (book, then chapter, then verse)
    /// of the requested translation, or of the primary one when `None`.
    ///
    /// Each level is drawn exactly once: landing on an empty book or chapter
    /// yields `None` instead of re-drawing, and callers are expected to retry.
    pub fn random_verse_with<R: Rng + ?Sized>(
        &self,
        translation_code: Option<&str>,
        rng: &mut R,
    ) -> Option<Verse> {
        let translation = match translation_code {
            Some(code) => self.translation(code)?,
            None => self.primary(),
        };
        if translation.books.is_empty() {
            return None;
        }

        let book = &translation.books[rng.gen_range(0..translation.books.len())];
        if book.chapters.is_empty() {
            return None;
        }

        let chapter_index = rng.gen_range(0..book.chapters.len());
        let chapter = &book.chapters[chapter_index];
        if chapter.is_empty() {
            return None;
        }

        let verse_index = rng.gen_range(0..chapter.len());
        Some(build_verse(
            translation,
            book,
            to_number(chapter_index),
            to_number(verse_index),
            &chapter[verse_index],
        ))
    }

    /// `random_verse_with` backed by the thread-local generator.
    pub fn random_verse(&self, translation_code: Option<&str>) -> Option<Verse> {
        self.random_verse_with(translation_code, &mut rand::thread_rng())
    }

    /// Books of a translation in declaration order. Unknown codes yield an
    /// empty slice rather than `None`.
    pub fn list_books(&self, translation_code: &str) -> &[Book] {
        self.translation(translation_code)
            .map(|translation| translation.books.as_slice())
            .unwrap_or(&[])
    }
}

/// 1-based public number to 0-based storage index; 0 has no index.
fn to_index(number: u32) -> Option<usize> {
    number.checked_sub(1).map(|index| index as usize)
}

fn to_number(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}

fn build_verse(
    translation: &Translation,
    book: &Book,
    chapter: u32,
    verse: u32,
    text: &str,
) -> Verse {
    Verse {
        book_name: book.name.clone(),
        book_code: book.code.clone(),
        chapter,
        verse,
        text: text.to_string(),
        translation_code: translation.code.clone(),
    }
}

/// `{code, name}` of every bundled translation, in declaration order.
pub fn list_available_translations() -> Vec<TranslationSummary> {
    Corpus::bundled().list_available_translations()
}

/// Random verse from the bundled corpus; `None` picks the primary translation.
pub fn get_random_verse(translation_code: Option<&str>) -> Option<Verse> {
    Corpus::bundled().random_verse(translation_code)
}

/// Verse at exact 1-based coordinates in the bundled corpus.
pub fn get_specific_verse(
    translation_code: &str,
    book_code: &str,
    chapter: u32,
    verse: u32,
) -> Option<Verse> {
    Corpus::bundled().specific_verse(translation_code, book_code, chapter, verse)
}

/// Books of a bundled translation; empty for an unknown code.
pub fn list_books(translation_code: &str) -> &'static [Book] {
    Corpus::bundled().list_books(translation_code)
}
