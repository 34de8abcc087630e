use tracing::debug;

use crate::corpus::Corpus;
use crate::format::{format_reference, today};
use crate::models::{TranslationSummary, UserProfile, Verse};

use super::helpers::wrap_index;

/// State behind the verse display: who is greeted, which translation is
/// selected and the verse currently on screen (`None` renders the retry hint).
pub(crate) struct VerseScreen {
    pub(crate) profile: UserProfile,
    pub(crate) date: String,
    pub(crate) translations: Vec<TranslationSummary>,
    pub(crate) selected: usize,
    pub(crate) current: Option<Verse>,
    pub(crate) show_user_info: bool,
}

impl VerseScreen {
    /// Build the screen for `profile` and draw the first verse from
    /// `default_translation` (the primary translation if the code is unknown).
    pub(crate) fn new(profile: UserProfile, corpus: &Corpus, default_translation: &str) -> Self {
        let translations = corpus.list_available_translations();
        let selected = translations
            .iter()
            .position(|t| t.code == default_translation)
            .unwrap_or(0);
        let mut screen = Self {
            profile,
            date: today(),
            translations,
            selected,
            current: None,
            show_user_info: false,
        };
        screen.draw_verse(corpus);
        screen
    }

    pub(crate) fn selected_translation(&self) -> Option<&TranslationSummary> {
        self.translations.get(self.selected)
    }

    /// Replace the current verse with a fresh random draw.
    pub(crate) fn draw_verse(&mut self, corpus: &Corpus) {
        let code = self.translations.get(self.selected).map(|t| t.code.as_str());
        self.current = corpus.random_verse(code);
        match &self.current {
            Some(verse) => debug!(
                translation = %verse.translation_code,
                book = %verse.book_code,
                chapter = verse.chapter,
                verse = verse.verse,
                "drew verse"
            ),
            None => debug!(translation = ?code, "random draw came back empty"),
        }
    }

    /// Move the selector and immediately draw from the new translation.
    pub(crate) fn cycle_translation(&mut self, offset: isize, corpus: &Corpus) {
        self.selected = wrap_index(self.selected, offset, self.translations.len());
        self.draw_verse(corpus);
    }

    pub(crate) fn toggle_user_info(&mut self) {
        self.show_user_info = !self.show_user_info;
    }

    pub(crate) fn reference(&self) -> Option<String> {
        self.current
            .as_ref()
            .map(|verse| format_reference(&verse.book_name, verse.chapter, verse.verse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(default_translation: &str) -> VerseScreen {
        VerseScreen::new(
            UserProfile::new("Ana", "Igreja").unwrap(),
            Corpus::bundled(),
            default_translation,
        )
    }

    #[test]
    fn starts_on_requested_translation_with_a_verse() {
        let screen = screen("ACF");
        assert_eq!(screen.selected_translation().unwrap().code, "ACF");
        assert_eq!(screen.current.as_ref().unwrap().translation_code, "ACF");
        assert!(screen.reference().is_some());
    }

    #[test]
    fn unknown_default_selects_primary() {
        let screen = screen("KJV");
        assert_eq!(screen.selected, 0);
    }

    #[test]
    fn cycling_wraps_and_redraws() {
        let mut screen = screen("NVI");
        screen.cycle_translation(1, Corpus::bundled());
        assert_eq!(screen.current.as_ref().unwrap().translation_code, "ACF");
        screen.cycle_translation(1, Corpus::bundled());
        assert_eq!(screen.selected_translation().unwrap().code, "NVI");
        screen.cycle_translation(-1, Corpus::bundled());
        assert_eq!(screen.selected_translation().unwrap().code, "ACF");
    }
}
