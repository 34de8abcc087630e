//! Core library surface for the Simple Bible terminal app.
//!
//! The corpus and lookup modules are usable on their own: they answer verse
//! queries against the bundled translations without any I/O. The store,
//! config, logging and ui modules make up the application around them.
pub mod config;
pub mod corpus;
pub mod format;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod store;
pub mod ui;

/// The bundled corpus and its validation error.
pub use corpus::{Corpus, CorpusError};

/// Verse lookups against the bundled corpus.
pub use lookup::{get_random_verse, get_specific_verse, list_available_translations, list_books};

pub use models::{Book, ProfileError, Translation, TranslationSummary, UserProfile, Verse};

/// Profile persistence.
pub use store::{KeyValueStore, MemoryStore, ProfileStore, SqliteStore, StoreError};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
