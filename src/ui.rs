//! Ratatui front-end: the onboarding form shown until a profile is stored,
//! and the verse screen with the translation selector afterwards.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
