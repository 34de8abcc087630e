use std::mem;

use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use tracing::info;

use crate::corpus::Corpus;
use crate::store::{KeyValueStore, ProfileStore};

use super::forms::{WelcomeField, WelcomeForm};
use super::helpers::{centered_rect, surface_error};
use super::screens::VerseScreen;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
const MISSING_VERSE_MESSAGE: &str = "Não foi possível carregar o versículo. Tente novamente.";

/// Which of the two top-level screens is visible. A stored profile always
/// means the verse screen; its absence always means the welcome form.
enum Screen {
    Welcome(WelcomeForm),
    Verses(VerseScreen),
}

/// Overlays on top of the current screen.
enum Mode {
    Normal,
    ConfirmReset,
}

struct StatusMessage {
    text: String,
    kind: StatusKind,
}

enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI.
pub struct App {
    profiles: ProfileStore<Box<dyn KeyValueStore>>,
    corpus: &'static Corpus,
    default_translation: String,
    screen: Screen,
    mode: Mode,
    status: Option<StatusMessage>,
}

impl App {
    /// Load the stored profile before the first frame and pick the starting
    /// screen from it.
    pub fn new(
        profiles: ProfileStore<Box<dyn KeyValueStore>>,
        default_translation: impl Into<String>,
    ) -> Self {
        let corpus = Corpus::bundled();
        let default_translation = default_translation.into();
        let screen = match profiles.load() {
            Some(profile) => {
                info!("stored profile found");
                Screen::Verses(VerseScreen::new(profile, corpus, &default_translation))
            }
            None => {
                info!("no stored profile, starting onboarding");
                Screen::Welcome(WelcomeForm::default())
            }
        };

        Self {
            profiles,
            corpus,
            default_translation,
            screen,
            mode: Mode::Normal,
            status: None,
        }
    }

    /// Process one key press. Returns `true` when the user asked to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        let mut exit = false;
        let screen = mem::replace(&mut self.screen, Screen::Welcome(WelcomeForm::default()));

        let confirming_reset = matches!(self.mode, Mode::ConfirmReset);

        self.screen = match (screen, confirming_reset) {
            (Screen::Verses(verses), true) => self.handle_confirm_reset(code, verses),
            (Screen::Verses(verses), false) => self.handle_verse_key(code, verses, &mut exit),
            (Screen::Welcome(form), _) => self.handle_welcome_key(code, form, &mut exit),
        };

        Ok(exit)
    }

    fn handle_welcome_key(
        &mut self,
        code: KeyCode,
        mut form: WelcomeForm,
        exit: &mut bool,
    ) -> Screen {
        match code {
            KeyCode::Esc => *exit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => form.toggle_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => match form.active {
                WelcomeField::Name => form.focus(WelcomeField::Church),
                WelcomeField::Church => return self.submit_welcome(form),
            },
            KeyCode::Char(ch) => {
                if form.push_char(ch) {
                    form.error = None;
                }
            }
            _ => {}
        }
        Screen::Welcome(form)
    }

    /// Validate and persist the profile. The form stays open with the error
    /// when either step fails.
    fn submit_welcome(&mut self, mut form: WelcomeForm) -> Screen {
        let saved = form.parse_inputs().and_then(|profile| {
            self.profiles
                .save(&profile)
                .context("failed to save profile")?;
            Ok(profile)
        });

        match saved {
            Ok(profile) => {
                info!("onboarding complete");
                self.set_status(format!("Bem-vindo(a), {}!", profile.name), StatusKind::Info);
                Screen::Verses(VerseScreen::new(
                    profile,
                    self.corpus,
                    &self.default_translation,
                ))
            }
            Err(err) => {
                let message = surface_error(&err);
                form.error = Some(message.clone());
                self.set_status(message, StatusKind::Error);
                Screen::Welcome(form)
            }
        }
    }

    fn handle_verse_key(
        &mut self,
        code: KeyCode,
        mut verses: VerseScreen,
        exit: &mut bool,
    ) -> Screen {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => *exit = true,
            KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => {
                verses.draw_verse(self.corpus);
                self.report_draw(&verses);
            }
            KeyCode::Left => self.switch_translation(&mut verses, -1),
            KeyCode::Right | KeyCode::Char('v') => self.switch_translation(&mut verses, 1),
            KeyCode::Char('i') => verses.toggle_user_info(),
            KeyCode::Char('r') => {
                self.clear_status();
                self.mode = Mode::ConfirmReset;
            }
            _ => {}
        }
        Screen::Verses(verses)
    }

    fn switch_translation(&mut self, verses: &mut VerseScreen, offset: isize) {
        verses.cycle_translation(offset, self.corpus);
        if verses.current.is_none() {
            self.report_draw(verses);
        } else if let Some(translation) = verses.selected_translation() {
            let message = format!("Versão: {translation}");
            self.set_status(message, StatusKind::Info);
        }
    }

    fn report_draw(&mut self, verses: &VerseScreen) {
        if verses.current.is_some() {
            self.clear_status();
        } else {
            self.set_status(MISSING_VERSE_MESSAGE, StatusKind::Error);
        }
    }

    fn handle_confirm_reset(&mut self, code: KeyCode, verses: VerseScreen) -> Screen {
        match code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                self.mode = Mode::Normal;
                self.set_status("Redefinição cancelada.", StatusKind::Info);
                Screen::Verses(verses)
            }
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                match self.profiles.clear().context("failed to clear profile") {
                    Ok(()) => {
                        info!("profile reset, returning to onboarding");
                        self.mode = Mode::Normal;
                        self.set_status("Dados redefinidos.", StatusKind::Info);
                        Screen::Welcome(WelcomeForm::default())
                    }
                    Err(err) => {
                        self.mode = Mode::Normal;
                        self.set_status(surface_error(&err), StatusKind::Error);
                        Screen::Verses(verses)
                    }
                }
            }
            _ => Screen::Verses(verses),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        match &self.screen {
            Screen::Welcome(form) => self.draw_welcome(frame, content_area, form),
            Screen::Verses(verses) => self.draw_verses(frame, content_area, verses),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }

        if let Mode::ConfirmReset = self.mode {
            self.draw_confirm_reset(frame, area);
        }
    }

    fn draw_welcome(&self, frame: &mut Frame, area: Rect, form: &WelcomeForm) {
        let popup_area = centered_rect(70, 60, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Bem-vindo(a)! ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let description = Paragraph::new(
            "Para começar a receber versículos bíblicos diários, precisamos conhecer você melhor.",
        )
        .wrap(Wrap { trim: true });
        frame.render_widget(description, rows[0]);

        frame.render_widget(
            Paragraph::new(form.build_line("Seu nome", WelcomeField::Name)),
            rows[2],
        );
        frame.render_widget(
            Paragraph::new(form.build_line("Sua igreja", WelcomeField::Church)),
            rows[3],
        );

        let message = if let Some(error) = &form.error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else if form.is_complete() {
            Line::from(Span::styled(
                "Enter em \"Sua igreja\" para começar a jornada espiritual",
                Style::default().fg(Color::Cyan),
            ))
        } else {
            Line::from(Span::styled(
                "Preencha seu nome e sua igreja",
                Style::default().fg(Color::Gray),
            ))
        };
        frame.render_widget(Paragraph::new(message).wrap(Wrap { trim: true }), rows[5]);

        let (prefix, row) = match form.active {
            WelcomeField::Name => ("Seu nome: ", rows[2]),
            WelcomeField::Church => ("Sua igreja: ", rows[3]),
        };
        let cursor_x = row.x.saturating_add(cursor_offset(prefix, form.value_len(form.active)));
        frame.set_cursor_position((cursor_x.min(row.right().saturating_sub(1)), row.y));
    }

    fn draw_verses(&self, frame: &mut Frame, area: Rect, verses: &VerseScreen) {
        let info_height = if verses.show_user_info { 4 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(info_height),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Olá, {}!", verses.profile.name),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                verses.date.clone(),
                Style::default().fg(Color::Gray),
            )),
        ])
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        if verses.show_user_info {
            let info = Paragraph::new(vec![
                Line::from(format!("Nome: {}", verses.profile.name)),
                Line::from(format!("Igreja: {}", verses.profile.church)),
            ])
            .block(Block::default().title("Perfil").borders(Borders::ALL));
            frame.render_widget(info, chunks[1]);
        }

        let label = verses
            .selected_translation()
            .map(|t| t.to_string())
            .unwrap_or_default();
        let selector = Paragraph::new(Line::from(vec![
            Span::styled("◀ ", Style::default().fg(Color::Cyan)),
            Span::styled(label, Style::default().fg(Color::Yellow)),
            Span::styled(" ▶", Style::default().fg(Color::Cyan)),
        ]))
        .block(Block::default().title("Versão da Bíblia").borders(Borders::ALL));
        frame.render_widget(selector, chunks[2]);

        let lines = match (&verses.current, verses.reference()) {
            (Some(verse), Some(reference)) => {
                let version_name = verses
                    .translations
                    .iter()
                    .find(|t| t.code == verse.translation_code)
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| verse.translation_code.clone());
                vec![
                    Line::from(Span::styled(
                        format!("\"{}\"", verse.text),
                        Style::default().add_modifier(Modifier::ITALIC),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        reference,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("Versão: {version_name}"),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            }
            _ => vec![Line::from(Span::styled(
                MISSING_VERSE_MESSAGE,
                Style::default().fg(Color::Red),
            ))],
        };
        let card = Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Versículo do Momento")
                    .borders(Borders::ALL),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(card, chunks[3]);
    }

    fn draw_confirm_reset(&self, frame: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title("Redefinir dados")
            .borders(Borders::ALL);
        frame.render_widget(block.clone(), popup_area);
        let inner = block.inner(popup_area);

        let lines = vec![
            Line::from("Tem certeza que deseja redefinir suas informações?"),
            Line::from(""),
            Line::from(Span::styled(
                "Pressione Y para confirmar ou N / Esc para cancelar.",
                Style::default().fg(Color::Gray),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let paragraph = Paragraph::new(vec![status_line, self.footer_instructions()])
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match (&self.screen, &self.mode) {
            (_, Mode::ConfirmReset) => Line::from(vec![
                Span::styled("[Y]", key_style),
                Span::raw(" Confirmar   "),
                Span::styled("[N/Esc]", key_style),
                Span::raw(" Cancelar"),
            ]),
            (Screen::Welcome(_), _) => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Trocar campo   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Continuar   "),
                Span::styled("[Esc]", key_style),
                Span::raw(" Sair"),
            ]),
            (Screen::Verses(_), _) => Line::from(vec![
                Span::styled("[N]", key_style),
                Span::raw(" Novo versículo   "),
                Span::styled("[←→]", key_style),
                Span::raw(" Versão   "),
                Span::styled("[I]", key_style),
                Span::raw(" Perfil   "),
                Span::styled("[R]", key_style),
                Span::raw(" Redefinir   "),
                Span::styled("[Q]", key_style),
                Span::raw(" Sair"),
            ]),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Column offset of the input cursor after `prefix` and `value_len`
/// characters, clamped to the terminal coordinate range.
fn cursor_offset(prefix: &str, value_len: usize) -> u16 {
    let offset = prefix.chars().count().saturating_add(value_len);
    u16::try_from(offset).unwrap_or(u16::MAX)
}
