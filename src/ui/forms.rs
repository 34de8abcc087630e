use anyhow::{anyhow, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::models::UserProfile;

/// Message shown when the welcome form is submitted with a blank field.
pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos.";

/// State of the onboarding form shown while no profile is stored.
#[derive(Default, Clone)]
pub(crate) struct WelcomeForm {
    pub(crate) name: String,
    pub(crate) church: String,
    pub(crate) active: WelcomeField,
    pub(crate) error: Option<String>,
}

#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub(crate) enum WelcomeField {
    #[default]
    Name,
    Church,
}

impl WelcomeForm {
    pub(crate) fn toggle_field(&mut self) {
        self.active = match self.active {
            WelcomeField::Name => WelcomeField::Church,
            WelcomeField::Church => WelcomeField::Name,
        };
    }

    pub(crate) fn focus(&mut self, field: WelcomeField) {
        self.active = field;
    }

    /// Append a character to the active field. Control characters are
    /// ignored and reported back as `false`.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        self.active_value_mut().push(ch);
        true
    }

    pub(crate) fn backspace(&mut self) {
        self.active_value_mut().pop();
    }

    /// Both fields trimmed and non-blank, mirroring the disabled submit
    /// button of a touch UI.
    pub(crate) fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.church.trim().is_empty()
    }

    pub(crate) fn parse_inputs(&self) -> Result<UserProfile> {
        UserProfile::new(&self.name, &self.church).map_err(|_| anyhow!(REQUIRED_FIELDS_MESSAGE))
    }

    pub(crate) fn build_line(&self, label: &str, field: WelcomeField) -> Line<'static> {
        let value = self.value(field);
        let is_active = self.active == field;

        let display = if value.is_empty() {
            match field {
                WelcomeField::Name => "Digite seu nome".to_string(),
                WelcomeField::Church => "Nome da sua igreja".to_string(),
            }
        } else {
            value.to_string()
        };

        let style = if value.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{label}: ")),
            Span::styled(display, style),
        ])
    }

    pub(crate) fn value_len(&self, field: WelcomeField) -> usize {
        self.value(field).chars().count()
    }

    fn value(&self, field: WelcomeField) -> &str {
        match field {
            WelcomeField::Name => &self.name,
            WelcomeField::Church => &self.church,
        }
    }

    fn active_value_mut(&mut self) -> &mut String {
        match self.active {
            WelcomeField::Name => &mut self.name,
            WelcomeField::Church => &mut self.church,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(form: &mut WelcomeForm, text: &str) {
        for ch in text.chars() {
            form.push_char(ch);
        }
    }

    #[test]
    fn typing_goes_to_the_active_field() {
        let mut form = WelcomeForm::default();
        type_text(&mut form, "Ana");
        form.toggle_field();
        type_text(&mut form, "Sede");
        form.backspace();
        assert_eq!(form.name, "Ana");
        assert_eq!(form.church, "Sed");
        assert_eq!(form.value_len(WelcomeField::Church), 3);
    }

    #[test]
    fn control_characters_are_ignored() {
        let mut form = WelcomeForm::default();
        assert!(!form.push_char('\u{7}'));
        assert!(form.name.is_empty());
    }

    #[test]
    fn incomplete_form_reports_required_fields() {
        let mut form = WelcomeForm::default();
        type_text(&mut form, "Ana");
        assert!(!form.is_complete());
        let err = form.parse_inputs().unwrap_err();
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn complete_form_yields_trimmed_profile() {
        let mut form = WelcomeForm::default();
        type_text(&mut form, " Ana ");
        form.focus(WelcomeField::Church);
        type_text(&mut form, "Igreja Central ");
        let profile = form.parse_inputs().unwrap();
        assert_eq!(profile, UserProfile::new("Ana", "Igreja Central").unwrap());
    }
}
