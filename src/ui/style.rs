//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette, with a
//! light variant that keeps contrast on bright backgrounds.

use ratatui::style::{Color, Modifier, Style};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

/// Color theme for the to-do screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: Style,
    pub border: Style,
    pub border_focused: Style,
    pub placeholder: Style,
    pub button: Style,
    pub button_editing: Style,
    pub edit_action: Style,
    pub delete_action: Style,
    pub row_selected: Style,
    /// Marker and text of the row currently loaded into the draft
    pub row_editing: Style,
    pub empty_hint: Style,
    pub status_bg: Color,
    pub status_fg: Color,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Theme for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            title: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border: Style::new().fg(Color::Indexed(245)),
            border_focused: Style::new().fg(Color::Yellow),
            placeholder: Style::new()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::ITALIC),
            button: Style::new()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_editing: Style::new()
                .bg(Color::Green)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            edit_action: Style::new().fg(Color::LightBlue),
            delete_action: Style::new().fg(Color::LightRed),
            row_selected: Style::new().add_modifier(Modifier::REVERSED),
            row_editing: Style::new().fg(Color::Yellow),
            empty_hint: Style::new()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::ITALIC),
            status_bg: Color::DarkGray,
            status_fg: Color::White,
        }
    }

    /// Theme for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            title: Style::new()
                .fg(Color::Indexed(24))
                .add_modifier(Modifier::BOLD),
            border: Style::new().fg(Color::Indexed(248)),
            border_focused: Style::new().fg(Color::Indexed(130)),
            placeholder: Style::new()
                .fg(Color::Indexed(244))
                .add_modifier(Modifier::ITALIC),
            button: Style::new()
                .bg(Color::Indexed(25))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_editing: Style::new()
                .bg(Color::Indexed(28))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            edit_action: Style::new().fg(Color::Indexed(25)),
            delete_action: Style::new().fg(Color::Indexed(160)),
            row_selected: Style::new().add_modifier(Modifier::REVERSED),
            row_editing: Style::new().fg(Color::Indexed(130)),
            empty_hint: Style::new()
                .fg(Color::Indexed(244))
                .add_modifier(Modifier::ITALIC),
            status_bg: Color::Indexed(252),
            status_fg: Color::Indexed(235),
        }
    }

    /// Style of the primary button for the current mode.
    pub fn submit_button(&self, editing: bool) -> Style {
        if editing {
            self.button_editing
        } else {
            self.button
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_are_bold() {
        for theme in [Theme::dark(), Theme::light()] {
            assert!(theme.button.add_modifier.contains(Modifier::BOLD));
            assert!(theme.button_editing.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn test_submit_button_differs_by_mode() {
        let theme = Theme::default();
        assert_ne!(theme.submit_button(false), theme.submit_button(true));
    }

    #[test]
    fn test_for_mode_selects_light() {
        assert_eq!(Theme::for_mode(ThemeMode::Light), Theme::light());
    }
}
