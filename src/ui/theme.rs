// ui/theme.rs - Colors used by the views

use ratatui::style::{Color, Style};

#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    /// Color of the `~` shown on rows past the end of the document.
    pub filler_fg: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::Rgb(248, 248, 242), // Light gray for better contrast
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            filler_fg: Color::DarkGray,
        }
    }
}

impl Theme {
    /// Defer to the terminal's own palette instead of fixed colors.
    pub fn terminal_palette() -> Self {
        Self {
            general: GeneralTheme {
                background: Color::Reset,
                foreground: Color::Reset,
            },
            ui: UiTheme {
                status_bar_bg: Color::Reset,
                status_bar_fg: Color::Reset,
                filler_fg: Color::Reset,
            },
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default()
            .fg(self.general.foreground)
            .bg(self.general.background)
    }

    pub fn filler_style(&self) -> Style {
        Style::default()
            .fg(self.ui.filler_fg)
            .bg(self.general.background)
    }

    pub fn status_bar_style(&self) -> Style {
        let style = Style::default()
            .fg(self.ui.status_bar_fg)
            .bg(self.ui.status_bar_bg);
        // With the terminal palette the bar still needs to stand out.
        if self.ui.status_bar_bg == Color::Reset {
            style.add_modifier(ratatui::style::Modifier::REVERSED)
        } else {
            style
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Modifier;

    #[test]
    fn test_default_status_bar_style() {
        let style = Theme::default().status_bar_style();
        assert_eq!(style.bg, Some(Color::Blue));
        assert_eq!(style.fg, Some(Color::White));
    }

    #[test]
    fn test_terminal_palette_reverses_status_bar() {
        let style = Theme::terminal_palette().status_bar_style();
        assert!(style.add_modifier.contains(Modifier::REVERSED));
        assert_eq!(Theme::terminal_palette().text_style().fg, Some(Color::Reset));
    }
}
