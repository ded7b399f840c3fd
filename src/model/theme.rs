use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

use super::config::ThemeConfig;

/// Resolved colors for the form. Built once from `[theme]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub input: Color,
    pub accent: Color,
    pub button: Color,
    pub button_text: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0xF0, 0xF4, 0xF8),
            text: Color::Rgb(0x3C, 0x3C, 0x3C),
            input: Color::Rgb(0xE0, 0xE8, 0xF0),
            accent: Color::Rgb(0x4A, 0x4A, 0x4A),
            button: Color::Rgb(0x5A, 0x5A, 0x5A),
            button_text: Color::White,
            error: Color::Red,
        }
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        let fallback = Self::default();
        Self {
            background: parse_color("background", &config.background, fallback.background),
            text: parse_color("text", &config.text, fallback.text),
            input: parse_color("input", &config.input, fallback.input),
            accent: parse_color("accent", &config.accent, fallback.accent),
            button: parse_color("button", &config.button, fallback.button),
            button_text: parse_color("button_text", &config.button_text, fallback.button_text),
            error: parse_color("error", &config.error, fallback.error),
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn field(&self, focused: bool) -> Style {
        let style = Style::default().fg(self.text).bg(self.input);
        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Focused buttons take the darker hover color.
    pub fn button(&self, focused: bool) -> Style {
        let bg = if focused { self.accent } else { self.button };
        Style::default().fg(self.button_text).bg(bg)
    }
}

fn parse_color(key: &str, raw: &str, fallback: Color) -> Color {
    Color::from_str(raw.trim()).unwrap_or_else(|_| {
        tracing::warn!("theme.{key}: unrecognized color {raw:?}, using default");
        fallback
    })
}
