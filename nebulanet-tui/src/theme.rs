//! Deep-space theme tokens for the NebulaNet TUI
//!
//! # Color Palette
//! - **Background**: Near-black space
//! - **Accent**: Nebula cyan (focus, active slide, active dot)
//! - **Highlight**: Infrared amber (JWST mirror gold, headings)
//! - **Warning**: Orange (rejected actions, missing images)
//! - **Muted**: Slate blue (inactive dots, hints)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub accent: Color,
    pub highlight: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::deep_space()
    }
}

impl Theme {
    pub fn deep_space() -> Self {
        Self {
            background: Color::Rgb(10, 12, 24),
            accent: Color::Rgb(64, 224, 255),
            highlight: Color::Rgb(255, 191, 71),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(96, 112, 160),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 190),
        }
    }

    /// Color for a target classification (first `;`-separated term).
    pub fn classification_color(&self, classification: &str) -> Color {
        let head = classification.split(';').next().unwrap_or("").trim();
        match head.to_ascii_lowercase().as_str() {
            "galaxy" | "clusters of galaxies" => self.accent,
            "star" | "stellar cluster" => self.highlight,
            "solar system" => self.warning,
            _ => self.text_secondary,
        }
    }
}

pub fn accent() -> Style {
    Style::default().fg(Theme::default().accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn highlight() -> Style {
    Style::default().fg(Theme::default().highlight)
}

pub fn warning() -> Style {
    Style::default().fg(Theme::default().warning)
}

pub fn muted() -> Style {
    Style::default().fg(Theme::default().muted)
}

pub fn text() -> Style {
    Style::default().fg(Theme::default().text_primary)
}

pub fn label() -> Style {
    Style::default().fg(Theme::default().text_secondary)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(10, 12, 24));
        assert_eq!(theme.accent, Color::Rgb(64, 224, 255));
    }

    #[test]
    fn test_classification_color() {
        let theme = Theme::default();
        assert_eq!(theme.classification_color("Galaxy; Seyfert galaxy"), theme.accent);
        assert_eq!(theme.classification_color("Clusters of Galaxies"), theme.accent);
        assert_eq!(theme.classification_color("Star"), theme.highlight);
        assert_eq!(theme.classification_color("Solar System; Planet"), theme.warning);
        assert_eq!(theme.classification_color("Nebula"), theme.text_secondary);
    }
}
