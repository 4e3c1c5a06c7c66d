//! # Theme
//!
//! Light and dark colour sets, picked by the `dark_mode` flag. Colours follow
//! the Tailwind palette steps the web version of the list used.

use ratatui::style::{Color, Modifier, Style};

use crate::core::catalog::Category;

mod tw {
    use ratatui::style::Color;

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GRAY_50: Color = Color::Rgb(249, 250, 251);
    pub const GRAY_100: Color = Color::Rgb(243, 244, 246);
    pub const GRAY_300: Color = Color::Rgb(209, 213, 219);
    pub const GRAY_400: Color = Color::Rgb(156, 163, 175);
    pub const GRAY_500: Color = Color::Rgb(107, 114, 128);
    pub const GRAY_600: Color = Color::Rgb(75, 85, 99);
    pub const GRAY_700: Color = Color::Rgb(55, 65, 81);
    pub const GRAY_800: Color = Color::Rgb(31, 41, 55);
    pub const GRAY_900: Color = Color::Rgb(17, 24, 39);
    pub const INDIGO_500: Color = Color::Rgb(99, 102, 241);
    pub const INDIGO_600: Color = Color::Rgb(79, 70, 229);
    pub const GREEN_100: Color = Color::Rgb(220, 252, 231);
    pub const GREEN_300: Color = Color::Rgb(134, 239, 172);
    pub const GREEN_600: Color = Color::Rgb(22, 163, 74);
    pub const GREEN_800: Color = Color::Rgb(22, 101, 52);
    pub const BLUE_100: Color = Color::Rgb(219, 234, 254);
    pub const BLUE_300: Color = Color::Rgb(147, 197, 253);
    pub const BLUE_600: Color = Color::Rgb(37, 99, 235);
    pub const BLUE_800: Color = Color::Rgb(30, 64, 175);
    pub const PINK_100: Color = Color::Rgb(252, 231, 243);
    pub const PINK_300: Color = Color::Rgb(249, 168, 212);
    pub const PINK_600: Color = Color::Rgb(219, 39, 119);
    pub const PINK_800: Color = Color::Rgb(157, 23, 77);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
    pub header_bg: Color,
    pub header_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
}

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self {
                background: tw::GRAY_900,
                surface: tw::GRAY_800,
                text: tw::GRAY_100,
                muted: tw::GRAY_400,
                border: tw::GRAY_600,
                accent: tw::INDIGO_500,
                highlight: tw::GRAY_700,
                header_bg: tw::GRAY_800,
                header_fg: tw::WHITE,
                button_bg: tw::INDIGO_500,
                button_fg: tw::WHITE,
            }
        } else {
            Self {
                background: tw::GRAY_50,
                surface: tw::WHITE,
                text: tw::GRAY_800,
                muted: tw::GRAY_500,
                border: tw::GRAY_300,
                accent: tw::INDIGO_600,
                highlight: tw::GRAY_100,
                header_bg: tw::INDIGO_600,
                header_fg: tw::WHITE,
                button_bg: tw::WHITE,
                button_fg: tw::INDIGO_600,
            }
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

/// Badge colours keyed by category; unrecognized categories get gray.
pub fn badge_style(category: &Category, dark_mode: bool) -> Style {
    let (fg, bg) = match (category, dark_mode) {
        (Category::Produce, false) => (tw::GREEN_600, tw::GREEN_100),
        (Category::Produce, true) => (tw::GREEN_300, tw::GREEN_800),
        (Category::Dairy, false) => (tw::BLUE_600, tw::BLUE_100),
        (Category::Dairy, true) => (tw::BLUE_300, tw::BLUE_800),
        (Category::Dessert, false) => (tw::PINK_600, tw::PINK_100),
        (Category::Dessert, true) => (tw::PINK_300, tw::PINK_800),
        (Category::Other(_), false) => (tw::GRAY_500, tw::GRAY_100),
        (Category::Other(_), true) => (tw::GRAY_400, tw::GRAY_600),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_differ() {
        assert_ne!(Theme::for_mode(false), Theme::for_mode(true));
        assert_eq!(Theme::for_mode(true).background, tw::GRAY_900);
    }

    #[test]
    fn test_known_badges_are_distinct() {
        let styles: Vec<Style> = Category::KNOWN
            .iter()
            .map(|c| badge_style(c, false))
            .collect();
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[2]);
        assert_ne!(styles[0], styles[2]);
    }

    #[test]
    fn test_unknown_category_gets_default_badge() {
        let bakery = badge_style(&Category::from("Bakery"), false);
        let frozen = badge_style(&Category::from("Frozen"), false);
        assert_eq!(bakery, frozen);
        assert_eq!(bakery.fg, Some(tw::GRAY_500));
    }
}
