// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::ValueEnum;
use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

/// When to show the navigation hints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum HelpMode {
    /// Only on the very first render.
    #[default]
    Auto,
    /// On every render.
    Always,
    Never,
}

/// Whether each row gets a `1. ` style label in front of its name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum IndexMode {
    #[default]
    Hidden,
    Number,
}

/// Localizable hint text. The parentheses are added when the hint is displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructions {
    /// Shown in the header when every item fits in one page.
    pub navigation: String,
    /// Shown under the page when some items are not visible.
    pub pager: String,
}

impl Default for Instructions {
    fn default() -> Self {
        Self {
            navigation: "Use arrow keys".to_string(),
            pager: "Use arrow keys to reveal more choices".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icons {
    pub idle_prefix: String,
    pub done_prefix: String,
    pub cursor: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            idle_prefix: "?".to_string(),
            done_prefix: "✔".to_string(),
            cursor: "❯".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    pub idle_prefix: ContentStyle,
    pub done_prefix: ContentStyle,
    pub message: ContentStyle,
    pub highlight: ContentStyle,
    pub answer: ContentStyle,
    pub help: ContentStyle,
    pub disabled: ContentStyle,
    pub description: ContentStyle,
    pub separator: ContentStyle,
}

fn fg(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        ..ContentStyle::default()
    }
}

fn with_attribute(attribute: Attribute) -> ContentStyle {
    ContentStyle {
        attributes: Attributes::from(attribute),
        ..ContentStyle::default()
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        StyleSheet {
            idle_prefix: fg(Color::Blue),
            done_prefix: fg(Color::Green),
            message: with_attribute(Attribute::Bold),
            highlight: fg(Color::Cyan),
            answer: fg(Color::Cyan),
            help: with_attribute(Attribute::Dim),
            disabled: with_attribute(Attribute::Dim),
            description: fg(Color::Cyan),
            separator: with_attribute(Attribute::Dim),
        }
    }
}

impl StyleSheet {
    /// Every element printed with the terminal's default style.
    #[must_use]
    pub fn plain() -> Self {
        let it = ContentStyle::default();
        StyleSheet {
            idle_prefix: it,
            done_prefix: it,
            message: it,
            highlight: it,
            answer: it,
            help: it,
            disabled: it,
            description: it,
            separator: it,
        }
    }

    #[must_use]
    pub fn hot_pink_style() -> Self {
        let hot_pink = Color::Rgb {
            r: 255,
            g: 0,
            b: 214,
        };
        StyleSheet {
            idle_prefix: fg(hot_pink),
            highlight: fg(hot_pink),
            answer: fg(hot_pink),
            description: fg(Color::Rgb {
                r: 190,
                g: 140,
                b: 255,
            }),
            ..StyleSheet::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    pub icons: Icons,
    pub help_mode: HelpMode,
    pub index_mode: IndexMode,
    pub style: StyleSheet,
}
