// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure composition of what the prompt looks like. Nothing here touches the terminal,
//! see [`crate::SelectComponent`] for the painter.

use crossterm::style::ContentStyle;
use smallvec::smallvec;

use crate::{ChoiceEntry, ChoiceList, IndexMode, InlineVec, PageWindow, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: ContentStyle,
}

impl Span {
    #[must_use]
    pub fn new(text: impl Into<String>, style: ContentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

pub type FrameLine = InlineVec<Span>;

/// One full paint of the prompt, top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: InlineVec<FrameLine>,
}

impl Frame {
    #[must_use]
    pub fn height(&self) -> usize { self.lines.len() }

    /// The text of each line without any styling.
    #[must_use]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }
}

/// Which hint (if any) to display on this render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTip<'a> {
    None,
    /// In the header, when the whole list fits in one page.
    Navigation(&'a str),
    /// Under the page, when it doesn't.
    Pager(&'a str),
}

/// Everything that goes into a frame while the prompt is waiting for input.
#[derive(Debug)]
pub struct IdleFrame<'a, V> {
    pub banner: &'a str,
    pub message: &'a str,
    pub help_tip: HelpTip<'a>,
    pub list: &'a ChoiceList<V>,
    pub window: PageWindow,
    pub active: usize,
}

impl<V> IdleFrame<'_, V> {
    #[must_use]
    pub fn compose(&self, theme: &Theme) -> Frame {
        let style = &theme.style;
        let mut lines: InlineVec<FrameLine> = smallvec![];

        if !self.banner.is_empty() {
            lines.push(smallvec![Span::new(self.banner, ContentStyle::default())]);
        }

        let mut header: FrameLine = smallvec![];
        push_word(&mut header, &theme.icons.idle_prefix, style.idle_prefix);
        push_word(&mut header, self.message, style.message);
        if let HelpTip::Navigation(navigation) = self.help_tip {
            push_word(&mut header, &format!("({navigation})"), style.help);
        }
        lines.push(header);

        for index in self.window.indices() {
            if let Some(entry) = self.list.get(index) {
                lines.push(compose_row(entry, index, index == self.active, theme));
            }
        }

        if let HelpTip::Pager(pager) = self.help_tip {
            lines.push(smallvec![Span::new(format!("({pager})"), style.help)]);
        }

        if let Some(description) = self
            .list
            .choice_at(self.active)
            .and_then(|it| it.description.as_deref())
        {
            lines.push(smallvec![Span::new(description, style.description)]);
        }

        Frame { lines }
    }
}

/// Separated by a single space, empty words are skipped.
fn push_word(line: &mut FrameLine, text: &str, style: ContentStyle) {
    if text.is_empty() {
        return;
    }
    if !line.is_empty() {
        line.push(Span::new(" ", ContentStyle::default()));
    }
    line.push(Span::new(text, style));
}

/// Render one row of the page. `index` is the position of the entry in the whole list.
#[must_use]
pub fn compose_row<V>(
    entry: &ChoiceEntry<V>,
    index: usize,
    is_active: bool,
    theme: &Theme,
) -> FrameLine {
    let style = &theme.style;
    let choice = match entry {
        ChoiceEntry::Separator(separator) => {
            return smallvec![Span::new(format!(" {}", separator.line), style.separator)];
        }
        ChoiceEntry::Choice(choice) => choice,
    };

    let index_label = match theme.index_mode {
        IndexMode::Number => format!("{}. ", index + 1),
        IndexMode::Hidden => String::new(),
    };

    if let Some(disabled_label) = choice.disabled.label() {
        return smallvec![Span::new(
            format!("- {index_label}{} {disabled_label}", choice.name),
            style.disabled
        )];
    }

    if is_active {
        smallvec![Span::new(
            format!("{} {index_label}{}", theme.icons.cursor, choice.name),
            style.highlight
        )]
    } else {
        smallvec![Span::new(
            format!("  {index_label}{}", choice.name),
            ContentStyle::default()
        )]
    }
}

/// The single line left behind once a choice is confirmed.
#[must_use]
pub fn compose_done_frame(message: &str, short: &str, theme: &Theme) -> Frame {
    let style = &theme.style;
    let mut line: FrameLine = smallvec![];
    push_word(&mut line, &theme.icons.done_prefix, style.done_prefix);
    push_word(&mut line, message, style.message);
    push_word(&mut line, short, style.answer);
    Frame {
        lines: smallvec![line],
    }
}
