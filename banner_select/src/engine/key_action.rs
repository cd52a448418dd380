// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Every keypress that the prompt reacts to falls into exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// `Enter`.
    Confirm,
    /// `Up`, or `Ctrl+P` with the `emacs` feature.
    MoveUp,
    /// `Down`, or `Ctrl+N` with the `emacs` feature.
    MoveDown,
    /// `0` to `9`.
    Digit(char),
    /// Clears the whole search buffer, not just the last char.
    Backspace,
    /// Any other printable char typed without `Ctrl` or `Alt`.
    TextChar(char),
}

/// What an input [Event] means to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSignal {
    Key(KeyAction),
    /// `Ctrl+C`.
    Interrupt,
    /// Key releases, `Esc`, `Tab`, function keys, mouse, paste, focus and resize.
    Ignored,
}

#[must_use]
pub fn classify(event: &Event) -> InputSignal {
    match event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press | KeyEventKind::Repeat,
            ..
        }) => classify_key(*code, *modifiers),
        _ => InputSignal::Ignored,
    }
}

fn classify_key(code: KeyCode, modifiers: KeyModifiers) -> InputSignal {
    let has_ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let has_ctrl_or_alt = modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match code {
        KeyCode::Char('c') if has_ctrl => InputSignal::Interrupt,
        KeyCode::Enter => InputSignal::Key(KeyAction::Confirm),
        KeyCode::Up => InputSignal::Key(KeyAction::MoveUp),
        KeyCode::Down => InputSignal::Key(KeyAction::MoveDown),
        #[cfg(feature = "emacs")]
        KeyCode::Char('p') if has_ctrl => InputSignal::Key(KeyAction::MoveUp),
        #[cfg(feature = "emacs")]
        KeyCode::Char('n') if has_ctrl => InputSignal::Key(KeyAction::MoveDown),
        KeyCode::Backspace => InputSignal::Key(KeyAction::Backspace),
        KeyCode::Char(ch) if !has_ctrl_or_alt && ch.is_ascii_digit() => {
            InputSignal::Key(KeyAction::Digit(ch))
        }
        KeyCode::Char(ch) if !has_ctrl_or_alt && !ch.is_control() => {
            InputSignal::Key(KeyAction::TextChar(ch))
        }
        _ => InputSignal::Ignored,
    }
}
