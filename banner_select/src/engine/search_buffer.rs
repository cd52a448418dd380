// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use tokio::time::Instant;

/// How long the buffer survives after the last digit or text keystroke.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(700);

/// How the buffer reads as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPosition {
    /// Empty, or has a char that is not an ASCII digit.
    NotNumeric,
    /// 1-based, not yet checked against the list.
    Position(usize),
    /// All digits, but too large for a [usize].
    OutOfRange,
}

/// Keystrokes typed in quick succession, kept in lowercase. The same text is read
/// either as a 1-based position (when it is all ASCII digits) or as a name prefix.
///
/// The buffer owns at most one pending reset, modeled as a deadline rather than a
/// spawned timer task. The event loop sleeps until [`SearchBuffer::reset_deadline()`]
/// and then calls [`SearchBuffer::on_reset_deadline_elapsed()`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchBuffer {
    text: String,
    reset_deadline: Option<Instant>,
}

impl SearchBuffer {
    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.text.is_empty() }

    /// Append `ch` (lowercased) and return the accumulated text.
    pub fn push_char(&mut self, ch: char) -> &str {
        self.text.extend(ch.to_lowercase());
        &self.text
    }

    /// The buffer read as a 1-based position. Only a buffer where every char is an
    /// ASCII digit is numeric.
    #[must_use]
    pub fn as_position(&self) -> SearchPosition {
        if self.text.is_empty() || !self.text.chars().all(|it| it.is_ascii_digit()) {
            return SearchPosition::NotNumeric;
        }
        match self.text.parse::<usize>() {
            Ok(position) => SearchPosition::Position(position),
            Err(_) => SearchPosition::OutOfRange,
        }
    }

    pub fn clear(&mut self) { self.text.clear(); }

    pub fn cancel_reset(&mut self) { self.reset_deadline = None; }

    /// Replace any pending reset with one that fires [`SEARCH_DEBOUNCE`] after `now`.
    pub fn schedule_reset(&mut self, now: Instant) {
        self.reset_deadline = Some(now + SEARCH_DEBOUNCE);
    }

    #[must_use]
    pub fn reset_deadline(&self) -> Option<Instant> { self.reset_deadline }

    pub fn on_reset_deadline_elapsed(&mut self) {
        self.reset_deadline = None;
        self.text.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_push_char_lowercases() {
        let mut buffer = SearchBuffer::default();
        buffer.push_char('U');
        buffer.push_char('n');
        assert_eq!(buffer.push_char('I'), "uni");
    }

    #[test_case("12", SearchPosition::Position(12) ; "whole number")]
    #[test_case("007", SearchPosition::Position(7) ; "leading zeros")]
    #[test_case("0", SearchPosition::Position(0) ; "zero is parsed but out of range")]
    #[test_case("7.", SearchPosition::NotNumeric ; "trailing dot")]
    #[test_case("7.1", SearchPosition::NotNumeric ; "decimal")]
    #[test_case("-1", SearchPosition::NotNumeric ; "sign")]
    #[test_case("", SearchPosition::NotNumeric ; "empty")]
    #[test_case("99999999999999999999999999", SearchPosition::OutOfRange ; "overflow")]
    fn test_as_position(typed: &str, expected: SearchPosition) {
        let mut buffer = SearchBuffer::default();
        for ch in typed.chars() {
            buffer.push_char(ch);
        }
        assert_eq!(buffer.as_position(), expected);
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_replaces_pending_reset() {
        let mut buffer = SearchBuffer::default();
        let start = Instant::now();

        buffer.schedule_reset(start);
        assert_eq!(buffer.reset_deadline(), Some(start + SEARCH_DEBOUNCE));

        tokio::time::advance(Duration::from_millis(400)).await;
        let later = Instant::now();
        buffer.schedule_reset(later);
        assert_eq!(buffer.reset_deadline(), Some(later + SEARCH_DEBOUNCE));

        buffer.cancel_reset();
        assert_eq!(buffer.reset_deadline(), None);
    }

    #[tokio::test]
    async fn test_deadline_elapsed_clears_text() {
        let mut buffer = SearchBuffer::default();
        buffer.push_char('c');
        buffer.schedule_reset(Instant::now());
        buffer.on_reset_deadline_elapsed();
        assert!(buffer.is_empty());
        assert_eq!(buffer.reset_deadline(), None);
    }
}
