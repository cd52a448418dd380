// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw (caller supplied) and normalized shapes of the things a user can choose from.
//!
//! Callers hand in [`RawChoice`] values in whatever shape is convenient: a bare label,
//! a [`Separator`], or a structured [`Choice`] record. [`crate::ChoiceList::build()`]
//! turns all of them into [`ChoiceEntry`] exactly once, and nothing past that point
//! looks at the raw shape again.

use std::fmt::Display;

pub const DEFAULT_SEPARATOR_LINE: &str = "──────────────";
pub const DEFAULT_DISABLED_LABEL: &str = "(disabled)";

/// A display only divider line. It can't be focused, searched, or chosen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Separator {
    pub line: String,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            line: DEFAULT_SEPARATOR_LINE.to_string(),
        }
    }
}

impl Separator {
    #[must_use]
    pub fn new(line: impl Into<String>) -> Self { Self { line: line.into() } }
}

/// Whether a choice can be selected. A disabled choice is still displayed, along with
/// a label that explains why it is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Disabled {
    #[default]
    No,
    /// Disabled, displayed with [`DEFAULT_DISABLED_LABEL`].
    Yes,
    /// Disabled, displayed with this label instead of the default one.
    WithLabel(String),
}

impl Disabled {
    #[must_use]
    pub fn is_disabled(&self) -> bool { !matches!(self, Disabled::No) }

    /// The text displayed after the name of a disabled choice, or [None] if the choice
    /// is not disabled.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Disabled::No => None,
            Disabled::Yes => Some(DEFAULT_DISABLED_LABEL),
            Disabled::WithLabel(label) => Some(label.as_str()),
        }
    }
}

impl From<bool> for Disabled {
    fn from(is_disabled: bool) -> Self {
        if is_disabled { Disabled::Yes } else { Disabled::No }
    }
}

impl From<&str> for Disabled {
    fn from(label: &str) -> Self { Disabled::WithLabel(label.to_string()) }
}

impl From<String> for Disabled {
    fn from(label: String) -> Self { Disabled::WithLabel(label) }
}

/// Structured choice record. Only `value` is required, the rest is filled in during
/// normalization:
/// - `name` defaults to the [Display] of `value`.
/// - `short` (shown after the prompt is done) defaults to `name`.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<V> {
    pub value: V,
    pub name: Option<String>,
    pub description: Option<String>,
    pub short: Option<String>,
    pub disabled: Disabled,
}

impl<V> Choice<V> {
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            value,
            name: None,
            description: None,
            short: None,
            disabled: Disabled::No,
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: impl Into<Disabled>) -> Self {
        self.disabled = disabled.into();
        self
    }
}

/// The shapes a caller can pass in. Convert into this with [From], eg:
/// `"Option A".into()`, `Separator::default().into()`, `Choice::new(1).into()`.
#[derive(Debug, Clone, PartialEq)]
pub enum RawChoice<V> {
    /// The value is also the name and the short name.
    Label(V),
    Separator(Separator),
    Record(Choice<V>),
}

impl From<&str> for RawChoice<String> {
    fn from(label: &str) -> Self { RawChoice::Label(label.to_string()) }
}

impl From<String> for RawChoice<String> {
    fn from(label: String) -> Self { RawChoice::Label(label) }
}

impl<V> From<Separator> for RawChoice<V> {
    fn from(separator: Separator) -> Self { RawChoice::Separator(separator) }
}

impl<V> From<Choice<V>> for RawChoice<V> {
    fn from(choice: Choice<V>) -> Self { RawChoice::Record(choice) }
}

/// A choice after normalization. Every optional field of [`Choice`] that has a
/// fallback has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedChoice<V> {
    pub value: V,
    pub name: String,
    pub description: Option<String>,
    pub short: String,
    pub disabled: Disabled,
}

/// One row of a [`crate::ChoiceList`].
#[derive(Debug, Clone, PartialEq)]
pub enum ChoiceEntry<V> {
    Choice(NormalizedChoice<V>),
    Separator(Separator),
}

impl<V> ChoiceEntry<V> {
    /// Neither a separator nor disabled.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        match self {
            ChoiceEntry::Choice(choice) => !choice.disabled.is_disabled(),
            ChoiceEntry::Separator(_) => false,
        }
    }

    #[must_use]
    pub fn as_choice(&self) -> Option<&NormalizedChoice<V>> {
        match self {
            ChoiceEntry::Choice(choice) => Some(choice),
            ChoiceEntry::Separator(_) => None,
        }
    }
}

impl<V: Display> From<RawChoice<V>> for ChoiceEntry<V> {
    fn from(raw: RawChoice<V>) -> Self {
        match raw {
            RawChoice::Separator(separator) => ChoiceEntry::Separator(separator),
            RawChoice::Label(value) => {
                let name = value.to_string();
                ChoiceEntry::Choice(NormalizedChoice {
                    value,
                    short: name.clone(),
                    name,
                    description: None,
                    disabled: Disabled::No,
                })
            }
            RawChoice::Record(choice) => {
                let name = choice.name.unwrap_or_else(|| choice.value.to_string());
                ChoiceEntry::Choice(NormalizedChoice {
                    value: choice.value,
                    short: choice.short.unwrap_or_else(|| name.clone()),
                    name,
                    description: choice.description.filter(|it| !it.is_empty()),
                    disabled: choice.disabled,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_label_is_value_name_and_short() {
        let entry = ChoiceEntry::from(RawChoice::from("Option A"));
        assert_eq!(
            entry,
            ChoiceEntry::Choice(NormalizedChoice {
                value: "Option A".to_string(),
                name: "Option A".to_string(),
                description: None,
                short: "Option A".to_string(),
                disabled: Disabled::No,
            })
        );
    }

    #[test]
    fn test_record_name_falls_back_to_value() {
        let entry = ChoiceEntry::from(RawChoice::from(Choice::new(12)));
        let choice = entry.as_choice().unwrap();
        assert_eq!(choice.name, "12");
        assert_eq!(choice.short, "12");
    }

    #[test]
    fn test_record_short_falls_back_to_name() {
        let entry =
            ChoiceEntry::from(RawChoice::from(Choice::new("ham").name("Ham")));
        let choice = entry.as_choice().unwrap();
        assert_eq!(choice.short, "Ham");

        let entry = ChoiceEntry::from(RawChoice::from(
            Choice::new("2cc9e311").name("2cc9e311 (HEAD -> main) Fix").short("2cc9e311"),
        ));
        assert_eq!(entry.as_choice().unwrap().short, "2cc9e311");
    }

    #[test]
    fn test_empty_description_is_dropped() {
        let entry = ChoiceEntry::from(RawChoice::from(Choice::new("a").description("")));
        assert_eq!(entry.as_choice().unwrap().description, None);
    }

    #[test_case(Disabled::No, true ; "enabled choice")]
    #[test_case(Disabled::Yes, false ; "disabled choice")]
    #[test_case(Disabled::from("*premium*"), false ; "disabled with label")]
    fn test_choice_is_selectable(disabled: Disabled, expected: bool) {
        let entry = ChoiceEntry::from(RawChoice::from(Choice::new("x").disabled(disabled)));
        assert_eq!(entry.is_selectable(), expected);
    }

    #[test]
    fn test_separator_is_never_selectable() {
        let entry = ChoiceEntry::<String>::from(RawChoice::from(Separator::default()));
        assert!(!entry.is_selectable());
        assert_eq!(entry.as_choice(), None);
    }

    #[test]
    fn test_disabled_label() {
        assert_eq!(Disabled::No.label(), None);
        assert_eq!(Disabled::from(true).label(), Some("(disabled)"));
        assert_eq!(Disabled::from("*premium*").label(), Some("*premium*"));
    }
}
