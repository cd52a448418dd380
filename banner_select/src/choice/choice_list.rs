// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use crate::{ChoiceEntry, NormalizedChoice, RawChoice, SelectError};

/// The immutable, normalized list of rows that a prompt navigates over. It is built
/// once, and is guaranteed to contain at least one selectable entry (neither a
/// separator nor disabled).
///
/// `first` and `last` are the indices of the first and last selectable entries, and
/// they are the boundaries used when looping is turned off.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceList<V> {
    entries: Vec<ChoiceEntry<V>>,
    first: usize,
    last: usize,
}

impl<V: Display> ChoiceList<V> {
    /// Normalize every raw choice and compute the selectable bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::NoSelectableChoices`] if every entry is a separator or is
    /// disabled (this includes an empty list).
    pub fn build<I, R>(raw_choices: I) -> Result<Self, SelectError>
    where
        I: IntoIterator<Item = R>,
        R: Into<RawChoice<V>>,
    {
        let entries: Vec<ChoiceEntry<V>> = raw_choices
            .into_iter()
            .map(|it| ChoiceEntry::from(it.into()))
            .collect();

        let first = entries.iter().position(ChoiceEntry::is_selectable);
        let last = entries.iter().rposition(ChoiceEntry::is_selectable);

        match (first, last) {
            (Some(first), Some(last)) => Ok(Self {
                entries,
                first,
                last,
            }),
            _ => Err(SelectError::NoSelectableChoices),
        }
    }
}

impl<V> ChoiceList<V> {
    #[must_use]
    pub fn len(&self) -> usize { self.entries.len() }

    /// Always false for a list that was successfully built.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    #[must_use]
    pub fn first(&self) -> usize { self.first }

    #[must_use]
    pub fn last(&self) -> usize { self.last }

    #[must_use]
    pub fn entries(&self) -> &[ChoiceEntry<V>] { &self.entries }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ChoiceEntry<V>> { self.entries.get(index) }

    /// The choice at `index`, whether it is selectable or disabled. [None] for a
    /// separator or an out of range index.
    #[must_use]
    pub fn choice_at(&self, index: usize) -> Option<&NormalizedChoice<V>> {
        self.get(index).and_then(ChoiceEntry::as_choice)
    }

    #[must_use]
    pub fn is_selectable(&self, index: usize) -> bool {
        self.get(index).is_some_and(ChoiceEntry::is_selectable)
    }

    /// Index of the first selectable entry whose value equals `value`.
    #[must_use]
    pub fn position_of_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.entries.iter().position(|entry| match entry {
            ChoiceEntry::Choice(choice) => {
                entry.is_selectable() && choice.value == *value
            }
            ChoiceEntry::Separator(_) => false,
        })
    }

    /// Index of the first selectable entry whose name starts with `lowercase_prefix`,
    /// comparing case insensitively. The prefix is expected to already be lowercase.
    #[must_use]
    pub fn find_by_name_prefix(&self, lowercase_prefix: &str) -> Option<usize> {
        self.entries.iter().position(|entry| match entry {
            ChoiceEntry::Choice(choice) => {
                entry.is_selectable()
                    && choice.name.to_lowercase().starts_with(lowercase_prefix)
            }
            ChoiceEntry::Separator(_) => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::{Choice, Separator};

    fn countries() -> ChoiceList<String> {
        ChoiceList::build(["Canada", "China", "United States"]).unwrap()
    }

    #[test]
    fn test_build_computes_bounds() {
        let list = ChoiceList::<String>::build([
            RawChoice::from(Separator::default()),
            Choice::new("a".to_string()).disabled(true).into(),
            "b".into(),
            "c".into(),
            Choice::new("d".to_string()).disabled("*nope*").into(),
            Separator::default().into(),
        ])
        .unwrap();

        assert_eq!(list.len(), 6);
        assert_eq!(list.first(), 2);
        assert_eq!(list.last(), 3);
    }

    #[test]
    fn test_build_fails_when_everything_is_disabled() {
        let result = ChoiceList::<String>::build([
            RawChoice::from(Choice::new("a".to_string()).disabled(true)),
            Separator::default().into(),
            Choice::new("b".to_string()).disabled("*premium*").into(),
        ]);
        assert_eq!(result, Err(SelectError::NoSelectableChoices));
    }

    #[test]
    fn test_build_fails_for_empty_list() {
        let result = ChoiceList::<String>::build(Vec::<RawChoice<String>>::new());
        assert_eq!(result, Err(SelectError::NoSelectableChoices));
    }

    #[test]
    fn test_choice_at_skips_separators_but_not_disabled() {
        let list = ChoiceList::<String>::build([
            RawChoice::from(Separator::default()),
            Choice::new("x".to_string()).disabled(true).into(),
            "y".into(),
        ])
        .unwrap();

        assert_eq!(list.choice_at(0), None);
        assert_eq!(list.choice_at(1).map(|it| it.name.as_str()), Some("x"));
        assert_eq!(list.choice_at(2).map(|it| it.name.as_str()), Some("y"));
        assert_eq!(list.choice_at(3), None);
        assert!(!list.is_selectable(1));
        assert!(list.is_selectable(2));
        assert!(!list.is_selectable(99));
    }

    #[test_case("c", Some(0) ; "first match wins")]
    #[test_case("ch", Some(1) ; "longer prefix")]
    #[test_case("unit", Some(2) ; "lowercase prefix")]
    #[test_case("u", Some(2) ; "single char")]
    #[test_case("x", None ; "no match")]
    fn test_find_by_name_prefix(prefix: &str, expected: Option<usize>) {
        assert_eq!(countries().find_by_name_prefix(prefix), expected);
    }

    #[test]
    fn test_find_by_name_prefix_ignores_disabled() {
        let list = ChoiceList::<String>::build([
            RawChoice::from(Choice::new("Canada".to_string()).disabled(true)),
            "China".into(),
        ])
        .unwrap();
        assert_eq!(list.find_by_name_prefix("c"), Some(1));
    }

    #[test]
    fn test_position_of_value() {
        let list = ChoiceList::<i32>::build([
            Choice::new(1).disabled(true),
            Choice::new(2),
            Choice::new(3),
        ])
        .unwrap();
        assert_eq!(list.position_of_value(&3), Some(2));
        assert_eq!(list.position_of_value(&1), None);
        assert_eq!(list.position_of_value(&42), None);
    }
}
