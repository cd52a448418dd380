// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::NormalizedChoice;

/// Produces the banner text for the highlighted choice and its index in the list.
/// - `Ok(Some(text))` replaces the banner, even if `text` is empty.
/// - `Ok(None)` keeps whatever the banner was showing before.
/// - `Err(_)` is returned to the caller of [`crate::select()`] as is.
pub type BannerFn<V> =
    Box<dyn Fn(&NormalizedChoice<V>, usize) -> miette::Result<Option<String>>>;

/// The last banner value that was displayed. Lives as long as one prompt invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannerCache {
    previous: String,
}

impl BannerCache {
    #[must_use]
    pub fn current(&self) -> &str { &self.previous }

    /// Run `banner_fn` (if there is one) for the highlighted choice and return the
    /// text to display. Without a `banner_fn` the banner is always empty.
    ///
    /// # Errors
    ///
    /// Whatever `banner_fn` returns.
    pub fn update<V>(
        &mut self,
        banner_fn: Option<&BannerFn<V>>,
        choice: &NormalizedChoice<V>,
        active_index: usize,
    ) -> miette::Result<&str> {
        let next = match banner_fn {
            Some(banner_fn) => banner_fn(choice, active_index)?,
            None => Some(String::new()),
        };
        if let Some(text) = next {
            self.previous = text;
        }
        Ok(&self.previous)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{ChoiceEntry, RawChoice};

    fn banner_fn(
        it: impl Fn(&NormalizedChoice<String>, usize) -> miette::Result<Option<String>> + 'static,
    ) -> BannerFn<String> {
        Box::new(it)
    }

    fn choice(name: &str) -> NormalizedChoice<String> {
        match ChoiceEntry::from(RawChoice::from(name)) {
            ChoiceEntry::Choice(it) => it,
            ChoiceEntry::Separator(_) => unreachable!(),
        }
    }

    #[test]
    fn test_null_keeps_previous_value() {
        let script = RefCell::new(vec![Some("B"), None, Some("A")]);
        let banner_fn = banner_fn(move |_, _| {
            Ok(script.borrow_mut().pop().flatten().map(ToString::to_string))
        });

        let mut cache = BannerCache::default();
        let displayed: Vec<String> = (0..3)
            .map(|index| {
                cache
                    .update(Some(&banner_fn), &choice("x"), index)
                    .unwrap()
                    .to_string()
            })
            .collect();

        assert_eq!(displayed, vec!["A", "A", "B"]);
    }

    #[test]
    fn test_null_before_anything_is_empty() {
        let banner_fn = banner_fn(|_, _| Ok(None));
        let mut cache = BannerCache::default();
        assert_eq!(cache.update(Some(&banner_fn), &choice("x"), 0).unwrap(), "");
    }

    #[test]
    fn test_empty_string_replaces_previous_value() {
        let banner_fn = banner_fn(|choice, _| {
            Ok(Some(if choice.name == "a" { "Alpha".into() } else { String::new() }))
        });
        let mut cache = BannerCache::default();
        assert_eq!(cache.update(Some(&banner_fn), &choice("a"), 0).unwrap(), "Alpha");
        assert_eq!(cache.update(Some(&banner_fn), &choice("b"), 1).unwrap(), "");
    }

    #[test]
    fn test_receives_choice_and_index() {
        let banner_fn =
            banner_fn(|choice, index| Ok(Some(format!("{}@{index}", choice.name))));
        let mut cache = BannerCache::default();
        assert_eq!(
            cache.update(Some(&banner_fn), &choice("China"), 1).unwrap(),
            "China@1"
        );
        assert_eq!(cache.current(), "China@1");
    }

    #[test]
    fn test_no_banner_fn_is_empty() {
        let mut cache = BannerCache::default();
        assert_eq!(cache.update::<String>(None, &choice("x"), 0).unwrap(), "");
    }

    #[test]
    fn test_error_passes_through() {
        let banner_fn = banner_fn(|_, _| miette::bail!("banner failed"));
        let mut cache = BannerCache::default();
        let error = cache.update(Some(&banner_fn), &choice("x"), 0).unwrap_err();
        assert_eq!(error.to_string(), "banner failed");
        assert_eq!(cache.current(), "");
    }
}
