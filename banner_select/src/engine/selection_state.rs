// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ChoiceList;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

/// Holds the index of the highlighted (active) row. The only ways to change it are
/// [`SelectionState::move_cursor()`] and [`SelectionState::jump_to()`], and both of
/// them only ever land on a selectable entry of the [`ChoiceList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    active: usize,
}

impl SelectionState {
    /// Start on the entry matching `default` if there is one, and it is selectable.
    /// Otherwise start on the first selectable entry.
    #[must_use]
    pub fn new<V: PartialEq>(list: &ChoiceList<V>, default: Option<&V>) -> Self {
        let active = default
            .and_then(|value| list.position_of_value(value))
            .unwrap_or(list.first());
        Self { active }
    }

    #[must_use]
    pub fn active(&self) -> usize { self.active }

    /// Step one row in `direction`, skipping over separators and disabled entries.
    /// Wraps around the ends of the list. When `loop_enabled` is false this is a no-op
    /// at the boundary (`first` going up, `last` going down).
    ///
    /// Returns true if the active index changed.
    pub fn move_cursor<V>(
        &mut self,
        list: &ChoiceList<V>,
        direction: Direction,
        loop_enabled: bool,
    ) -> bool {
        let at_boundary = match direction {
            Direction::Up => self.active == list.first(),
            Direction::Down => self.active == list.last(),
        };
        if !loop_enabled && at_boundary {
            return false;
        }

        let len = list.len();
        let mut next = self.active;
        for _ in 0..len {
            next = match direction {
                Direction::Up => (next + len - 1) % len,
                Direction::Down => (next + 1) % len,
            };
            if list.is_selectable(next) {
                break;
            }
        }

        self.set_active(list, next)
    }

    /// Jump straight to `index`. Out of range or unselectable targets are ignored.
    ///
    /// Returns true if the active index changed.
    pub fn jump_to<V>(&mut self, list: &ChoiceList<V>, index: usize) -> bool {
        self.set_active(list, index)
    }

    fn set_active<V>(&mut self, list: &ChoiceList<V>, index: usize) -> bool {
        if !list.is_selectable(index) || index == self.active {
            return false;
        }
        self.active = index;
        true
    }
}
