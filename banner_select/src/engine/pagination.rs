// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decides which rows of the list are visible for a given active index.
//!
//! The algorithm works in terms of the `pointer`, which is the row (inside the page)
//! that the active item is painted on. The first visible item is then
//! `(active - pointer) mod total`.
//!
//! - Without looping ([`finite_pointer()`]) the page is clamped to the ends of the list,
//!   and the active item sits in the middle row whenever the list allows it.
//! - With looping ([`infinite_pointer()`]) the page wraps around. The pointer only moves
//!   when the user moves down by less than a page, and it never moves past the middle
//!   row. Moving up keeps the pointer where it is, which scrolls the page up.

use std::ops::Range;

/// The slice of the list that is visible on one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Index of the first visible entry.
    pub start: usize,
    /// `min(page_size, total)`.
    pub row_count: usize,
    /// Length of the whole list.
    pub total: usize,
    /// Row (inside the page) of the active entry.
    pub pointer: usize,
}

impl PageWindow {
    /// The list index shown on each row of the page, top to bottom. Wraps around when
    /// looping.
    pub fn indices(&self) -> impl Iterator<Item = usize> + use<> {
        let Self {
            start,
            row_count,
            total,
            ..
        } = *self;
        (0..row_count).map(move |row| (start + row) % total.max(1))
    }

    /// `start..start + row_count`. The end can exceed `total` when the page wraps.
    #[must_use]
    pub fn as_range(&self) -> Range<usize> { self.start..self.start + self.row_count }
}

/// Remembers where the active item was painted last time, so that looping pages scroll
/// by the smallest amount instead of jumping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationWindow {
    pointer: usize,
    last_active: usize,
}

impl PaginationWindow {
    /// Compute the visible page for this render, and remember it for the next one.
    pub fn paginate(
        &mut self,
        active: usize,
        total: usize,
        page_size: usize,
        loop_enabled: bool,
    ) -> PageWindow {
        let page_size = page_size.max(1);

        let pointer = if loop_enabled {
            infinite_pointer(active, self.last_active, total, page_size, self.pointer)
        } else {
            finite_pointer(active, total, page_size)
        };

        self.pointer = pointer;
        self.last_active = active;

        let total_nonzero = total.max(1);
        PageWindow {
            start: (active + total_nonzero - pointer % total_nonzero) % total_nonzero,
            row_count: page_size.min(total),
            total,
            pointer,
        }
    }
}

#[must_use]
pub fn finite_pointer(active: usize, total: usize, page_size: usize) -> usize {
    let middle = page_size / 2;
    if total <= page_size || active < middle {
        active
    } else if active >= total - middle {
        active + page_size - total
    } else {
        middle
    }
}

#[must_use]
pub fn infinite_pointer(
    active: usize,
    last_active: usize,
    total: usize,
    page_size: usize,
    pointer: usize,
) -> usize {
    if total <= page_size {
        return active;
    }
    if last_active < active && active - last_active < page_size {
        return (page_size / 2).min(pointer + active - last_active);
    }
    pointer
}
