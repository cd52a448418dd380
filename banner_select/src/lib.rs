// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_banner_select
//!
//! An async, single choice select prompt for CLI apps. On top of the usual arrow key
//! navigation it has:
//!
//! 1. **Jump by number**: type `12` to highlight the 12th item.
//! 2. **Incremental search**: type the first few letters of an item's name. What was
//!    typed is forgotten after 700ms of inactivity.
//! 3. **Pagination**: a fixed size page that follows the cursor, optionally wrapping
//!    around from the last item to the first.
//! 4. **Banner**: a line above the prompt computed from the highlighted item, eg: a
//!    preview or a hint. A banner function can return `None` to keep the previous
//!    banner.
//!
//! Separators and disabled items are displayed, but can never be highlighted.
//!
//! ```no_run
//! use r3bl_banner_select::{Choice, DefaultIoDevices, RawChoice, SelectConfig, Separator,
//!                          select};
//!
//! # async fn demo() -> miette::Result<()> {
//! let config = SelectConfig::new(
//!     "Select a package manager",
//!     [
//!         RawChoice::from("npm"),
//!         "yarn".into(),
//!         Separator::default().into(),
//!         Choice::new("pnpm".to_string()).disabled("(pnpm is not available)").into(),
//!     ],
//! )
//! .with_banner(|choice, _| Ok(Some(format!("You are looking at {}", choice.name))));
//!
//! let mut io = DefaultIoDevices::default();
//! let picked = select(config, io.as_mut_tuple(), None).await?;
//! println!("{picked}");
//! # Ok(())
//! # }
//! ```
//!
//! For testing, use [`InputDeviceExtMock::new_mock()`] and
//! [`OutputDeviceExt::new_mock()`] instead of [`DefaultIoDevices`]. Nothing touches the
//! real terminal then.

// Enforce strict error handling in production library code only. Tests are allowed to use
// .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod choice;
pub mod engine;
pub mod error;
pub mod event_loop;
pub mod render;
pub mod select_api;
pub mod terminal_io;
pub mod test_fixtures;
pub mod tracing_logging;

// Re-export.
pub use choice::*;
pub use engine::*;
pub use error::*;
pub use event_loop::*;
pub use render::*;
pub use select_api::*;
pub use terminal_io::*;
pub use test_fixtures::*;
pub use tracing_logging::*;

/// Enable the verbose per key press logs. Use `bs --log-file log.txt` and then
/// `tail -f log.txt` to watch them.
pub const DEVELOPMENT_MODE: bool = cfg!(debug_assertions);

/// Stack allocated list, that can [`smallvec::SmallVec::spilled`] into the heap if it
/// gets larger than [`INLINE_VEC_SIZE`].
pub type InlineVec<T> = smallvec::SmallVec<[T; INLINE_VEC_SIZE]>;
pub const INLINE_VEC_SIZE: usize = 8;
