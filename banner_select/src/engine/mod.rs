// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The state machine behind the prompt. Everything in here is pure, time is passed in
//! as a [`tokio::time::Instant`] so that it can be tested with a paused clock.

// Attach.
pub mod banner_cache;
pub mod key_action;
pub mod pagination;
pub mod search_buffer;
pub mod select_prompt;
pub mod selection_state;

// Re-export.
pub use banner_cache::*;
pub use key_action::*;
pub use pagination::*;
pub use search_buffer::*;
pub use select_prompt::*;
pub use selection_state::*;
