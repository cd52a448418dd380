// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod choice_list;
pub mod choice_types;

// Re-export.
pub use choice_list::*;
pub use choice_types::*;
