// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod crossterm_macros;
pub mod frame;
pub mod function_component;
pub mod theme;

// Re-export.
pub use frame::*;
pub use function_component::*;
pub use theme::*;
