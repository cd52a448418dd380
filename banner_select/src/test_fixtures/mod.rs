// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Mock input and output devices, so that a whole prompt session can be driven from a
//! test without a terminal.

// Attach.
pub mod input_device_fixtures;
pub mod output_device_fixtures;

// Re-export.
pub use input_device_fixtures::*;
pub use output_device_fixtures::*;
