// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_setup;

// Re-export.
pub use tracing_config::*;
pub use tracing_setup::*;
