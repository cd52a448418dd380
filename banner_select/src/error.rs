// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::Diagnostic;

/// Why a prompt was rejected instead of resolving with a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CancelReason {
    /// The [`tokio_util::sync::CancellationToken`] passed to [`crate::select()`] fired.
    AbortSignal,
    /// The user pressed `Ctrl+C`.
    UserInterrupt,
}

impl std::fmt::Display for CancelReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CancelReason::AbortSignal => write!(f, "abort signal"),
            CancelReason::UserInterrupt => write!(f, "user interrupt"),
        }
    }
}

/// Every error that the select prompt itself can produce. Errors returned by the
/// banner callback are passed through to the caller unchanged and are not wrapped in
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum SelectError {
    #[error("[select prompt] No selectable choices. All choices are disabled.")]
    #[diagnostic(
        code(r3bl_banner_select::no_selectable_choices),
        help("Provide at least one choice that is neither a separator nor disabled")
    )]
    NoSelectableChoices,

    #[error("[select prompt] Prompt was cancelled ({0})")]
    #[diagnostic(code(r3bl_banner_select::cancelled))]
    Cancelled(CancelReason),

    #[error("[select prompt] Input stream closed before a choice was confirmed")]
    #[diagnostic(code(r3bl_banner_select::input_closed))]
    InputClosed,

    #[error("[select prompt] Terminal is not interactive")]
    #[diagnostic(
        code(r3bl_banner_select::not_interactive),
        help("stdin, stdout and stderr are all redirected, eg: running in `cargo test` or CI")
    )]
    NotInteractive,
}
