// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, EventStream};
use futures_util::{FutureExt, StreamExt};
use miette::IntoDiagnostic;

use crate::{CrosstermEventResult, PinnedInputStream, SelectError};

/// Where key presses come from. See [`crate::InputDeviceExtMock`] for testing features.
#[allow(missing_debug_implementations)]
pub struct InputDevice {
    pub resource: PinnedInputStream<CrosstermEventResult>,
}

impl InputDevice {
    #[must_use]
    pub fn new_event_stream() -> InputDevice {
        InputDevice {
            resource: Box::pin(EventStream::new()),
        }
    }
}

impl InputDevice {
    /// # Errors
    ///
    /// - [`SelectError::InputClosed`] once the stream is exhausted.
    /// - The I/O error reported by the stream, if any.
    pub async fn next(&mut self) -> miette::Result<Event> {
        match self.resource.next().fuse().await {
            Some(it) => it.into_diagnostic(),
            None => Err(SelectError::InputClosed.into()),
        }
    }
}
