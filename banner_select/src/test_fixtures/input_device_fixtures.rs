// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use async_stream::stream;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{CrosstermEventResult, InlineVec, InputDevice, PinnedInputStream};

/// The main constructors are:
/// - [`InputDeviceExtMock::new_mock()`]
/// - [`InputDeviceExtMock::new_mock_with_delays()`]
pub fn gen_input_stream<T>(generator_vec: InlineVec<T>) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for item in generator_vec {
            yield item;
        }
    };
    Box::pin(it)
}

/// Each item is yielded after sleeping for the [Duration] paired with it. Use it with
/// `#[tokio::test(start_paused = true)]` to test the search buffer debounce without
/// waiting in real time.
pub fn gen_input_stream_with_delays<T>(
    generator_vec: InlineVec<(Duration, T)>,
) -> PinnedInputStream<T>
where
    T: Send + Sync + 'static,
{
    let it = stream! {
        for (delay, item) in generator_vec {
            tokio::time::sleep(delay).await;
            yield item;
        }
    };
    Box::pin(it)
}

pub trait InputDeviceExtMock {
    fn new_mock(generator_vec: InlineVec<CrosstermEventResult>) -> InputDevice;

    fn new_mock_with_delays(
        generator_vec: InlineVec<(Duration, CrosstermEventResult)>,
    ) -> InputDevice;
}

impl InputDeviceExtMock for InputDevice {
    fn new_mock(generator_vec: InlineVec<CrosstermEventResult>) -> InputDevice {
        InputDevice {
            resource: gen_input_stream(generator_vec),
        }
    }

    fn new_mock_with_delays(
        generator_vec: InlineVec<(Duration, CrosstermEventResult)>,
    ) -> InputDevice {
        InputDevice {
            resource: gen_input_stream_with_delays(generator_vec),
        }
    }
}

/// A key press with no modifiers.
#[must_use]
pub fn key_press(code: KeyCode) -> CrosstermEventResult {
    key_press_with_modifiers(code, KeyModifiers::NONE)
}

#[must_use]
pub fn key_press_with_modifiers(
    code: KeyCode,
    modifiers: KeyModifiers,
) -> CrosstermEventResult {
    Ok(Event::Key(KeyEvent::new(code, modifiers)))
}

/// One key press per char of `text`.
pub fn typed(text: &str) -> impl Iterator<Item = CrosstermEventResult> {
    text.chars().map(|ch| key_press(KeyCode::Char(ch)))
}
