// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::{Hide, Show},
                terminal::{disable_raw_mode, enable_raw_mode}};
use miette::IntoDiagnostic as _;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{DEVELOPMENT_MODE, FunctionComponent, InputDevice, SelectError, SelectPrompt,
            classify, execute_commands};

/// What the event loop should do after the prompt handled an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<V> {
    Continue,
    ContinueAndRerender,
    ExitWithResult(V),
    ExitWithError(SelectError),
}

/// Drive `prompt` until a choice is confirmed or the prompt is cancelled. Raw mode is
/// only toggled when the component paints to a real output device.
///
/// # Errors
///
/// - [`SelectError::Cancelled`] when `abort` fires or the user presses Ctrl+C.
/// - [`SelectError::InputClosed`] when `input_device` runs dry.
/// - Any error returned by the banner function, or by the terminal.
pub async fn enter_event_loop_async<V: Clone>(
    prompt: &mut SelectPrompt<V>,
    function_component: &mut impl FunctionComponent,
    input_device: &mut InputDevice,
    abort: Option<&CancellationToken>,
) -> miette::Result<V> {
    let is_mock = function_component.get_output_device().is_mock;

    let result = match run_before_event_loop(prompt, function_component, is_mock) {
        Ok(()) => run_event_loop(prompt, function_component, input_device, abort).await,
        Err(error) => Err(error),
    };

    run_after_event_loop(prompt, function_component, is_mock)?;

    result
}

fn run_before_event_loop<V: Clone>(
    prompt: &mut SelectPrompt<V>,
    function_component: &mut impl FunctionComponent,
    is_mock: bool,
) -> miette::Result<()> {
    let output_device = function_component.get_output_device();
    execute_commands!(output_device, Hide);
    if !is_mock {
        enable_raw_mode().into_diagnostic()?;
    }

    // First render before waiting for user input.
    let frame = prompt.render_frame()?;
    function_component.render(&frame)?;

    Ok(())
}

fn run_after_event_loop<V: Clone>(
    prompt: &mut SelectPrompt<V>,
    function_component: &mut impl FunctionComponent,
    is_mock: bool,
) -> miette::Result<()> {
    prompt.teardown();
    let output_device = function_component.get_output_device();
    execute_commands!(output_device, Show);
    if !is_mock {
        disable_raw_mode().into_diagnostic()?;
    }
    Ok(())
}

async fn run_event_loop<V: Clone>(
    prompt: &mut SelectPrompt<V>,
    function_component: &mut impl FunctionComponent,
    input_device: &mut InputDevice,
    abort: Option<&CancellationToken>,
) -> miette::Result<V> {
    loop {
        let search_reset_deadline = prompt.search_reset_deadline();

        let event_loop_result = tokio::select! {
            biased;

            () = wait_for_abort(abort) => prompt.handle_abort(),

            () = sleep_until_deadline(search_reset_deadline) => {
                prompt.on_search_reset_timer();
                EventLoopResult::Continue
            }

            maybe_event = input_device.next() => match maybe_event {
                Ok(event) => {
                    let signal = classify(&event);
                    DEVELOPMENT_MODE.then(|| {
                        // % is Display, ? is Debug.
                        tracing::debug!(message = "input event", event = ?event, signal = ?signal);
                    });
                    prompt.handle_input(signal, Instant::now())
                }
                Err(error) => {
                    function_component.clear_viewport()?;
                    return Err(error);
                }
            },
        };

        match event_loop_result {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRerender => {
                let frame = prompt.render_frame()?;
                function_component.render(&frame)?;
            }
            EventLoopResult::ExitWithResult(value) => {
                let frame = prompt.render_frame()?;
                function_component.render_final(&frame)?;
                return Ok(value);
            }
            EventLoopResult::ExitWithError(error) => {
                tracing::debug!(message = "prompt cancelled", error = %error);
                function_component.clear_viewport()?;
                return Err(error.into());
            }
        }
    }
}

/// Never resolves when there is no abort token.
async fn wait_for_abort(abort: Option<&CancellationToken>) {
    match abort {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}

/// Never resolves when no search buffer reset is scheduled.
async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
