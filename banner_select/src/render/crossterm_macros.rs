// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Queue crossterm commands on an already locked writer (see
/// [`crate::lock_output_device_as_mut!`]). Hold the lock for the whole paint of a
/// frame, so that the output of one frame can't interleave with anything else.
#[macro_export]
macro_rules! queue_commands_no_lock {
    ($writer:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        $(
            ::crossterm::QueueableCommand::queue(
                &mut *$writer,
                $command
            ).into_diagnostic()?;
        )*
    }}
}

/// Lock the output device, queue the commands, and flush them right away. Good for one
/// and done commands like hiding and showing the cursor.
#[macro_export]
macro_rules! execute_commands {
    ($output_device:expr $(, $command:expr)* $(,)?) => {{
        use miette::IntoDiagnostic as _;
        let writer = $crate::lock_output_device_as_mut!($output_device);
        $(
            ::crossterm::QueueableCommand::queue(
                &mut *writer,
                $command
            ).into_diagnostic()?;
        )*
        writer.flush().into_diagnostic()?;
    }}
}
