// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::{cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
                style::{Print, PrintStyledContent, ResetColor, StyledContent},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic as _;

use crate::{DEVELOPMENT_MODE, Frame, LockedOutputDevice, OutputDevice,
            lock_output_device_as_mut, queue_commands_no_lock};

/// Paints [Frame]s in place, at the position of the cursor when the first frame was
/// painted. Every paint leaves the cursor on the first line of the frame.
pub trait FunctionComponent {
    fn get_output_device(&mut self) -> OutputDevice;

    /// How many lines are currently painted on the terminal.
    fn viewport_height(&self) -> usize;

    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn render(&mut self, frame: &Frame) -> miette::Result<()>;

    /// Paint the frame and move the cursor to the line after it. The component is done
    /// after this, and nothing else is painted.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn render_final(&mut self, frame: &Frame) -> miette::Result<()>;

    /// Erase the painted frame, used when the prompt is cancelled.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn clear_viewport(&mut self) -> miette::Result<()>;
}

/// Allocate `height` lines below the cursor (scrolling the terminal if needed) and move
/// back up, so that moving down line by line never runs off the bottom of the screen.
fn allocate_viewport_height_space(
    writer: LockedOutputDevice<'_>,
    height: usize,
) -> miette::Result<()> {
    if height == 0 {
        return Ok(());
    }
    queue_commands_no_lock! { writer, Print("\n".repeat(height)) };
    queue_commands_no_lock! { writer, MoveToPreviousLine(to_u16(height)) };
    Ok(())
}

fn paint_lines(writer: LockedOutputDevice<'_>, frame: &Frame) -> miette::Result<()> {
    for line in &frame.lines {
        queue_commands_no_lock! {
            writer,
            MoveToColumn(0),
            ResetColor,
            Clear(ClearType::CurrentLine),
        };
        for span in line {
            queue_commands_no_lock! {
                writer,
                PrintStyledContent(StyledContent::new(span.style, span.text.as_str())),
            };
        }
        queue_commands_no_lock! { writer, ResetColor, MoveToNextLine(1) };
    }
    Ok(())
}

fn to_u16(it: usize) -> u16 { u16::try_from(it).unwrap_or(u16::MAX) }

#[allow(missing_debug_implementations)]
pub struct SelectComponent {
    pub output_device: OutputDevice,
    /// Height of the last frame that was painted.
    pub painted_height: usize,
}

impl SelectComponent {
    #[must_use]
    pub fn new(output_device: OutputDevice) -> Self {
        Self {
            output_device,
            painted_height: 0,
        }
    }
}

impl FunctionComponent for SelectComponent {
    fn get_output_device(&mut self) -> OutputDevice { self.output_device.clone() }

    fn viewport_height(&self) -> usize { self.painted_height }

    fn render(&mut self, frame: &Frame) -> miette::Result<()> {
        let height = frame.height();

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "render frame",
                height = %height,
                previous_height = %self.painted_height
            );
        });

        let output_device = self.get_output_device();
        let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);

        // Remove whatever the previous frame left behind, it may have been taller.
        queue_commands_no_lock! {
            writer,
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
        };

        allocate_viewport_height_space(&mut *writer, height)?;
        paint_lines(&mut *writer, frame)?;

        if height > 0 {
            queue_commands_no_lock! { writer, MoveToPreviousLine(to_u16(height)) };
        }
        writer.flush().into_diagnostic()?;

        self.painted_height = height;
        Ok(())
    }

    fn render_final(&mut self, frame: &Frame) -> miette::Result<()> {
        let output_device = self.get_output_device();
        let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);

        queue_commands_no_lock! {
            writer,
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
        };
        allocate_viewport_height_space(&mut *writer, frame.height())?;
        paint_lines(&mut *writer, frame)?;
        writer.flush().into_diagnostic()?;

        self.painted_height = 0;
        Ok(())
    }

    fn clear_viewport(&mut self) -> miette::Result<()> {
        let output_device = self.get_output_device();
        let writer: LockedOutputDevice<'_> = lock_output_device_as_mut!(output_device);
        queue_commands_no_lock! {
            writer,
            MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
        };
        writer.flush().into_diagnostic()?;
        self.painted_height = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossterm::style::ContentStyle;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    use super::*;
    use crate::{OutputDeviceExt, Span};

    fn frame(lines: &[&str]) -> Frame {
        Frame {
            lines: lines
                .iter()
                .map(|it| smallvec![Span::new(*it, ContentStyle::default())])
                .collect(),
        }
    }

    #[test]
    fn test_render_prints_every_line() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = SelectComponent::new(output_device);

        component.render(&frame(&["? Pick", "❯ One", "  Two"])).unwrap();

        assert_eq!(component.viewport_height(), 3);
        assert_eq!(
            stdout_mock.get_copy_of_buffer_as_string_strip_ansi(),
            "\n\n\n? Pick❯ One  Two"
        );
    }

    #[test]
    fn test_render_returns_cursor_to_top_of_frame() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = SelectComponent::new(output_device);

        component.render(&frame(&["a", "b"])).unwrap();

        // `CSI 2 F` moves the cursor to the start of the line 2 lines up.
        assert!(stdout_mock.get_copy_of_buffer_as_string().ends_with("\x1b[2F"));
    }

    #[test]
    fn test_render_final_and_clear() {
        let (output_device, stdout_mock) = OutputDevice::new_mock();
        let mut component = SelectComponent::new(output_device);

        component.render(&frame(&["? Pick", "❯ One"])).unwrap();
        component.render_final(&frame(&["✔ Pick One"])).unwrap();
        assert_eq!(component.viewport_height(), 0);
        assert!(
            stdout_mock
                .get_copy_of_buffer_as_string_strip_ansi()
                .ends_with("✔ Pick One")
        );

        component.clear_viewport().unwrap();
        assert!(stdout_mock.get_copy_of_buffer_as_string().ends_with("\x1b[J"));
    }
}
