// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use tokio_util::sync::CancellationToken;

use crate::{BannerFn, InputDevice, Instructions, NormalizedChoice, OutputDevice,
            RawChoice, SelectComponent, SelectError, SelectPrompt, TTYResult, Theme,
            enter_event_loop_async, is_fully_uninteractive_terminal};

pub const DEFAULT_PAGE_SIZE: usize = 7;

/// Everything needed to run one prompt. Only `message` and `choices` are required, use
/// the `with_*` methods for the rest.
///
/// ```
/// use r3bl_banner_select::SelectConfig;
///
/// let config = SelectConfig::<String>::new("Pick a country", ["Canada", "China"])
///     .with_page_size(5)
///     .with_loop(false)
///     .with_default("China".to_string())
///     .with_banner(|choice, index| Ok(Some(format!("{index}: {}", choice.name))));
/// assert_eq!(config.page_size, 5);
/// ```
#[allow(missing_debug_implementations)]
pub struct SelectConfig<V> {
    pub message: String,
    pub choices: Vec<RawChoice<V>>,
    /// Number of rows in the visible page.
    pub page_size: usize,
    /// Moving past either end wraps around to the other end.
    pub loop_choices: bool,
    /// The value to highlight first. Ignored if it isn't a selectable choice.
    pub default: Option<V>,
    pub instructions: Instructions,
    pub banner: Option<BannerFn<V>>,
    pub theme: Theme,
}

impl<V> SelectConfig<V> {
    pub fn new<I, R>(message: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<RawChoice<V>>,
    {
        Self {
            message: message.into(),
            choices: choices.into_iter().map(Into::into).collect(),
            page_size: DEFAULT_PAGE_SIZE,
            loop_choices: true,
            default: None,
            instructions: Instructions::default(),
            banner: None,
            theme: Theme::default(),
        }
    }

    /// Values less than 1 are treated as 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn with_loop(mut self, loop_choices: bool) -> Self {
        self.loop_choices = loop_choices;
        self
    }

    #[must_use]
    pub fn with_default(mut self, default: V) -> Self {
        self.default = Some(default);
        self
    }

    #[must_use]
    pub fn with_instructions(mut self, instructions: Instructions) -> Self {
        self.instructions = instructions;
        self
    }

    #[must_use]
    pub fn with_banner(
        mut self,
        banner: impl Fn(&NormalizedChoice<V>, usize) -> miette::Result<Option<String>>
        + 'static,
    ) -> Self {
        self.banner = Some(Box::new(banner));
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// This struct is provided for convenience to create a default set of IO devices which
/// can be used in the [`select()`] function. The reason this has to be created outside
/// of [`select()`] is because mutable references to these devices are passed to it, and
/// it can't take ownership of them.
#[allow(missing_debug_implementations)]
pub struct DefaultIoDevices {
    pub output_device: OutputDevice,
    pub input_device: InputDevice,
}

impl Default for DefaultIoDevices {
    fn default() -> Self {
        DefaultIoDevices {
            output_device: OutputDevice::new_stdout(),
            input_device: InputDevice::new_event_stream(),
        }
    }
}

impl DefaultIoDevices {
    pub fn as_mut_tuple(&mut self) -> (&mut OutputDevice, &mut InputDevice) {
        (&mut self.output_device, &mut self.input_device)
    }
}

/// Async function to pick exactly one value from `config.choices`.
///
/// While the prompt is running:
/// - Up / Down (and Ctrl+P / Ctrl+N with the `emacs` feature) move the cursor, skipping
///   separators and disabled choices.
/// - Typing digits jumps to that 1 based position, typing anything else jumps to the
///   first choice whose name starts with what was typed. What was typed is forgotten
///   after [`crate::SEARCH_DEBOUNCE`] of inactivity.
/// - Enter resolves with the value of the highlighted choice.
///
/// # Arguments
///
/// * `config` - What to display, see [`SelectConfig`].
/// * `io` - The output and input devices to use. Call
///   [`DefaultIoDevices::as_mut_tuple()`] if you don't want to specify anything here.
/// * `abort` - Cancel this token to reject the prompt from the outside.
///
/// # Errors
///
/// - [`SelectError::NoSelectableChoices`] before anything is painted.
/// - [`SelectError::NotInteractive`] if painting to a real terminal and stdin, stdout,
///   and stderr are all redirected. This way it won't block `cargo test` or CI.
/// - [`SelectError::Cancelled`] on Ctrl+C or when `abort` fires.
/// - [`SelectError::InputClosed`] if the input runs out before a choice is confirmed.
/// - Errors returned by the banner function, unchanged.
pub async fn select<V>(
    config: SelectConfig<V>,
    io: (&mut OutputDevice, &mut InputDevice),
    abort: Option<CancellationToken>,
) -> miette::Result<V>
where
    V: Clone + PartialEq + Display,
{
    let mut prompt = SelectPrompt::new(config)?;

    // Destructure the io tuple.
    let (output_device, input_device) = io;

    if !output_device.is_mock
        && is_fully_uninteractive_terminal() == TTYResult::IsNotInteractive
    {
        return Err(SelectError::NotInteractive.into());
    }

    let mut function_component = SelectComponent::new(output_device.clone());

    enter_event_loop_async(
        &mut prompt,
        &mut function_component,
        input_device,
        abort.as_ref(),
    )
    .await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Choice, HelpMode};

    #[test]
    fn test_config_defaults() {
        let config = SelectConfig::<String>::new("Pick", ["a", "b"]);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.loop_choices);
        assert_eq!(config.default, None);
        assert!(config.banner.is_none());
        assert_eq!(config.choices.len(), 2);
        assert_eq!(config.theme.help_mode, HelpMode::Auto);
    }

    #[test]
    fn test_config_builders() {
        let config = SelectConfig::new("Pick", [Choice::new(1_u8), Choice::new(2_u8)])
            .with_page_size(0)
            .with_loop(false)
            .with_default(2)
            .with_banner(|_, _| Ok(None));
        assert_eq!(config.page_size, 1);
        assert!(!config.loop_choices);
        assert_eq!(config.default, Some(2));
        assert!(config.banner.is_some());
    }
}
