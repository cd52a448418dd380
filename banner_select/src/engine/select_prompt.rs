// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Display;

use tokio::time::Instant;

use crate::{BannerCache, BannerFn, CancelReason, ChoiceList, DEVELOPMENT_MODE, Direction,
            EventLoopResult, Frame, HelpMode, HelpTip, IdleFrame, InputSignal,
            Instructions, KeyAction, NormalizedChoice, PaginationWindow, SearchBuffer,
            SearchPosition, SelectConfig, SelectError, SelectionState, Theme,
            compose_done_frame};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptStatus {
    Idle,
    Done,
    Cancelled,
}

/// The state of one running prompt, and the logic that reacts to key presses. Nothing
/// in here does any I/O, [`crate::enter_event_loop_async()`] feeds it input and paints
/// the frames it composes.
#[allow(missing_debug_implementations)]
pub struct SelectPrompt<V> {
    message: String,
    page_size: usize,
    loop_choices: bool,
    instructions: Instructions,
    theme: Theme,
    banner_fn: Option<BannerFn<V>>,

    list: ChoiceList<V>,
    selection: SelectionState,
    search: SearchBuffer,
    banner_cache: BannerCache,
    pagination: PaginationWindow,
    is_first_render: bool,
    status: PromptStatus,
}

impl<V: Clone + PartialEq + Display> SelectPrompt<V> {
    /// # Errors
    ///
    /// Returns [`SelectError::NoSelectableChoices`] if nothing in `config.choices` can be
    /// selected.
    pub fn new(config: SelectConfig<V>) -> Result<Self, SelectError> {
        let SelectConfig {
            message,
            choices,
            page_size,
            loop_choices,
            default,
            instructions,
            banner,
            theme,
        } = config;

        let list = ChoiceList::build(choices)?;
        let selection = SelectionState::new(&list, default.as_ref());

        Ok(Self {
            message,
            page_size,
            loop_choices,
            instructions,
            theme,
            banner_fn: banner,
            list,
            selection,
            search: SearchBuffer::default(),
            banner_cache: BannerCache::default(),
            pagination: PaginationWindow::default(),
            is_first_render: true,
            status: PromptStatus::Idle,
        })
    }
}

impl<V: Clone> SelectPrompt<V> {
    #[must_use]
    pub fn status(&self) -> PromptStatus { self.status }

    #[must_use]
    pub fn active_index(&self) -> usize { self.selection.active() }

    #[must_use]
    pub fn list(&self) -> &ChoiceList<V> { &self.list }

    #[must_use]
    pub fn search_text(&self) -> &str { self.search.text() }

    #[must_use]
    pub fn selected_choice(&self) -> Option<&NormalizedChoice<V>> {
        self.list.choice_at(self.selection.active())
    }

    /// When the event loop should call [`Self::on_search_reset_timer()`].
    #[must_use]
    pub fn search_reset_deadline(&self) -> Option<Instant> { self.search.reset_deadline() }

    /// Clears the search buffer. The active choice stays where it is.
    pub fn on_search_reset_timer(&mut self) {
        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(message = "search buffer reset", text = ?self.search.text());
        });
        self.search.on_reset_deadline_elapsed();
    }

    /// Dispatch one classified input event.
    pub fn handle_input(&mut self, signal: InputSignal, now: Instant) -> EventLoopResult<V> {
        match signal {
            InputSignal::Key(action) => self.handle_key(action, now),
            InputSignal::Interrupt => self.cancel(CancelReason::UserInterrupt),
            InputSignal::Ignored => EventLoopResult::Continue,
        }
    }

    /// The external abort signal fired.
    pub fn handle_abort(&mut self) -> EventLoopResult<V> {
        self.cancel(CancelReason::AbortSignal)
    }

    pub fn handle_key(&mut self, action: KeyAction, now: Instant) -> EventLoopResult<V> {
        if self.status != PromptStatus::Idle {
            return EventLoopResult::Continue;
        }

        DEVELOPMENT_MODE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "handle key",
                action = ?action,
                active = %self.selection.active(),
                search = ?self.search.text()
            );
        });

        if action != KeyAction::Confirm {
            self.search.cancel_reset();
        }

        let has_changed = match action {
            KeyAction::Confirm => return self.confirm(),
            KeyAction::MoveUp | KeyAction::MoveDown => {
                self.search.clear();
                let direction = if action == KeyAction::MoveUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                self.selection
                    .move_cursor(&self.list, direction, self.loop_choices)
            }
            KeyAction::Digit(ch) => {
                self.search.push_char(ch);
                let has_changed = match self.search.as_position() {
                    SearchPosition::Position(position)
                        if (1..=self.list.len()).contains(&position) =>
                    {
                        self.selection.jump_to(&self.list, position - 1)
                    }
                    SearchPosition::Position(_) | SearchPosition::OutOfRange => false,
                    SearchPosition::NotNumeric => {
                        jump_to_prefix_match(&self.list, &mut self.selection, &self.search)
                    }
                };
                self.search.schedule_reset(now);
                has_changed
            }
            KeyAction::TextChar(ch) => {
                self.search.push_char(ch);
                let has_changed =
                    jump_to_prefix_match(&self.list, &mut self.selection, &self.search);
                self.search.schedule_reset(now);
                has_changed
            }
            KeyAction::Backspace => {
                self.search.clear();
                false
            }
        };

        if has_changed {
            EventLoopResult::ContinueAndRerender
        } else {
            EventLoopResult::Continue
        }
    }

    fn confirm(&mut self) -> EventLoopResult<V> {
        let Some(value) = self.selected_choice().map(|it| it.value.clone()) else {
            return EventLoopResult::Continue;
        };
        self.status = PromptStatus::Done;
        self.teardown();
        EventLoopResult::ExitWithResult(value)
    }

    fn cancel(&mut self, reason: CancelReason) -> EventLoopResult<V> {
        if self.status == PromptStatus::Idle {
            self.status = PromptStatus::Cancelled;
        }
        self.teardown();
        EventLoopResult::ExitWithError(SelectError::Cancelled(reason))
    }

    /// Drop the pending search buffer reset. Runs on every way out of the prompt.
    pub fn teardown(&mut self) {
        self.search.cancel_reset();
        self.search.clear();
    }

    /// Compose the frame for the current state.
    ///
    /// # Errors
    ///
    /// Passes through any error returned by the banner function.
    pub fn render_frame(&mut self) -> miette::Result<Frame> {
        if self.status == PromptStatus::Done {
            let short = self.selected_choice().map_or("", |it| it.short.as_str());
            return Ok(compose_done_frame(&self.message, short, &self.theme));
        }

        let help_tip = if self.take_help_tip_visibility() {
            if self.list.len() > self.page_size {
                HelpTip::Pager(&self.instructions.pager)
            } else {
                HelpTip::Navigation(&self.instructions.navigation)
            }
        } else {
            HelpTip::None
        };
        let active = self.selection.active();
        let window = self.pagination.paginate(
            active,
            self.list.len(),
            self.page_size,
            self.loop_choices,
        );

        let banner = match self.list.choice_at(active) {
            Some(choice) => {
                self.banner_cache
                    .update(self.banner_fn.as_ref(), choice, active)?
            }
            None => self.banner_cache.current(),
        };

        Ok(IdleFrame {
            banner,
            message: &self.message,
            help_tip,
            list: &self.list,
            window,
            active,
        }
        .compose(&self.theme))
    }

    /// Whether the hint is shown on this render. Also flips the first render flag, so
    /// that [`HelpMode::Auto`] only shows the hint once.
    fn take_help_tip_visibility(&mut self) -> bool {
        let is_shown = match self.theme.help_mode {
            HelpMode::Always => true,
            HelpMode::Auto => self.is_first_render,
            HelpMode::Never => false,
        };
        if is_shown {
            self.is_first_render = false;
        }
        is_shown
    }
}

/// Jump to the first selectable choice whose name starts with the search text.
fn jump_to_prefix_match<V>(
    list: &ChoiceList<V>,
    selection: &mut SelectionState,
    search: &SearchBuffer,
) -> bool {
    match list.find_by_name_prefix(search.text()) {
        Some(index) => selection.jump_to(list, index),
        None => false,
    }
}
