use crossterm::event::KeyEvent;
use ratatui::text::Text;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use super::input_state::InputState;
use super::keys::{PromptAction, action_for};
use super::options::PromptOptions;
use crate::candidate::{Candidate, normalize_all};
use crate::config::DEFAULT_LIMIT;
use crate::render::{self, PromptView, ValueStyle};
use crate::selection::{Lifecycle, SelectionController, Status};
use crate::suggest::{MatchResolution, Matcher, SuggestionEngine};
use crate::viewport::{ListViewport, Window};

pub struct AutocompletePrompt<M, L> {
    message: String,
    warn: String,
    style: ValueStyle,
    limit: usize,
    clear_first: bool,
    choices: Vec<Candidate>,
    initial_index: usize,
    /// Set by `reset` and cleared by any later edit: the reset's list
    /// re-selects the initial index
    reselect_initial: bool,
    input: InputState,
    engine: SuggestionEngine<M>,
    controller: SelectionController<L>,
    viewport: ListViewport,
    window: Window,
}

impl<M: Matcher, L: Lifecycle> AutocompletePrompt<M, L> {
    /// Build the prompt and issue the first request with empty input
    pub fn new(options: PromptOptions, matcher: M, lifecycle: L) -> Self {
        let choices = normalize_all(options.choices);
        let initial = options
            .initial
            .as_ref()
            .and_then(|initial| initial.resolve(&choices));
        let initial_index = initial.unwrap_or(0);

        let fallback = match options.fallback {
            Some(raw) => Candidate::from_raw(raw),
            None => initial
                .and_then(|index| choices.get(index).cloned())
                .unwrap_or_else(|| Candidate::new(options.no_matches).with_value(Value::Null)),
        };

        let page_size = if options.limit == 0 {
            DEFAULT_LIMIT
        } else {
            options.limit
        };
        let controller = SelectionController::new(lifecycle, fallback, initial_index)
            .with_page_size(page_size)
            .with_submit_fallback(options.submit_fallback);

        let mut prompt = Self {
            message: options.message,
            warn: options.warn,
            style: options.style,
            limit: options.limit,
            clear_first: options.clear_first,
            choices,
            initial_index,
            reselect_initial: false,
            input: InputState::new(),
            engine: SuggestionEngine::new(matcher),
            controller,
            viewport: ListViewport::new(),
            window: Window::default(),
        };
        prompt.request();
        prompt
    }

    fn request(&mut self) {
        self.engine.request(self.input.text(), &self.choices);
    }

    fn refresh_window(&mut self) {
        self.window = self.viewport.update(
            self.controller.selection_index(),
            self.controller.suggestions().len(),
            self.limit,
        );
    }

    /// Dispatch a key press; returns whether anything changed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match action_for(key) {
            PromptAction::Up => self.up(),
            PromptAction::Next => self.next(),
            PromptAction::First => self.first(),
            PromptAction::Last => self.last(),
            PromptAction::PageUp => self.page_up(),
            PromptAction::PageDown => self.page_down(),
            PromptAction::Submit => self.submit(),
            PromptAction::Escape => self.escape(),
            PromptAction::Abort => self.abort(),
            PromptAction::Edit(key) => self.handle_input_key(key),
        }
    }

    /// Edit the input; a modification issues a new matcher request
    pub fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        if self.controller.status().is_terminal() {
            return false;
        }

        let modified = self.input.handle_key(key);
        if modified {
            self.reselect_initial = false;
            self.request();
        }
        modified
    }

    pub fn set_input(&mut self, text: &str) {
        if self.controller.status().is_terminal() {
            return;
        }
        self.input.set_text(text);
        self.reselect_initial = false;
        self.request();
    }

    /// Clear the input and go back to the initial selection
    pub fn reset(&mut self) {
        if self.controller.status().is_terminal() {
            return;
        }
        self.input.clear();
        self.reselect_initial = true;
        self.viewport.reset();
        self.request();
    }

    /// Esc: clear non-empty input first when configured, otherwise exit
    pub fn escape(&mut self) -> bool {
        if self.controller.status().is_terminal() {
            return false;
        }
        if self.clear_first && !self.input.is_empty() {
            self.reset();
            return true;
        }
        self.exit()
    }

    /// Install a matcher resolution if it is still current
    ///
    /// Returns whether the suggestion list changed.
    pub fn apply(&mut self, resolution: MatchResolution) -> bool {
        let Some(suggestions) = self.engine.accept(resolution) else {
            return false;
        };

        if self.controller.status().is_terminal() {
            return false;
        }

        if std::mem::take(&mut self.reselect_initial) {
            self.controller
                .replace_suggestions_at(suggestions, self.initial_index);
        } else {
            self.controller.replace_suggestions(suggestions);
        }
        self.refresh_window();
        true
    }

    pub fn up(&mut self) -> bool {
        let moved = self.controller.up();
        self.refresh_window();
        moved
    }

    pub fn down(&mut self) -> bool {
        let moved = self.controller.down();
        self.refresh_window();
        moved
    }

    pub fn next(&mut self) -> bool {
        let moved = self.controller.next();
        self.refresh_window();
        moved
    }

    pub fn first(&mut self) -> bool {
        let moved = self.controller.first();
        self.refresh_window();
        moved
    }

    pub fn last(&mut self) -> bool {
        let moved = self.controller.last();
        self.refresh_window();
        moved
    }

    pub fn page_up(&mut self) -> bool {
        let moved = self.controller.page_up();
        self.refresh_window();
        moved
    }

    pub fn page_down(&mut self) -> bool {
        let moved = self.controller.page_down();
        self.refresh_window();
        moved
    }

    pub fn submit(&mut self) -> bool {
        self.controller.submit()
    }

    pub fn abort(&mut self) -> bool {
        self.controller.abort()
    }

    pub fn exit(&mut self) -> bool {
        self.controller.exit()
    }

    /// Wait for the next queued matcher future, current or stale
    pub async fn next_resolution(&mut self) -> Option<MatchResolution> {
        self.engine.next_resolution().await
    }

    pub fn has_pending(&self) -> bool {
        self.engine.has_pending()
    }

    pub fn is_in_flight(&self) -> bool {
        self.engine.is_in_flight()
    }

    pub fn status(&self) -> Status {
        self.controller.status()
    }

    pub fn current_value(&self) -> &Value {
        self.controller.current_value()
    }

    pub fn suggestions(&self) -> &[Candidate] {
        self.controller.suggestions()
    }

    pub fn selection_index(&self) -> usize {
        self.controller.selection_index()
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn input(&self) -> &str {
        self.input.text()
    }

    pub fn style(&self) -> ValueStyle {
        self.style
    }

    /// Terminal column of the input cursor on the prompt line
    pub fn cursor_column(&self) -> u16 {
        // Symbol, message and delimiter, each followed by a space
        let prefix = 2 + self.message.width() + 1 + 2;
        let typed = self.input.cursor_column() * usize::from(self.style.scale());
        u16::try_from(prefix + typed).unwrap_or(u16::MAX)
    }

    pub fn lifecycle(&self) -> &L {
        self.controller.lifecycle()
    }

    pub fn lifecycle_mut(&mut self) -> &mut L {
        self.controller.lifecycle_mut()
    }

    /// Read-only snapshot handed to the renderer
    pub fn view(&self, width: u16) -> PromptView<'_> {
        PromptView {
            status: self.controller.status(),
            in_flight: self.engine.is_in_flight(),
            message: &self.message,
            input: self.input.text(),
            style: self.style,
            warn: &self.warn,
            suggestions: self.controller.suggestions(),
            selection_index: self.controller.selection_index(),
            fallback: self.controller.fallback(),
            window: self.window,
            width,
        }
    }

    pub fn render(&self, width: u16) -> Text<'static> {
        render::render(&self.view(width))
    }
}

#[cfg(test)]
#[path = "prompt_state_tests.rs"]
mod prompt_state_tests;
