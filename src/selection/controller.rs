//! Selection controller
//!
//! Owns the suggestion list, the selection index and the terminal state.
//! Every movement goes through [`SelectionController::move_select`], which
//! skips disabled candidates and rings the bell instead of failing.

use serde_json::Value;

use super::lifecycle::{Lifecycle, PromptEvent, Status};
use crate::candidate::Candidate;

const DEFAULT_PAGE_SIZE: usize = 10;

pub struct SelectionController<L> {
    lifecycle: L,
    suggestions: Vec<Candidate>,
    /// Display-only stand-in shown while the list is empty
    fallback: Candidate,
    selection_index: usize,
    current_value: Value,
    status: Status,
    page_size: usize,
    /// Whether submit on an empty list yields the fallback value
    submit_fallback: bool,
}

impl<L: Lifecycle> SelectionController<L> {
    /// Create a controller with an empty suggestion list
    ///
    /// `initial_index` is kept as a position and clamped once the first
    /// suggestions arrive.
    pub fn new(lifecycle: L, fallback: Candidate, initial_index: usize) -> Self {
        Self {
            lifecycle,
            current_value: fallback.value.clone(),
            suggestions: Vec::new(),
            fallback,
            selection_index: initial_index,
            status: Status::Active,
            page_size: DEFAULT_PAGE_SIZE,
            submit_fallback: false,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_submit_fallback(mut self, submit_fallback: bool) -> Self {
        self.submit_fallback = submit_fallback;
        self
    }

    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn selection_index(&self) -> usize {
        self.selection_index
    }

    /// The hovered candidate, `None` while the list is empty
    pub fn selected(&self) -> Option<&Candidate> {
        self.suggestions.get(self.selection_index)
    }

    pub fn current_value(&self) -> &Value {
        &self.current_value
    }

    pub fn fallback(&self) -> &Candidate {
        &self.fallback
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn lifecycle(&self) -> &L {
        &self.lifecycle
    }

    pub fn lifecycle_mut(&mut self) -> &mut L {
        &mut self.lifecycle
    }

    /// Move the selection to `target`, skipping disabled candidates
    ///
    /// A disabled target is walked past in the direction of travel (forward
    /// when the target equals the current index). Walking off either end of
    /// the list, or moving within an empty list, rings the bell and leaves
    /// the state untouched. Returns whether the move was committed.
    pub fn move_select(&mut self, target: usize) -> bool {
        let forward = target >= self.selection_index;
        self.move_towards(target, forward)
    }

    fn move_towards(&mut self, target: usize, forward: bool) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        if self.suggestions.is_empty() {
            self.lifecycle.bell();
            return false;
        }

        match self.resolve_target(target, forward) {
            Some(index) => {
                self.commit(index);
                true
            }
            None => {
                log::debug!(
                    "No enabled candidate reachable from {} (selected: {})",
                    target,
                    self.selection_index
                );
                self.lifecycle.bell();
                false
            }
        }
    }

    /// Move up one row, wrapping from the first row to the last
    pub fn up(&mut self) -> bool {
        let Some(last) = self.last_index() else {
            return self.move_select(0);
        };
        let target = if self.selection_index == 0 {
            last
        } else {
            self.selection_index - 1
        };
        self.move_select(target)
    }

    /// Move down one row, wrapping from the last row to the first
    pub fn down(&mut self) -> bool {
        let Some(last) = self.last_index() else {
            return self.move_select(0);
        };
        let target = if self.selection_index >= last {
            0
        } else {
            self.selection_index + 1
        };
        self.move_select(target)
    }

    pub fn next(&mut self) -> bool {
        self.down()
    }

    /// Select the first enabled row, skipping a leading disabled run inward
    pub fn first(&mut self) -> bool {
        self.move_towards(0, true)
    }

    /// Select the last enabled row, skipping a trailing disabled run inward
    pub fn last(&mut self) -> bool {
        let target = self.last_index().unwrap_or(0);
        self.move_towards(target, false)
    }

    pub fn page_up(&mut self) -> bool {
        let target = self.selection_index.saturating_sub(self.page_size);
        self.move_select(target)
    }

    pub fn page_down(&mut self) -> bool {
        let target = match self.last_index() {
            Some(last) => self.selection_index.saturating_add(self.page_size).min(last),
            None => 0,
        };
        self.move_select(target)
    }

    /// Install a freshly matched list and re-clamp the selection
    ///
    /// The index survives only as a position: it becomes
    /// `min(previous, len - 1)`, or 0 for an empty list.
    pub fn replace_suggestions(&mut self, suggestions: Vec<Candidate>) {
        let position = self.selection_index;
        self.replace_suggestions_at(suggestions, position);
    }

    /// Install a list and re-clamp the selection to `position` instead
    pub fn replace_suggestions_at(&mut self, suggestions: Vec<Candidate>, position: usize) {
        self.suggestions = suggestions;
        self.reselect(position);
    }

    /// Re-clamp the selection to `position` without ringing the bell
    ///
    /// A disabled position walks forward first, then backward. Only a list
    /// with no enabled candidate leaves the selection on a disabled row.
    pub fn reselect(&mut self, position: usize) {
        if self.status.is_terminal() {
            return;
        }

        let Some(last) = self.last_index() else {
            self.selection_index = 0;
            return;
        };

        let clamped = position.min(last);
        self.selection_index = clamped;

        let reachable = self
            .resolve_target(clamped, true)
            .or_else(|| self.enabled_before(clamped));
        match reachable {
            Some(index) => self.commit(index),
            None => log::debug!("Every candidate is disabled, selection stays at {}", clamped),
        }
    }

    /// Finish the prompt with the current value
    ///
    /// Rejected with a bell while a disabled candidate is selected, and on an
    /// empty list unless the fallback is configured as submittable.
    pub fn submit(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        match self.selected() {
            Some(candidate) if candidate.disabled => {
                self.lifecycle.bell();
                return false;
            }
            Some(_) => {}
            None if self.submit_fallback => {
                self.current_value = self.fallback.value.clone();
            }
            None => {
                log::debug!("Submit rejected: no suggestions and fallback not submittable");
                self.lifecycle.bell();
                return false;
            }
        }

        self.status = Status::Done;
        self.lifecycle
            .fire(PromptEvent::Submit(self.current_value.clone()));
        self.lifecycle.close();
        true
    }

    /// Terminate on an external abort (e.g. Ctrl+C)
    pub fn abort(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = Status::Aborted;
        self.lifecycle
            .fire(PromptEvent::Abort(self.current_value.clone()));
        self.lifecycle.close();
        true
    }

    /// Terminate on an external exit (e.g. Esc)
    pub fn exit(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = Status::Exited;
        self.lifecycle
            .fire(PromptEvent::Exit(self.current_value.clone()));
        self.lifecycle.close();
        true
    }

    fn last_index(&self) -> Option<usize> {
        self.suggestions.len().checked_sub(1)
    }

    /// Where a move to `target` would land, `None` if it falls off the list
    fn resolve_target(&self, target: usize, forward: bool) -> Option<usize> {
        let candidate = self.suggestions.get(target)?;
        if !candidate.disabled {
            return Some(target);
        }

        if forward {
            (target + 1..self.suggestions.len()).find(|&i| !self.suggestions[i].disabled)
        } else {
            self.enabled_before(target)
        }
    }

    fn enabled_before(&self, index: usize) -> Option<usize> {
        (0..index).rev().find(|&i| !self.suggestions[i].disabled)
    }

    fn commit(&mut self, index: usize) {
        self.selection_index = index;

        let value = &self.suggestions[index].value;
        self.current_value = if value.is_null() {
            self.fallback.value.clone()
        } else {
            value.clone()
        };

        log::trace!("Selected {} -> {}", index, self.current_value);
        self.lifecycle
            .fire(PromptEvent::ValueChanged(self.current_value.clone()));
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
