//! Visible window of the suggestion list
//!
//! The window slides: it moves only as far as needed to keep the selection
//! inside it, so scrolling through a long list does not re-center on every
//! keystroke.

/// Half-open range `[start, end)` of visible suggestion rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    /// Rows exist above the window
    pub fn clipped_above(&self) -> bool {
        self.start > 0
    }

    /// Rows exist below the window
    pub fn clipped_below(&self, total: usize) -> bool {
        self.end < total
    }
}

/// Compute the window for `selection`, starting from the previous window start
///
/// The window holds `min(limit, total)` rows (a `limit` of 0 shows
/// everything), always contains the selection and never runs past the end
/// of the list.
pub fn compute_window(previous_start: usize, selection: usize, total: usize, limit: usize) -> Window {
    let size = if limit == 0 { total } else { limit.min(total) };
    if size == 0 {
        return Window::default();
    }

    let selection = selection.min(total - 1);
    let mut start = previous_start.min(total - size);

    if selection < start {
        start = selection;
    } else if selection >= start + size {
        start = selection + 1 - size;
    }

    Window {
        start,
        end: start + size,
    }
}

/// Remembers where the window was last placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListViewport {
    start: usize,
}

impl ListViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// Slide the window to contain `selection` and return it
    pub fn update(&mut self, selection: usize, total: usize, limit: usize) -> Window {
        let window = compute_window(self.start, selection, total, limit);
        self.start = window.start;
        window
    }

    pub fn reset(&mut self) {
        self.start = 0;
    }
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod viewport_tests;
