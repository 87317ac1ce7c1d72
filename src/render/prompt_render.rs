use ratatui::{
    style::Style,
    text::{Line, Span, Text},
};
use unicode_width::UnicodeWidthStr;

use super::style::{ValueStyle, figures};
use super::wrap::wrap;
use crate::candidate::Candidate;
use crate::selection::Status;
use crate::theme;
use crate::viewport::Window;

/// Columns taken by the pointer, the edge marker and the gap before a title
const ROW_PREFIX_WIDTH: usize = 4;
const DESCRIPTION_MARGIN: usize = 3;

/// Everything the renderer reads, borrowed from the prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptView<'a> {
    pub status: Status,
    /// A matcher request has not resolved yet
    pub in_flight: bool,
    pub message: &'a str,
    pub input: &'a str,
    pub style: ValueStyle,
    /// Shown instead of the input while a disabled row is hovered
    pub warn: &'a str,
    pub suggestions: &'a [Candidate],
    pub selection_index: usize,
    pub fallback: &'a Candidate,
    pub window: Window,
    /// Terminal width in columns, 0 when unknown
    pub width: u16,
}

impl PromptView<'_> {
    fn selected(&self) -> Option<&Candidate> {
        self.suggestions.get(self.selection_index)
    }
}

/// Render the prompt line followed by the visible suggestion rows
pub fn render(view: &PromptView) -> Text<'static> {
    let mut lines = vec![render_prompt_line(view)];

    if view.status != Status::Done {
        lines.extend(render_rows(view));
    }

    Text::from(lines)
}

/// Flatten styled text into plain lines joined by `\n`
pub fn plain(text: &Text) -> String {
    text.lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_prompt_line(view: &PromptView) -> Line<'static> {
    let (symbol, symbol_color) = match view.status {
        Status::Active => (figures::QUESTION, theme::status::ACTIVE),
        Status::Done => (figures::TICK, theme::status::DONE),
        Status::Aborted => (figures::CROSS, theme::status::ABORTED),
        Status::Exited => (figures::CROSS, theme::status::EXITED),
    };

    let delimiter = if view.in_flight {
        figures::ELLIPSIS
    } else {
        figures::POINTER_SMALL
    };

    let selected = view.selected();
    let hint = if view.status == Status::Done {
        let title = selected.map_or(&view.fallback.title, |c| &c.title);
        Span::raw(title.clone())
    } else if selected.is_some_and(|c| c.disabled) {
        Span::styled(
            view.warn.to_string(),
            Style::default().fg(theme::prompt::WARNING),
        )
    } else {
        Span::raw(view.style.render(view.input))
    };

    Line::from(vec![
        Span::styled(symbol, Style::default().fg(symbol_color)),
        Span::raw(" "),
        Span::styled(
            view.message.to_string(),
            Style::default().add_modifier(theme::prompt::MESSAGE_MODIFIER),
        ),
        Span::raw(" "),
        Span::styled(delimiter, Style::default().fg(theme::status::DELIMITER)),
        Span::raw(" "),
        hint,
    ])
}

fn render_rows(view: &PromptView) -> Vec<Line<'static>> {
    let window = view.window;
    let total = view.suggestions.len();
    let visible = view
        .suggestions
        .get(window.start..window.end.min(total))
        .unwrap_or_default();

    if visible.is_empty() {
        return vec![Line::from(Span::styled(
            view.fallback.title.clone(),
            Style::default().fg(theme::prompt::FALLBACK),
        ))];
    }

    let mut lines = Vec::new();
    for (offset, candidate) in visible.iter().enumerate() {
        let index = window.start + offset;
        let marker = if offset == 0 && window.clipped_above() {
            figures::ARROW_UP
        } else if index + 1 == window.end && window.clipped_below(total) {
            figures::ARROW_DOWN
        } else {
            " "
        };
        let hovered = index == view.selection_index;

        if candidate.disabled {
            lines.push(render_disabled_row(candidate, hovered, marker));
        } else {
            lines.extend(render_enabled_row(candidate, hovered, marker, view.width));
        }
    }
    lines
}

fn render_disabled_row(candidate: &Candidate, hovered: bool, marker: &'static str) -> Line<'static> {
    let gray = Style::default().fg(theme::row::DISABLED);
    let (pointer, title_style) = if hovered {
        (
            Span::styled(
                format!("{} ", figures::POINTER),
                gray.add_modifier(theme::row::DISABLED_POINTER_MODIFIER),
            ),
            gray.add_modifier(theme::row::DISABLED_HOVERED_MODIFIER),
        )
    } else {
        (
            Span::raw("  "),
            gray.add_modifier(theme::row::DISABLED_MODIFIER),
        )
    };

    Line::from(vec![
        pointer,
        Span::raw(marker),
        Span::raw(" "),
        Span::styled(candidate.title.clone(), title_style),
    ])
}

fn render_enabled_row(
    candidate: &Candidate,
    hovered: bool,
    marker: &'static str,
    width: u16,
) -> Vec<Line<'static>> {
    let (pointer, title) = if hovered {
        let cyan = Style::default().fg(theme::row::HOVERED);
        (
            Span::styled(format!("{} ", figures::POINTER), cyan),
            Span::styled(
                candidate.title.clone(),
                cyan.add_modifier(theme::row::HOVERED_MODIFIER),
            ),
        )
    } else {
        (Span::raw("  "), Span::raw(candidate.title.clone()))
    };

    let mut first = vec![pointer, Span::raw(marker), Span::raw(" "), title];
    let description_style = Style::default().fg(theme::row::DESCRIPTION);

    let Some(description) = candidate.description.as_deref() else {
        return vec![Line::from(first)];
    };

    let inline = format!(" - {description}");
    let overflows = width > 0
        && ROW_PREFIX_WIDTH + candidate.title.width() + inline.width() >= width as usize;
    let multiline = description.lines().count() > 1;

    if !overflows && !multiline {
        first.push(Span::styled(inline, description_style));
        return vec![Line::from(first)];
    }

    let mut lines = vec![Line::from(first)];
    lines.extend(
        wrap(description, DESCRIPTION_MARGIN, width as usize)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, description_style))),
    );
    lines
}

#[cfg(test)]
#[path = "prompt_render_tests.rs"]
mod prompt_render_tests;
