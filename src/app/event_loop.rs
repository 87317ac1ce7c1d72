use std::io::{self, Stderr, Write};

use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};

use super::session::SessionLifecycle;
use crate::prompt::AutocompletePrompt;
use crate::suggest::Matcher;

/// The prompt draws on stderr so stdout stays free for the submitted value
pub type PromptTerminal = Terminal<CrosstermBackend<Stderr>>;

const BELL: &[u8] = b"\x07";

/// Rows reserved for the inline viewport
///
/// One prompt line plus the visible rows; rows with descriptions may wrap,
/// so they get a second line each. Never taller than the terminal.
pub fn viewport_height(limit: usize, choice_count: usize, has_descriptions: bool, terminal_rows: u16) -> u16 {
    let visible = if limit == 0 {
        choice_count
    } else {
        limit.min(choice_count)
    };
    let rows = visible.max(1) * if has_descriptions { 2 } else { 1 };
    let wanted = u16::try_from(rows + 1).unwrap_or(u16::MAX);
    wanted.min(terminal_rows.max(1))
}

/// Enter raw mode and create an inline viewport of `height` rows
///
/// Also installs a panic hook that leaves raw mode before reporting.
pub fn init_terminal(height: u16) -> io::Result<PromptTerminal> {
    enable_raw_mode()?;

    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        hook(info);
    }));

    Terminal::with_options(
        CrosstermBackend::new(io::stderr()),
        TerminalOptions {
            viewport: Viewport::Inline(height),
        },
    )
}

/// Leave raw mode with the cursor below the last of `used_rows` drawn lines
pub fn restore_terminal(terminal: &mut PromptTerminal, used_rows: usize) -> io::Result<()> {
    let area = terminal.get_frame().area();
    let last = u16::try_from(used_rows.saturating_sub(1))
        .unwrap_or(u16::MAX)
        .min(area.height.saturating_sub(1));
    terminal.set_cursor_position((0, area.y.saturating_add(last)))?;
    terminal.show_cursor()?;
    let backend = terminal.backend_mut();
    backend.write_all(b"\r\n")?;
    backend.flush()?;
    disable_raw_mode()
}

/// Lines the final frame occupies
pub fn used_rows<M: Matcher>(
    prompt: &AutocompletePrompt<M, SessionLifecycle>,
    terminal: &mut PromptTerminal,
) -> usize {
    let width = terminal.get_frame().area().width;
    prompt.render(width).lines.len()
}

/// Drive the prompt until it reaches a terminal state
///
/// Key presses and matcher resolutions are handled one at a time on the
/// current task. Matcher futures only make progress while this loop waits.
pub async fn run<M: Matcher>(
    prompt: &mut AutocompletePrompt<M, SessionLifecycle>,
    terminal: &mut PromptTerminal,
) -> io::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| draw(frame, prompt))?;
        ring_bells(prompt, terminal)?;

        if prompt.lifecycle().is_closed() {
            break;
        }

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    prompt.handle_key(key);
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err),
                None => {
                    log::debug!("Event stream ended, aborting prompt");
                    prompt.abort();
                }
            },
            Some(resolution) = prompt.next_resolution(), if prompt.has_pending() => {
                prompt.apply(resolution);
            }
        }
    }

    Ok(())
}

fn draw<M: Matcher>(frame: &mut Frame, prompt: &AutocompletePrompt<M, SessionLifecycle>) {
    let area = frame.area();
    frame.render_widget(Paragraph::new(prompt.render(area.width)), area);

    if !prompt.status().is_terminal() {
        let x = area.x.saturating_add(prompt.cursor_column()).min(area.right().saturating_sub(1));
        frame.set_cursor_position((x, area.y));
    }
}

fn ring_bells<M: Matcher>(
    prompt: &mut AutocompletePrompt<M, SessionLifecycle>,
    terminal: &mut PromptTerminal,
) -> io::Result<()> {
    let bells = prompt.lifecycle_mut().take_bells();
    if bells == 0 {
        return Ok(());
    }

    log::debug!("Ringing bell ({} queued)", bells);
    let backend = terminal.backend_mut();
    backend.write_all(BELL)?;
    backend.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_is_prompt_line_plus_limit() {
        assert_eq!(viewport_height(10, 50, false, 40), 11);
    }

    #[test]
    fn test_height_shrinks_to_choice_count() {
        assert_eq!(viewport_height(10, 3, false, 40), 4);
    }

    #[test]
    fn test_height_with_zero_limit_shows_all() {
        assert_eq!(viewport_height(0, 25, false, 40), 26);
    }

    #[test]
    fn test_height_keeps_a_row_for_the_fallback() {
        assert_eq!(viewport_height(10, 0, false, 40), 2);
    }

    #[test]
    fn test_height_doubles_rows_with_descriptions() {
        assert_eq!(viewport_height(3, 10, true, 40), 7);
    }

    #[test]
    fn test_height_capped_by_terminal() {
        assert_eq!(viewport_height(0, 500, true, 24), 24);
    }
}
