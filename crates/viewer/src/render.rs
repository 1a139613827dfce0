//! Text rendering of the viewer page.

use std::io::{self, Write};

use crate::state::ViewState;

pub const PAGE_TITLE: &str = "Health Status Service";
pub const SECTION_HEADING: &str = "API Health Check";
pub const LOADING_TEXT: &str = "Loading...";
pub const STACK_FOOTER: &str = "Rust + Axum + Tokio";

const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Renders the whole page for `state`, one line per entry, newline terminated.
pub fn render_page(state: &ViewState) -> String {
    let mut lines = vec![
        format!("{BOLD}{PAGE_TITLE}{RESET}"),
        String::new(),
        format!("{BOLD}{SECTION_HEADING}{RESET}"),
    ];
    lines.extend(render_state(state));
    lines.push(String::new());
    lines.push(STACK_FOOTER.to_string());

    let mut page = lines.join("\n");
    page.push('\n');
    page
}

/// Renders only the block that depends on the view state.
pub fn render_state(state: &ViewState) -> Vec<String> {
    match state {
        ViewState::Loading => vec![LOADING_TEXT.to_string()],
        ViewState::Error(message) => vec![format!("{RED}{message}{RESET}")],
        ViewState::Success(record) => vec![
            format!("  {BOLD}Status:{RESET} {}", record.status),
            format!("  {BOLD}Version:{RESET} {}", record.version),
            format!("  {BOLD}Timestamp:{RESET} {}", record.timestamp),
        ],
    }
}

/// Draws pages to a terminal, replacing the previous page on each draw.
pub struct TerminalRenderer<W: Write> {
    out: W,
    drawn_lines: usize,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            drawn_lines: 0,
        }
    }

    /// Erases the previously drawn page, then draws the page for `state`.
    pub fn draw(&mut self, state: &ViewState) -> io::Result<()> {
        if self.drawn_lines > 0 {
            // Cursor up over the old page, then clear to end of screen.
            write!(self.out, "\x1b[{}A\x1b[J", self.drawn_lines)?;
        }

        let page = render_page(state);
        self.out.write_all(page.as_bytes())?;
        self.out.flush()?;

        self.drawn_lines = page.lines().count();
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use common::StatusRecord;

    use super::*;

    fn success_state() -> ViewState {
        ViewState::Success(StatusRecord {
            status: "healthy".to_string(),
            timestamp: "2024-01-01T12:00:00Z".to_string(),
            version: "1.0.0".to_string(),
        })
    }

    #[test]
    fn loading_page_shows_only_indicator() {
        let page = render_page(&ViewState::Loading);

        assert!(page.contains("Loading..."));
        assert!(!page.contains("Status:"));
        assert!(!page.contains("Failed to connect to API"));
    }

    #[test]
    fn success_page_shows_labelled_fields() {
        let page = render_page(&success_state());

        assert!(page.contains("Status:"));
        assert!(page.contains("healthy"));
        assert!(page.contains("Version:"));
        assert!(page.contains("1.0.0"));
        assert!(page.contains("Timestamp:"));
        assert!(page.contains("2024-01-01T12:00:00Z"));
        assert!(!page.contains("Loading..."));
    }

    #[test]
    fn error_page_shows_red_message() {
        let page = render_page(&ViewState::connection_error());

        assert!(page.contains("\x1b[31mFailed to connect to API\x1b[0m"));
        assert!(!page.contains("Loading..."));
        assert!(!page.contains("Status:"));
    }

    #[test]
    fn every_page_carries_chrome() {
        for state in [ViewState::Loading, success_state(), ViewState::connection_error()] {
            let page = render_page(&state);
            assert!(page.contains("API Health Check"));
            assert!(page.contains(PAGE_TITLE));
            assert!(page.ends_with("Rust + Axum + Tokio\n"));
        }
    }

    #[test]
    fn first_draw_does_not_erase() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&ViewState::Loading).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(out, render_page(&ViewState::Loading));
    }

    #[test]
    fn redraw_erases_loading_page() {
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.draw(&ViewState::Loading).unwrap();
        renderer.draw(&success_state()).unwrap();

        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let loading_lines = render_page(&ViewState::Loading).lines().count();
        let erase = format!("\x1b[{loading_lines}A\x1b[J");

        let (_, after) = out.split_once(&erase).expect("loading page is erased");
        assert_eq!(after, render_page(&success_state()));
        assert!(!after.contains("Loading..."));
    }
}
