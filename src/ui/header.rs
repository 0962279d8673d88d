use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use crate::ui::viewer::{DetailViewerState, ViewState};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, viewer: &DetailViewerState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_color) = match viewer.view {
            ViewState::Loading => ("loading", HEADER_TEXT),
            ViewState::Loaded(_) => ("loaded", STATUS_OK),
            ViewState::Failed(_) => ("failed", STATUS_ERROR),
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Movie Info", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled(viewer.title.clone().unwrap_or_default(), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
