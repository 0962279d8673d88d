//! Dropdown rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER};

use super::state::SelectorState;

/// Height of the collapsed control, borders included.
pub const SELECTOR_HEIGHT: u16 = 3;

/// Render the collapsed control showing the committed title.
pub fn render_selector(frame: &mut Frame, area: Rect, state: &SelectorState) {
    let arrow = if state.is_expanded() { "▴" } else { "▾" };
    let line = Line::from(vec![
        Span::styled(format!(" {} ", arrow), Style::default().fg(ACCENT)),
        Span::styled(
            state.selected_title(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .title(" Choose your movie ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if state.is_expanded() {
            POPUP_BORDER
        } else {
            GLOBAL_BORDER
        }));

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the open option list just below `anchor`, clipped to `bounds`.
pub fn render_menu(frame: &mut Frame, anchor: Rect, bounds: Rect, state: &SelectorState) {
    let Some(highlighted) = state.highlighted() else {
        return;
    };

    let lines = menu_lines(state, highlighted);
    let wanted = lines.len() as u16 + 2;
    let top = anchor.y + anchor.height;
    let available = (bounds.y + bounds.height).saturating_sub(top);
    let area = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width,
        height: wanted.min(available),
    };
    if area.height == 0 {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn menu_lines(state: &SelectorState, highlighted: usize) -> Vec<Line<'static>> {
    state
        .options()
        .iter()
        .enumerate()
        .map(|(idx, title)| {
            let marker = if idx == state.selected_index() { "●" } else { " " };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(ACCENT)),
                Span::styled(
                    format!("{}. {}", idx + 1, title),
                    Style::default().fg(HEADER_TEXT),
                ),
            ]);
            if idx == highlighted {
                line.style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            }
        })
        .collect()
}
