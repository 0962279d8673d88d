//! Detail card rendering.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::omdb::{LookupFailure, MovieSummary};
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
};

use super::state::{DetailViewerState, ViewState};

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const FAILED_LABEL: &str = "✗ Could not load movie details";
pub const NO_POSTER_LABEL: &str = "No poster available";

/// Render the detail card for the current view state.
pub fn render_card(frame: &mut Frame, area: Rect, state: &DetailViewerState) {
    let block = Block::default()
        .title(" Movie ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let paragraph = Paragraph::new(card_lines(state))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Lines shown inside the card. One layout per view state.
pub fn card_lines(state: &DetailViewerState) -> Vec<Line<'static>> {
    match &state.view {
        ViewState::Loading => loading_lines(state.title.as_deref(), state.animation_tick),
        ViewState::Loaded(summary) => loaded_lines(summary),
        ViewState::Failed(failure) => failed_lines(state.title.as_deref(), failure),
    }
}

fn loading_lines(title: Option<&str>, animation_tick: u8) -> Vec<Line<'static>> {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];
    let message = match title {
        Some(title) => format!("Looking up \"{}\"...", title),
        None => "Waiting for a title...".to_string(),
    };

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner), Style::default().fg(ACCENT)),
            Span::styled(message, Style::default().fg(HEADER_TEXT)),
        ]),
    ]
}

fn loaded_lines(summary: &MovieSummary) -> Vec<Line<'static>> {
    let poster = match &summary.poster {
        Some(url) => Span::styled(url.clone(), Style::default().fg(HEADER_TEXT)),
        None => Span::styled(
            NO_POSTER_LABEL,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ),
    };

    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(STATUS_OK)),
            Span::styled(
                summary.title.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(
                format!("{} - {}", summary.year, summary.external_id),
                Style::default().fg(HEADER_TEXT),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    Poster: ", Style::default().fg(MUTED_TEXT)),
            poster,
        ]),
    ]
}

fn failed_lines(title: Option<&str>, failure: &LookupFailure) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            format!("  {}", FAILED_LABEL),
            Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
        )]),
    ];
    if let Some(title) = title {
        lines.push(Line::from(vec![
            Span::styled("    Title: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(title.to_string(), Style::default().fg(HEADER_TEXT)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("    Reason: ", Style::default().fg(STATUS_ERROR)),
        Span::styled(failure.message.clone(), Style::default().fg(MUTED_TEXT)),
    ]));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::omdb::LookupErrorKind;

    fn text(lines: &[Line]) -> String {
        lines
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

    fn state(view: ViewState) -> DetailViewerState {
        DetailViewerState {
            title: Some("Ironman".to_string()),
            generation: 1,
            view,
            animation_tick: 0,
        }
    }

    #[test]
    fn loading_shows_spinner_and_title() {
        let rendered = text(&card_lines(&state(ViewState::Loading)));
        assert!(rendered.contains(SPINNER_FRAMES[0]));
        assert!(rendered.contains("Looking up \"Ironman\"..."));
    }

    #[test]
    fn spinner_follows_animation_tick() {
        let mut loading = state(ViewState::Loading);
        loading.animation_tick = 3;
        assert!(text(&card_lines(&loading)).contains(SPINNER_FRAMES[3]));
    }

    #[test]
    fn loaded_shows_all_fields() {
        let rendered = text(&card_lines(&state(ViewState::Loaded(MovieSummary {
            poster: Some("http://x/p.jpg".to_string()),
            title: "Ironman".to_string(),
            year: "2008".to_string(),
            external_id: "tt0371746".to_string(),
        }))));
        assert!(rendered.contains("Ironman"));
        assert!(rendered.contains("2008 - tt0371746"));
        assert!(rendered.contains("http://x/p.jpg"));
        assert!(!rendered.contains(FAILED_LABEL));
    }

    #[test]
    fn missing_poster_uses_placeholder() {
        let rendered = text(&card_lines(&state(ViewState::Loaded(MovieSummary {
            poster: None,
            title: "Ironman".to_string(),
            year: "2008".to_string(),
            external_id: "tt0371746".to_string(),
        }))));
        assert!(rendered.contains(NO_POSTER_LABEL));
    }

    #[test]
    fn failed_is_distinct_from_loaded_with_empty_fields() {
        let empty = text(&card_lines(&state(ViewState::Loaded(MovieSummary {
            poster: None,
            title: String::new(),
            year: String::new(),
            external_id: String::new(),
        }))));
        let failed = text(&card_lines(&state(ViewState::Failed(LookupFailure::new(
            LookupErrorKind::NotFound,
            "No match for 'Ironman': empty result list",
        )))));

        assert_ne!(empty, failed);
        assert!(failed.contains(FAILED_LABEL));
        assert!(failed.contains("empty result list"));
        assert!(!empty.contains(FAILED_LABEL));
    }
}
