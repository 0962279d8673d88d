use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::selector::{render_menu, render_selector};
use crate::ui::viewer::render_card;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.viewer()), header);

    frame.render_widget(Clear, body);
    let (selector_area, card_area) = body_regions(body);
    render_selector(frame, selector_area, app.selector());
    render_card(frame, card_area, app.viewer());

    frame.render_widget(
        Footer::new().widget(footer, app.selector().is_expanded()),
        footer,
    );

    // The open list overlays the card.
    if app.selector().is_expanded() {
        render_menu(frame, selector_area, body, app.selector());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::omdb::{LookupError, MovieSummary};
    use crate::ui::app::{LookupOutcome, UiCommand};
    use crate::ui::selector::SelectorIntent;
    use crate::ui::viewer::FAILED_LABEL;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use tokio::sync::mpsc;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn mounted_app() -> (App, mpsc::Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel(8);
        let mut app = App::new(tx);
        app.mount();
        (app, rx)
    }

    #[test]
    fn initial_screen_shows_selection_and_spinner() {
        let (app, _rx) = mounted_app();
        let screen = screen(&app);
        assert!(screen.contains("Choose your movie"));
        assert!(screen.contains("Doctor Strange"));
        assert!(screen.contains("Looking up \"Doctor Strange\"..."));
    }

    #[test]
    fn loaded_screen_shows_movie() {
        let (mut app, _rx) = mounted_app();
        app.on_lookup_finished(LookupOutcome {
            generation: app.viewer().generation,
            title: "Doctor Strange".to_string(),
            result: Ok(MovieSummary {
                poster: Some("http://x/ds.jpg".to_string()),
                title: "Doctor Strange".to_string(),
                year: "2016".to_string(),
                external_id: "tt1211837".to_string(),
            }),
        });
        let screen = screen(&app);
        assert!(screen.contains("2016 - tt1211837"));
        assert!(screen.contains("http://x/ds.jpg"));
    }

    #[test]
    fn failed_screen_shows_failure_indicator() {
        let (mut app, _rx) = mounted_app();
        app.on_lookup_finished(LookupOutcome {
            generation: app.viewer().generation,
            title: "Doctor Strange".to_string(),
            result: Err(LookupError::Http {
                title: "Doctor Strange".to_string(),
                status: 500,
            }),
        });
        let screen = screen(&app);
        assert!(screen.contains(FAILED_LABEL));
        assert!(screen.contains("HTTP 500"));
    }

    #[test]
    fn expanded_menu_lists_titles() {
        let (mut app, _rx) = mounted_app();
        app.on_selector_intent(SelectorIntent::Open);
        let screen = screen(&app);
        for title in app.selector().options() {
            assert!(screen.contains(title), "missing {}", title);
        }
    }
}
