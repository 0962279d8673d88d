//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use movie_info::config::{ApiConfig, SecureString};
use movie_info::omdb::{LookupError, MovieLookup, MovieSummary, OmdbClient};
use movie_info::ui::app::{App, UiCommand};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;

/// App wired to a command channel the test can inspect.
pub fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    (App::new(tx), rx)
}

/// Drain every queued lookup command.
pub fn drain_lookups(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<(u64, String)> {
    let mut lookups = Vec::new();
    while let Ok(UiCommand::Lookup { generation, title }) = rx.try_recv() {
        lookups.push((generation, title));
    }
    lookups
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

pub fn summary(title: &str, year: &str, id: &str) -> MovieSummary {
    MovieSummary {
        poster: Some(format!("http://x/{}.jpg", id)),
        title: title.to_string(),
        year: year.to_string(),
        external_id: id.to_string(),
    }
}

pub fn client_for(base_url: &str) -> OmdbClient {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        ..ApiConfig::default()
    };
    OmdbClient::new(&api, SecureString::new("test-key".to_string())).expect("client should build")
}

/// In-memory lookup with a per-title delay, for ordering tests.
pub struct FakeLookup {
    entries: HashMap<String, (Duration, Option<MovieSummary>)>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn found(mut self, title: &str, delay_ms: u64, summary: MovieSummary) -> Self {
        self.entries.insert(
            title.to_string(),
            (Duration::from_millis(delay_ms), Some(summary)),
        );
        self
    }

    pub fn missing(mut self, title: &str, delay_ms: u64) -> Self {
        self.entries
            .insert(title.to_string(), (Duration::from_millis(delay_ms), None));
        self
    }
}

#[async_trait]
impl MovieLookup for FakeLookup {
    async fn search(&self, title: &str) -> Result<MovieSummary, LookupError> {
        let Some((delay, result)) = self.entries.get(title).cloned() else {
            return Err(LookupError::NotFound {
                title: title.to_string(),
                reason: "not in fake".to_string(),
            });
        };
        tokio::time::sleep(delay).await;
        result.ok_or_else(|| LookupError::NotFound {
            title: title.to_string(),
            reason: "empty result list".to_string(),
        })
    }
}
