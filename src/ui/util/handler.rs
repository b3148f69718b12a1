use std::sync::Arc;

use flume::Sender;
use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    controller::Query,
    event::events::Event,
    http::RecommendationSource,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        tui::{TerminalEvent, Tui},
    },
};

fn fetch_key(seq: u64) -> String {
    format!("recommend:{seq}")
}

/// Runs one request in the background and reports back with a single
/// [`Event::RecommendationsFetched`].
pub fn spawn_fetch(
    source: Arc<dyn RecommendationSource>,
    query: Query,
    tx: Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let outcome = source.recommend(&query.title).await;
        match &outcome {
            Ok(items) => info!(seq = query.seq, count = items.len(), "recommendations fetched"),
            Err(e) => warn!(seq = query.seq, error = %e, "recommendation request failed"),
        }

        let _ = tx.send(Event::RecommendationsFetched {
            seq: query.seq,
            outcome,
        });
    })
}

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if evt == TerminalEvent::FocusGained {
                tui.clear()?;
            }
            if Self::handle_event(app, evt) {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_action(app, evt);
            should_render = true;
        }

        Ok(should_render)
    }

    pub fn handle_event(app: &mut App, evt: TerminalEvent) -> bool {
        match evt {
            TerminalEvent::FocusGained => app.has_focus = true,
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Mouse(mouse) => Self::handle_mouse_event(app, mouse),
            TerminalEvent::Paste(text) => app.update(AppMessage::InputText(text)),
            TerminalEvent::Resize(..) => {}
            TerminalEvent::Tick => {
                app.state.tick = app.state.tick.wrapping_add(1);
                return app.has_focus;
            }
        }

        true
    }

    pub fn handle_action(app: &mut App, evt: Event) {
        match evt {
            Event::Recommend(query) => {
                let key = fetch_key(query.seq);
                let task = spawn_fetch(app.source.clone(), query, app.event_tx.clone());
                app.task_manager.spawn(&key, task);
            }
            Event::RecommendationsFetched { seq, outcome } => {
                app.task_manager.finish(&fetch_key(seq));
                if app.controller.complete(seq, outcome) {
                    app.state.scroll = 0;
                }
            }
        }
    }

    fn handle_key_event(app: &mut App, evt: KeyEvent) {
        if let Some(msg) = InputHandler::handle_key(evt) {
            app.update(msg);
        }
    }

    fn handle_mouse_event(app: &mut App, evt: MouseEvent) {
        let position = Position::new(evt.column, evt.row);
        match evt.kind {
            MouseEventKind::Down(MouseButton::Left) if app.hitboxes.button.contains(position) => {
                app.update(AppMessage::Submit)
            }
            MouseEventKind::ScrollUp => app.update(AppMessage::ScrollUp),
            MouseEventKind::ScrollDown => app.update(AppMessage::ScrollDown),
            _ => {}
        }
    }
}
