use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::info;

use crate::{
    config::Config,
    controller::RecommendationController,
    event::events::Event,
    http::{ApiService, RecommendationSource},
    util::task::TaskManager,
};

use super::{
    components::GridMetrics,
    layout::{AppLayout, Hitboxes},
    message::AppMessage,
    state::{AppState, ViewState},
    tui,
    util::handler::EventHandler,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub source: Arc<dyn RecommendationSource>,
    pub controller: RecommendationController<ViewState>,
    pub state: AppState,
    pub hitboxes: Hitboxes,
    pub task_manager: TaskManager,
    pub mouse: bool,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let api = ApiService::new(&config.base_url()?)?;
        info!(endpoint = %api.endpoint(), "using recommendation service");

        Ok(Self::with_source(Arc::new(api), config.mouse))
    }

    pub fn with_source(source: Arc<dyn RecommendationSource>, mouse: bool) -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            event_rx,
            event_tx,
            source,
            controller: RecommendationController::new(ViewState::default()),
            state: AppState::default(),
            hitboxes: Hitboxes::default(),
            task_manager: TaskManager::new(),
            mouse,
            has_focus: true,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?.mouse(self.mouse).paste(true);
        tui.enter()?;

        while !self.should_quit {
            tui.draw(|f| {
                self.ui(f);
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    fn ui(&mut self, frame: &mut Frame) {
        if self.has_focus {
            let area = frame.area();
            AppLayout::new(self).render(frame, area);
        }
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::InputChar(c) => self.state.input.push(c),
            AppMessage::InputText(text) => self
                .state
                .input
                .extend(text.chars().filter(|c| !c.is_control())),
            AppMessage::Backspace => {
                self.state.input.pop();
            }
            AppMessage::ClearInput => self.state.input.clear(),
            AppMessage::Submit => self.submit(),
            AppMessage::ScrollUp => self.scroll_by(-1),
            AppMessage::ScrollDown => self.scroll_by(1),
            AppMessage::PageUp => self.scroll_by(-(self.grid().visible_rows as isize)),
            AppMessage::PageDown => self.scroll_by(self.grid().visible_rows as isize),
        }
    }

    fn submit(&mut self) {
        if let Some(query) = self.controller.trigger(&self.state.input) {
            self.state.scroll = 0;
            let _ = self.event_tx.send(Event::Recommend(query));
        }
    }

    /// Card layout as of the last rendered frame.
    pub fn grid(&self) -> GridMetrics {
        let items = self.controller.view().results().map_or(0, <[_]>::len);
        GridMetrics::new(self.hitboxes.results, items)
    }

    fn scroll_by(&mut self, delta: isize) {
        let max = self.grid().max_scroll();
        self.state.scroll = self.state.scroll.saturating_add_signed(delta).min(max);
    }
}
