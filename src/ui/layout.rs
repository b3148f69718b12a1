use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
};

use crate::{
    ui::{
        app::App,
        components::{
            Button, CardGrid, InputBox, Spinner,
            search::BUTTON_WIDTH,
        },
        state::ViewState,
        util::{lower_two_thirds, middle_line},
    },
    util::colors,
};

const IDLE_HINT: &str = "Type a movie title and press Enter";
const LOADING_LABEL: &str = "Finding recommendations...";
const KEY_HINTS: &str = "Enter recommend · ↑/↓ scroll · Ctrl-U clear · Esc quit";

/// Screen regions the mouse can interact with, as of the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitboxes {
    pub button: Rect,
    pub results: Rect,
}

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let title_area = chunks[0];
        let search_area = chunks[1];
        let body_area = chunks[2];
        let footer_area = chunks[3];

        f.render_widget(
            Paragraph::new(env!("CARGO_PKG_NAME"))
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            title_area,
        );

        let search_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(BUTTON_WIDTH)])
            .split(search_area);

        let input_area = search_chunks[0];
        let button_area = search_chunks[1];

        let input = InputBox::new(&self.app.state.input);
        f.set_cursor_position(input.cursor(input_area));
        f.render_widget(input, input_area);

        let view = self.app.controller.view();
        f.render_widget(Button::new(view.is_loading()), button_area);

        let body_title = match view.results() {
            Some(items) => format!(" Recommendations ({}) ", items.len()),
            None => " Recommendations ".to_string(),
        };
        let body_block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::MUTED))
            .title(body_title);
        let results_area = body_block.inner(body_area);
        f.render_widget(body_block, body_area);

        match view {
            ViewState::Idle => {
                f.render_widget(
                    Paragraph::new(IDLE_HINT)
                        .alignment(Alignment::Center)
                        .style(Style::default().fg(colors::NEUTRAL)),
                    middle_line(results_area),
                );
            }
            ViewState::Loading => {
                f.render_widget(
                    Spinner::new(self.app.state.tick)
                        .with_style(Style::default().fg(colors::PRIMARY))
                        .with_label(LOADING_LABEL),
                    results_area,
                );
            }
            ViewState::Error(message) => {
                f.render_widget(
                    Paragraph::new(message.as_str())
                        .alignment(Alignment::Center)
                        .wrap(Wrap { trim: true })
                        .style(Style::default().fg(colors::ERROR)),
                    lower_two_thirds(results_area),
                );
            }
            ViewState::Results(items) => {
                f.render_widget(CardGrid::new(items, self.app.state.scroll), results_area);
            }
        }

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                KEY_HINTS,
                Style::default().fg(colors::MUTED),
            )))
            .alignment(Alignment::Center),
            footer_area,
        );

        self.app.hitboxes = Hitboxes {
            button: button_area,
            results: results_area,
        };
    }
}
