use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::{http::RecommendationItem, util::colors};

/// Border plus title, genres, a spacer and the match line.
pub const CARD_HEIGHT: u16 = 6;

pub struct RecommendationCard<'a> {
    item: &'a RecommendationItem,
}

impl<'a> RecommendationCard<'a> {
    pub fn new(item: &'a RecommendationItem) -> Self {
        Self { item }
    }
}

impl Widget for RecommendationCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let badge = Span::styled(
            format!(" {} ", self.item.source_label()),
            Style::default()
                .fg(colors::BACKGROUND)
                .bg(colors::SECONDARY)
                .add_modifier(Modifier::BOLD),
        );

        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::MUTED))
            .title(Line::from(badge));

        let lines = vec![
            Line::from(Span::styled(
                self.item.title.as_str(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.item.genres.as_str(),
                Style::default().fg(colors::NEUTRAL),
            )),
            Line::default(),
            Line::from(Span::styled(
                format!("Match: {}%", self.item.match_percent()),
                Style::default().fg(colors::ACCENT),
            )),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::util::buffer_text;

    fn render(item: &RecommendationItem) -> String {
        let area = Rect::new(0, 0, 30, CARD_HEIGHT);
        let mut buf = Buffer::empty(area);
        RecommendationCard::new(item).render(area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn shows_every_field() {
        let text = render(&RecommendationItem {
            title: "Inception".to_string(),
            genres: "Sci-Fi".to_string(),
            score: 0.873,
            source: Some("Hybrid".to_string()),
        });

        assert!(text.contains("Hybrid"));
        assert!(text.contains("Inception"));
        assert!(text.contains("Sci-Fi"));
        assert!(text.contains("Match: 87%"));
    }

    #[test]
    fn badge_defaults_when_source_missing() {
        let text = render(&RecommendationItem {
            title: "Up".to_string(),
            genres: "Animation".to_string(),
            score: 0.5,
            source: None,
        });

        assert!(text.lines().next().unwrap().contains(" Hybrid "));
        assert!(text.contains("Match: 50%"));
    }
}
