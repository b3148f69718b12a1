use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::util::colors;

pub const BUTTON_LABEL: &str = "Recommend";
pub const BUTTON_WIDTH: u16 = 15;

/// Longest suffix of `value` that fits in `width` columns.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (idx, ch) in value.char_indices().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &value[start..]
}

pub struct InputBox<'a> {
    value: &'a str,
}

impl<'a> InputBox<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }

    fn block() -> Block<'static> {
        Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::PRIMARY))
            .title(" Movie title ")
    }

    /// Text that fits, leaving one cell for the cursor.
    fn shown(&self, inner: Rect) -> &'a str {
        visible_tail(self.value, inner.width.saturating_sub(1) as usize)
    }

    pub fn cursor(&self, area: Rect) -> Position {
        let inner = Self::block().inner(area);
        Position::new(inner.x + self.shown(inner).width() as u16, inner.y)
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block();
        let shown = self.shown(block.inner(area));
        Paragraph::new(shown).block(block).render(area, buf);
    }
}

pub struct Button {
    busy: bool,
}

impl Button {
    pub fn new(busy: bool) -> Self {
        Self { busy }
    }
}

impl Widget for Button {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.busy {
            Style::default().fg(colors::NEUTRAL)
        } else {
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD)
        };

        Paragraph::new(BUTTON_LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::bordered()
                    .border_set(border::ROUNDED)
                    .border_style(style),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::util::buffer_text;

    #[test]
    fn tail_keeps_the_end_of_long_input() {
        assert_eq!(visible_tail("Men in Black", 20), "Men in Black");
        assert_eq!(visible_tail("Men in Black", 5), "Black");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn tail_respects_wide_characters() {
        assert_eq!(visible_tail("千と千尋", 5), "千尋");
    }

    #[test]
    fn cursor_follows_text() {
        let area = Rect::new(0, 0, 20, 3);
        assert_eq!(InputBox::new("").cursor(area), Position::new(1, 1));
        assert_eq!(InputBox::new("Up").cursor(area), Position::new(3, 1));
        // inner width 18, one cell reserved for the cursor
        let long = "x".repeat(40);
        assert_eq!(InputBox::new(&long).cursor(area), Position::new(18, 1));
    }

    #[test]
    fn button_shows_label() {
        let area = Rect::new(0, 0, BUTTON_WIDTH, 3);
        let mut buf = Buffer::empty(area);
        Button::new(false).render(area, &mut buf);
        assert!(buffer_text(&buf).contains(BUTTON_LABEL));
    }
}
