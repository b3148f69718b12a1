use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use unicode_width::UnicodeWidthStr;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
/// UI ticks per spinner frame.
const TICKS_PER_FRAME: usize = 3;

pub struct Spinner<'a> {
    tick: usize,
    style: Style,
    label: Option<&'a str>,
}

impl<'a> Spinner<'a> {
    pub fn new(tick: usize) -> Self {
        Self {
            tick,
            style: Style::default(),
            label: None,
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    fn symbol(&self) -> &'static str {
        FRAMES[(self.tick / TICKS_PER_FRAME) % FRAMES.len()]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let text = match self.label {
            Some(label) => format!("{} {}", self.symbol(), label),
            None => self.symbol().to_string(),
        };

        let width = text.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height / 2;
        buf.set_stringn(x, y, text, area.width as usize, self.style);
    }
}
