pub mod handler;

use ratatui::layout::Rect;

/// The single row halfway down `area`.
pub fn middle_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

/// `area` with its top third cut off.
pub fn lower_two_thirds(area: Rect) -> Rect {
    let offset = area.height / 3;
    Rect {
        y: area.y + offset,
        height: area.height - offset,
        ..area
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
