use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    widgets::Widget,
};

use crate::{
    http::RecommendationItem,
    ui::components::card::{CARD_HEIGHT, RecommendationCard},
};

pub const CARD_MIN_WIDTH: u16 = 28;

/// How a list of cards folds into rows for a given area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridMetrics {
    pub columns: usize,
    pub visible_rows: usize,
    pub total_rows: usize,
}

impl GridMetrics {
    pub fn new(area: Rect, items: usize) -> Self {
        let columns = (area.width / CARD_MIN_WIDTH).max(1) as usize;
        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        Self {
            columns,
            visible_rows,
            total_rows: items.div_ceil(columns),
        }
    }

    pub fn max_scroll(&self) -> usize {
        self.total_rows.saturating_sub(self.visible_rows)
    }
}

/// Cards in server order, left to right then top to bottom.
pub struct CardGrid<'a> {
    items: &'a [RecommendationItem],
    scroll: usize,
}

impl<'a> CardGrid<'a> {
    pub fn new(items: &'a [RecommendationItem], scroll: usize) -> Self {
        Self { items, scroll }
    }
}

impl Widget for CardGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let metrics = GridMetrics::new(area, self.items.len());
        let first_row = self.scroll.min(metrics.max_scroll());

        let rows = self
            .items
            .chunks(metrics.columns)
            .skip(first_row)
            .take(metrics.visible_rows);

        for (i, row) in rows.enumerate() {
            let row_area = Rect {
                y: area.y + i as u16 * CARD_HEIGHT,
                height: CARD_HEIGHT,
                ..area
            }
            .intersection(area);

            let cells = Layout::horizontal(vec![
                Constraint::Ratio(1, metrics.columns as u32);
                metrics.columns
            ])
            .split(row_area);

            for (item, cell) in row.iter().zip(cells.iter()) {
                RecommendationCard::new(item).render(*cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::util::buffer_text;

    fn items(n: usize) -> Vec<RecommendationItem> {
        (0..n)
            .map(|i| RecommendationItem {
                title: format!("Movie {i}"),
                genres: "Drama".to_string(),
                score: 0.5,
                source: None,
            })
            .collect()
    }

    #[test]
    fn metrics_follow_area() {
        let metrics = GridMetrics::new(Rect::new(0, 0, 60, 12), 5);
        assert_eq!(
            metrics,
            GridMetrics {
                columns: 2,
                visible_rows: 2,
                total_rows: 3
            }
        );
        assert_eq!(metrics.max_scroll(), 1);
    }

    #[test]
    fn narrow_area_still_has_one_column() {
        let metrics = GridMetrics::new(Rect::new(0, 0, 10, 3), 4);
        assert_eq!(metrics.columns, 1);
        assert_eq!(metrics.visible_rows, 1);
        assert_eq!(metrics.max_scroll(), 3);
    }

    #[test]
    fn renders_in_order_from_scroll_row() {
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        CardGrid::new(&items(5), 1).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(!text.contains("Movie 1"));
        let positions: Vec<_> = ["Movie 2", "Movie 3", "Movie 4"]
            .iter()
            .map(|t| text.find(t).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn scroll_past_end_is_clamped() {
        let area = Rect::new(0, 0, 30, 6);
        let mut buf = Buffer::empty(area);
        CardGrid::new(&items(3), 99).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("Movie 2"));
    }
}
