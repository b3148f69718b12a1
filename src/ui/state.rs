use crate::{controller::RecommendView, http::RecommendationItem};

/// What the body of the screen shows. Exactly one region is visible at a
/// time, so loading can never overlap results or an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Results(Vec<RecommendationItem>),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn results(&self) -> Option<&[RecommendationItem]> {
        match self {
            ViewState::Results(items) => Some(items),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl RecommendView for ViewState {
    fn clear(&mut self) {
        *self = ViewState::Idle;
    }

    fn show_loading(&mut self) {
        *self = ViewState::Loading;
    }

    fn show_results(&mut self, items: Vec<RecommendationItem>) {
        *self = ViewState::Results(items);
    }

    fn show_error(&mut self, message: String) {
        *self = ViewState::Error(message);
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub input: String,
    /// First visible row of the card grid.
    pub scroll: usize,
    pub tick: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::RecommendationController;
    use crate::http::FetchError;

    fn up() -> RecommendationItem {
        RecommendationItem {
            title: "Up".to_string(),
            genres: "Animation".to_string(),
            score: 0.5,
            source: None,
        }
    }

    #[test]
    fn loading_is_shown_until_completion() {
        let mut controller = RecommendationController::new(ViewState::default());
        controller.view_mut().show_error("old".to_string());

        let query = controller.trigger("Up").unwrap();
        assert!(controller.view().is_loading());
        assert_eq!(controller.view().error(), None);
        assert_eq!(controller.view().results(), None);

        controller.complete(query.seq, Ok(vec![up()]));
        assert!(!controller.view().is_loading());
        assert_eq!(controller.view().results(), Some(&[up()][..]));
        assert_eq!(controller.view().error(), None);
    }

    #[test]
    fn error_replaces_loading() {
        let mut controller = RecommendationController::new(ViewState::default());
        let query = controller.trigger("Up").unwrap();
        controller.complete(
            query.seq,
            Err(FetchError::Empty("No matches".to_string())),
        );
        assert_eq!(controller.view(), &ViewState::Error("No matches".to_string()));
    }

    #[test]
    fn blank_trigger_keeps_previous_results() {
        let mut controller = RecommendationController::new(ViewState::Results(vec![up()]));
        assert!(controller.trigger("  ").is_none());
        assert_eq!(controller.view().results().map(<[_]>::len), Some(1));
    }

    #[test]
    fn stale_error_does_not_hide_newer_loading() {
        let mut controller = RecommendationController::new(ViewState::default());
        let first = controller.trigger("Up").unwrap();
        controller.trigger("Heat").unwrap();
        controller.complete(first.seq, Err(FetchError::Transport("timeout".to_string())));
        assert!(controller.view().is_loading());
    }
}
