//! The recommendation view controller.
//!
//! The controller decides *when* the view changes; what a change looks like
//! is up to the [`RecommendView`] implementation. Every trigger is tagged
//! with a sequence number and only the completion for the latest trigger is
//! applied, so a slow earlier response can never overwrite a newer one.

use tracing::{debug, info, warn};

use crate::http::{FetchError, RecommendationItem};

#[cfg_attr(test, mockall::automock)]
pub trait RecommendView {
    /// Drops rendered cards and hides both the results and the error.
    fn clear(&mut self);
    fn show_loading(&mut self);
    /// Replaces the loading indicator with one card per item.
    fn show_results(&mut self, items: Vec<RecommendationItem>);
    /// Replaces the loading indicator with `message`.
    fn show_error(&mut self, message: String);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub seq: u64,
    pub title: String,
}

pub struct RecommendationController<V> {
    view: V,
    issued: u64,
}

impl<V: RecommendView> RecommendationController<V> {
    pub fn new(view: V) -> Self {
        Self { view, issued: 0 }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Sequence number of the most recent trigger, 0 before the first.
    pub fn latest_seq(&self) -> u64 {
        self.issued
    }

    /// Starts a request for `input`, or does nothing if it is blank.
    pub fn trigger(&mut self, input: &str) -> Option<Query> {
        let title = input.trim();
        if title.is_empty() {
            return None;
        }

        self.issued += 1;
        self.view.clear();
        self.view.show_loading();

        info!(seq = self.issued, title, "recommendations requested");
        Some(Query {
            seq: self.issued,
            title: title.to_string(),
        })
    }

    /// Applies the outcome of request `seq`. Returns false when a newer
    /// request has been issued since and the outcome was dropped.
    pub fn complete(
        &mut self,
        seq: u64,
        outcome: Result<Vec<RecommendationItem>, FetchError>,
    ) -> bool {
        if seq != self.issued {
            debug!(seq, latest = self.issued, "dropping stale recommendation response");
            return false;
        }

        match outcome {
            Ok(items) => {
                info!(seq, count = items.len(), "showing recommendations");
                self.view.show_results(items);
            }
            Err(err) => {
                warn!(seq, error = ?err, "showing recommendation error");
                self.view.show_error(err.to_string());
            }
        }
        true
    }
}
