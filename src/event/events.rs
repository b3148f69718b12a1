use crate::{
    controller::Query,
    http::{FetchError, RecommendationItem},
};

#[derive(Debug, Clone)]
pub enum Event {
    // Commands
    Recommend(Query),

    // Events
    RecommendationsFetched {
        seq: u64,
        outcome: Result<Vec<RecommendationItem>, FetchError>,
    },
}
