pub mod card;
pub mod card_grid;
pub mod search;
pub mod spinner;

pub use card::RecommendationCard;
pub use card_grid::{CardGrid, GridMetrics};
pub use search::{Button, InputBox};
pub use spinner::Spinner;
