pub mod display_result;
pub mod reply;
pub mod search_hit;

pub use display_result::DisplayResult;
pub use reply::{MediaItem, Reply};
pub use search_hit::SearchHit;
