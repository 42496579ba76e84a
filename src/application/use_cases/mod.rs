/// Use cases module containing application business logic orchestration
mod browse_feed;
mod show_neo_details;

pub use browse_feed::{BrowseFeedUseCase, LoadMoreOutcome};
pub use show_neo_details::ShowNeoDetailsUseCase;
