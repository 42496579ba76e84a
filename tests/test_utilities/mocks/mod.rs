/// Mock implementations for testing
mod mock_neo_feed_repository;
mod mock_progress_reporter;

pub use mock_neo_feed_repository::MockNeoFeedRepository;
pub use mock_progress_reporter::MockProgressReporter;
