/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (NeoWs, file system, console).
pub mod formatter;
pub mod neo_feed_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::NeoFormatter;
pub use neo_feed_repository::NeoFeedRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
