/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and summaries back out,
/// keeping the domain layer isolated from the CLI.
mod detail_request;
mod feed_request;
mod output_format;

pub use detail_request::{DetailRequest, DetailResponse};
pub use feed_request::{FeedRequest, FeedResponse};
pub use output_format::OutputFormat;
