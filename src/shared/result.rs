/// Result alias used throughout the crate; errors are `anyhow::Error` so
/// `NeoError` values and transport errors propagate through the same `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
