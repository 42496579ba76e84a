/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the NeoWs HTTP client,
/// report formatters, console progress and output sinks.
pub mod outbound;
