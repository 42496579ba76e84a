/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the CLI calls the use cases
/// directly.
pub mod outbound;
