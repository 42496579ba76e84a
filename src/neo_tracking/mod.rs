/// Domain layer - NEO records, feed windows, filters and the pure transforms over them
pub mod domain;
pub mod policies;
pub mod services;
