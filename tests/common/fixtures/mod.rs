mod actuators;
mod observers;

// Re-export test fixtures
pub use actuators::*;
pub use observers::*;
