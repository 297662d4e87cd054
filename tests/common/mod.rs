#![allow(dead_code, unused_imports)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_bearing_valid, assert_position_eq};
pub use fixtures::*;
pub use helpers::*;
