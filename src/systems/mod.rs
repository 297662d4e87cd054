mod registry;
mod replay;
mod smoothing;

pub use registry::{CommandHandler, CommandRegistry};
pub use replay::{deploy, replay};
pub use smoothing::centered_moving_average;
