//! Steering module
//!
//! Maps a detection result to a motion command.

mod policy;
pub mod types;

pub use policy::SteeringPolicy;
pub use types::MotionCommand;
