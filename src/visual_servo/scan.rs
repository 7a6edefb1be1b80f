//! Target scanning module
//!
//! Locates the first pixel matching the target color and reports which
//! horizontal third of the frame it fell in.

mod scanner;
pub mod types;

pub use scanner::FrameScanner;
pub use types::{DetectionResult, Zone};
