//! Frame module
//!
//! Camera frame types and the inbound frame feed.

mod source;
mod queued_source;
mod channel_source;
pub mod types;

pub use source::FrameSource;
pub use queued_source::QueuedFrameSource;
pub use channel_source::ChannelFrameSource;
pub use types::{Frame, Rgb};
