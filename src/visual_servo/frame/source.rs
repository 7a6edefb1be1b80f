use crate::visual_servo::common::error::Result;
use crate::visual_servo::frame::types::Frame;

/// Inbound feed of camera frames, delivered one at a time in arrival order.
pub trait FrameSource {
    /// Next frame, or `None` once the feed has ended.
    fn next_frame(&mut self) -> Option<Result<Frame>>;
}
