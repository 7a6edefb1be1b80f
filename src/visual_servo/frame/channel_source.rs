use std::sync::mpsc::{Receiver, Sender, channel};

use tracing::debug;

use crate::visual_servo::common::error::Result;
use crate::visual_servo::frame::source::FrameSource;
use crate::visual_servo::frame::types::Frame;

/// Consumer end of a frame channel fed by the hosting runtime.
///
/// Blocks until the next frame arrives. The feed ends once every sender
/// has been dropped.
pub struct ChannelFrameSource {
    receiver: Receiver<Frame>,
}

impl ChannelFrameSource {
    pub fn new(receiver: Receiver<Frame>) -> Self {
        Self { receiver }
    }

    /// Creates a connected sender/source pair.
    pub fn pair() -> (Sender<Frame>, Self) {
        let (sender, receiver) = channel();
        (sender, Self::new(receiver))
    }
}

impl FrameSource for ChannelFrameSource {
    fn next_frame(&mut self) -> Option<Result<Frame>> {
        match self.receiver.recv() {
            Ok(frame) => Some(Ok(frame)),
            Err(_) => {
                debug!("Frame channel closed");
                None
            }
        }
    }
}
