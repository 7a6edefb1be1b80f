use std::collections::VecDeque;

use crate::visual_servo::common::error::Result;
use crate::visual_servo::frame::source::FrameSource;
use crate::visual_servo::frame::types::Frame;

/// In-memory FIFO of frames.
#[derive(Debug, Default)]
pub struct QueuedFrameSource {
    frames: VecDeque<Frame>,
}

impl QueuedFrameSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push_back(frame);
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FromIterator<Frame> for QueuedFrameSource {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

impl FrameSource for QueuedFrameSource {
    fn next_frame(&mut self) -> Option<Result<Frame>> {
        self.frames.pop_front().map(Ok)
    }
}
