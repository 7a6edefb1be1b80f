//! Motion command types

/// Velocity pair sent to the platform once per frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionCommand {
    /// Forward velocity
    pub linear: f32,
    /// Yaw rate; positive turns left
    pub angular: f32,
}

impl MotionCommand {
    pub const STOP: MotionCommand = MotionCommand::new(0.0, 0.0);

    pub const fn new(linear: f32, angular: f32) -> Self {
        Self { linear, angular }
    }

    pub fn is_stop(&self) -> bool {
        self.linear == 0.0 && self.angular == 0.0
    }
}
