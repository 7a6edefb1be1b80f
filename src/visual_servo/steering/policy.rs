use crate::visual_servo::common::config::ServoConfig;
use crate::visual_servo::scan::types::{DetectionResult, Zone};
use crate::visual_servo::steering::types::MotionCommand;

/// Stateless mapping from detection to command.
///
/// | detection | linear | angular |
/// |---|---|---|
/// | Left | forward_speed | +turn_rate |
/// | Center | forward_speed | 0 |
/// | Right | forward_speed | -turn_rate |
/// | not found | 0 | 0 |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringPolicy {
    forward_speed: f32,
    turn_rate: f32,
}

impl SteeringPolicy {
    pub fn new(forward_speed: f32, turn_rate: f32) -> Self {
        Self {
            forward_speed,
            turn_rate,
        }
    }

    pub fn from_config(config: &ServoConfig) -> Self {
        Self::new(config.forward_speed, config.turn_rate)
    }

    pub fn decide(&self, detection: DetectionResult) -> MotionCommand {
        match detection {
            DetectionResult::Found { zone: Zone::Left } => {
                MotionCommand::new(self.forward_speed, self.turn_rate)
            }
            DetectionResult::Found { zone: Zone::Center } => {
                MotionCommand::new(self.forward_speed, 0.0)
            }
            DetectionResult::Found { zone: Zone::Right } => {
                MotionCommand::new(self.forward_speed, -self.turn_rate)
            }
            DetectionResult::NotFound => MotionCommand::STOP,
        }
    }
}

impl Default for SteeringPolicy {
    fn default() -> Self {
        Self::from_config(&ServoConfig::default())
    }
}
