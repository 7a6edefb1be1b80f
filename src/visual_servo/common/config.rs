//! Controller configuration types

use crate::visual_servo::frame::Rgb;

/// Configuration for the ball-chasing controller
#[derive(Debug, Clone, PartialEq)]
pub struct ServoConfig {
    /// Exact color signature of the target; no tolerance is applied
    pub target_color: Rgb,
    /// Linear velocity used whenever the target is visible
    pub forward_speed: f32,
    /// Magnitude of the angular velocity used to turn toward an off-center target
    pub turn_rate: f32,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            target_color: Rgb::WHITE,
            forward_speed: 0.5,
            turn_rate: 1.0,
        }
    }
}

impl ServoConfig {
    pub fn builder() -> ServoConfigBuilder {
        ServoConfigBuilder::default()
    }
}

/// Builder for ServoConfig
#[derive(Default)]
pub struct ServoConfigBuilder {
    target_color: Option<Rgb>,
    forward_speed: Option<f32>,
    turn_rate: Option<f32>,
}

impl ServoConfigBuilder {
    pub fn target_color(mut self, color: Rgb) -> Self {
        self.target_color = Some(color);
        self
    }

    pub fn forward_speed(mut self, speed: f32) -> Self {
        self.forward_speed = Some(speed);
        self
    }

    pub fn turn_rate(mut self, rate: f32) -> Self {
        self.turn_rate = Some(rate);
        self
    }

    pub fn build(self) -> ServoConfig {
        let default = ServoConfig::default();
        ServoConfig {
            target_color: self.target_color.unwrap_or(default.target_color),
            forward_speed: self.forward_speed.unwrap_or(default.forward_speed),
            turn_rate: self.turn_rate.unwrap_or(default.turn_rate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_white_ball_tuning() {
        let config = ServoConfig::default();
        assert_eq!(config.target_color, Rgb::WHITE);
        assert_eq!(config.forward_speed, 0.5);
        assert_eq!(config.turn_rate, 1.0);
    }

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let config = ServoConfig::builder()
            .target_color(Rgb::new(255, 0, 0))
            .turn_rate(0.25)
            .build();

        assert_eq!(config.target_color, Rgb::new(255, 0, 0));
        assert_eq!(config.forward_speed, 0.5);
        assert_eq!(config.turn_rate, 0.25);
    }
}
