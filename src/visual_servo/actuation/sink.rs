use crate::visual_servo::common::error::Result;
use crate::visual_servo::steering::types::MotionCommand;

/// Delivers motion commands to the platform's motor controller.
///
/// Called once per processed frame. Implementations must not block on an
/// acknowledgement; a command that cannot be delivered is reported as
/// `ServoError::DispatchFailure` and is not retried.
pub trait ActuatorSink {
    fn dispatch(&mut self, command: MotionCommand) -> Result<()>;
}
