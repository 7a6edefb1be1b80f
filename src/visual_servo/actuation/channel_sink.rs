use std::sync::mpsc::{Receiver, Sender, channel};

use tracing::debug;

use crate::visual_servo::actuation::sink::ActuatorSink;
use crate::visual_servo::common::error::{Result, ServoError};
use crate::visual_servo::steering::types::MotionCommand;

/// Forwards commands to a motor-driver thread over a channel.
///
/// Sending never waits for the driver. Once the receiving end is gone every
/// dispatch fails.
pub struct ChannelSink {
    sender: Sender<MotionCommand>,
}

impl ChannelSink {
    pub fn new(sender: Sender<MotionCommand>) -> Self {
        Self { sender }
    }

    /// Creates a connected sink/receiver pair.
    pub fn pair() -> (Self, Receiver<MotionCommand>) {
        let (sender, receiver) = channel();
        (Self::new(sender), receiver)
    }
}

impl ActuatorSink for ChannelSink {
    fn dispatch(&mut self, command: MotionCommand) -> Result<()> {
        self.sender
            .send(command)
            .map_err(|e| ServoError::DispatchFailure(format!("motor channel closed: {}", e)))?;
        debug!(?command, "Command queued for motor driver");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_reach_receiver_in_order() {
        let (mut sink, receiver) = ChannelSink::pair();

        sink.dispatch(MotionCommand::new(0.5, -1.0)).unwrap();
        sink.dispatch(MotionCommand::STOP).unwrap();

        let received: Vec<MotionCommand> = receiver.try_iter().collect();
        assert_eq!(
            received,
            vec![MotionCommand::new(0.5, -1.0), MotionCommand::STOP]
        );
    }

    #[test]
    fn test_dropped_receiver_is_dispatch_failure() {
        let (mut sink, receiver) = ChannelSink::pair();
        drop(receiver);

        let err = sink.dispatch(MotionCommand::STOP).unwrap_err();
        assert!(matches!(err, ServoError::DispatchFailure(_)));
    }
}
