use tracing::info;

use crate::visual_servo::actuation::sink::ActuatorSink;
use crate::visual_servo::common::error::Result;
use crate::visual_servo::steering::types::MotionCommand;

/// Sink that only logs commands. Used when no motor service is attached.
#[derive(Debug, Default)]
pub struct LoggingSink {
    dispatched: usize,
    last: Option<MotionCommand>,
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatched(&self) -> usize {
        self.dispatched
    }

    pub fn last(&self) -> Option<MotionCommand> {
        self.last
    }
}

impl ActuatorSink for LoggingSink {
    fn dispatch(&mut self, command: MotionCommand) -> Result<()> {
        info!(
            linear = command.linear,
            angular = command.angular,
            "Drive command"
        );
        self.dispatched += 1;
        self.last = Some(command);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_remembers_last_command() {
        let mut sink = LoggingSink::new();
        assert_eq!(sink.last(), None);

        sink.dispatch(MotionCommand::new(0.5, 1.0)).unwrap();
        sink.dispatch(MotionCommand::STOP).unwrap();

        assert_eq!(sink.dispatched(), 2);
        assert_eq!(sink.last(), Some(MotionCommand::STOP));
    }
}
