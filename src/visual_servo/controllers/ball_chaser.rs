use tracing::{debug, info, instrument, warn};

use crate::visual_servo::{
    actuation::{ActuatorSink, LoggingSink},
    common::{
        config::ServoConfig,
        error::{Result, ServoError},
    },
    frame::{Frame, FrameSource},
    scan::FrameScanner,
    steering::{MotionCommand, SteeringPolicy},
};

/// Frame counts gathered by [`BallChaser::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames pulled from the feed
    pub frames: usize,
    /// Commands accepted by the sink
    pub dispatched: usize,
    /// Frames skipped because of malformed geometry
    pub malformed: usize,
    /// Commands the sink failed to deliver
    pub dispatch_failures: usize,
    /// Feed-level errors
    pub feed_errors: usize,
}

pub struct BallChaser<S: ActuatorSink> {
    scanner: FrameScanner,
    policy: SteeringPolicy,
    sink: S,
    config: ServoConfig,
}

impl BallChaser<LoggingSink> {
    pub fn new(config: ServoConfig) -> Self {
        Self::with_sink(config, LoggingSink::new())
    }
}

impl<S: ActuatorSink> BallChaser<S> {
    pub fn with_sink(config: ServoConfig, sink: S) -> Self {
        Self {
            scanner: FrameScanner::from_config(&config),
            policy: SteeringPolicy::from_config(&config),
            sink,
            config,
        }
    }

    /// Scans one frame, decides a command and dispatches it exactly once.
    ///
    /// A malformed frame fails before anything is dispatched. A dispatch
    /// failure is returned as-is; the command is not retried.
    #[instrument(skip(self, frame), fields(height = frame.height, row_stride = frame.row_stride))]
    pub fn process_frame(&mut self, frame: &Frame) -> Result<MotionCommand> {
        let detection = {
            let _span = tracing::debug_span!("scan").entered();
            self.scanner.scan(frame)?
        };

        let command = {
            let _span = tracing::debug_span!("decide", ?detection).entered();
            self.policy.decide(detection)
        };

        {
            let _span = tracing::debug_span!("dispatch").entered();
            self.sink.dispatch(command)?;
        }

        debug!(?detection, ?command, "Frame processed");
        Ok(command)
    }

    /// Drains `feed`, processing frames one at a time in arrival order.
    ///
    /// Per-frame errors are logged and counted; the loop moves on to the
    /// next frame.
    pub fn run<F: FrameSource>(&mut self, feed: &mut F) -> RunSummary {
        let mut summary = RunSummary::default();
        info!("Ball chaser started");

        while let Some(next) = feed.next_frame() {
            let frame = match next {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("Skipping frame: {}", e);
                    summary.feed_errors += 1;
                    continue;
                }
            };
            summary.frames += 1;

            match self.process_frame(&frame) {
                Ok(_) => summary.dispatched += 1,
                Err(e @ ServoError::MalformedFrame(_)) => {
                    warn!(frame = summary.frames, "Skipping frame: {}", e);
                    summary.malformed += 1;
                }
                // Anything past the scan came from the sink.
                Err(e) => {
                    warn!(frame = summary.frames, "{}", e);
                    summary.dispatch_failures += 1;
                }
            }
        }

        info!(
            frames = summary.frames,
            dispatched = summary.dispatched,
            malformed = summary.malformed,
            dispatch_failures = summary.dispatch_failures,
            "Frame feed ended"
        );
        summary
    }

    pub fn config(&self) -> &ServoConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
