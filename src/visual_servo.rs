//! Visual servoing module
//!
//! Turns camera frames into steering commands: the scanner finds the first
//! pixel of the target color, the steering policy maps its zone to a
//! velocity pair, and the controller hands that pair to an actuator sink.

pub mod actuation;
pub mod common;
pub mod controllers;
pub mod frame;
pub mod scan;
pub mod steering;

pub use common::{
    FrameGeometryError,
    Result,
    ServoConfig,
    ServoConfigBuilder,
    ServoError,
};

pub use frame::{
    ChannelFrameSource,
    Frame,
    FrameSource,
    QueuedFrameSource,
    Rgb,
};

pub use scan::{
    DetectionResult,
    FrameScanner,
    Zone,
};

pub use steering::{
    MotionCommand,
    SteeringPolicy,
};

pub use actuation::{
    ActuatorSink,
    ChannelSink,
    LoggingSink,
};

pub use controllers::{
    BallChaser,
    RunSummary,
};
