//! Actuation module
//!
//! Outbound delivery of motion commands to the platform.

mod sink;
mod logging_sink;
mod channel_sink;

pub use sink::ActuatorSink;
pub use logging_sink::LoggingSink;
pub use channel_sink::ChannelSink;
