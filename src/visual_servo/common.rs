//! Common utilities module
//!
//! Error types and configuration shared by every stage of the controller.

pub mod config;
pub mod error;

pub use config::{ServoConfig, ServoConfigBuilder};
pub use error::{FrameGeometryError, Result, ServoError};
