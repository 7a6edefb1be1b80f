//! Controller module
//!
//! Orchestrates scan, decide and dispatch for each incoming frame.

mod ball_chaser;


pub use ball_chaser::{BallChaser, RunSummary};
