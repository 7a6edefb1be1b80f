pub mod logger;
pub mod visual_servo;
