//! Four Elements vision adapters
//!
//! Reduces hand landmark detections (MediaPipe hand model convention) to the
//! `HandPose` values the interaction engine consumes.

pub mod config;
pub mod error;
pub mod landmarks;
pub mod pose;

// Re-export commonly used types
pub use config::PoseConfig;
pub use error::VisionError;
pub use landmarks::{DetectorOutput, HandLandmarks, Landmark};
pub use pose::PoseReducer;

// Error handling
pub type Result<T> = anyhow::Result<T>;
