//! Pose reduction configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoseConfig {
    /// Squared thumb-to-index distance (normalized) below which a hand is closed
    pub pinch_threshold: f32,
    /// Flip x so the view behaves like a mirror
    pub mirror_x: bool,
    /// Detections scoring below this are dropped
    pub min_score: f32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.01,
            mirror_x: false,
            min_score: 0.5,
        }
    }
}

impl PoseConfig {
    /// Configuration for a raw (unflipped) selfie camera feed
    pub fn mirrored() -> Self {
        Self {
            mirror_x: true,
            ..Default::default()
        }
    }
}
