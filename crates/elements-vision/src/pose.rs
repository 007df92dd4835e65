//! Landmarks to `HandPose` reduction

use crate::config::PoseConfig;
use crate::error::VisionError;
use crate::landmarks::{index, HandLandmarks};
use elements_core::{HandPose, Layout, Point};
use tracing::warn;

/// Scales fingertips to frame pixels and applies the pinch heuristic
#[derive(Debug, Clone)]
pub struct PoseReducer {
    config: PoseConfig,
    width: f64,
    height: f64,
}

impl PoseReducer {
    pub fn new(config: PoseConfig, layout: &Layout) -> Self {
        Self {
            config,
            width: f64::from(layout.width()),
            height: f64::from(layout.height()),
        }
    }

    pub fn config(&self) -> &PoseConfig {
        &self.config
    }

    /// Reduce one detection to its index fingertip and open/closed state
    pub fn reduce(&self, hand: &HandLandmarks) -> Result<HandPose, VisionError> {
        if hand.score < self.config.min_score {
            return Err(VisionError::LowScore {
                score: hand.score,
                min: self.config.min_score,
            });
        }

        if hand.landmarks.len() != index::COUNT {
            return Err(VisionError::LandmarkCount {
                found: hand.landmarks.len(),
                expected: index::COUNT,
            });
        }
        if let Some(bad) = hand.landmarks.iter().position(|l| !l.is_finite()) {
            return Err(VisionError::NonFinite { index: bad });
        }

        let thumb = &hand.landmarks[index::THUMB_TIP];
        let tip = &hand.landmarks[index::INDEX_FINGER_TIP];
        let x = if self.config.mirror_x { 1.0 - f64::from(tip.x) } else { f64::from(tip.x) };
        let position = Point::new((x * self.width) as i32, (f64::from(tip.y) * self.height) as i32);
        let closed = thumb.distance_sq(tip) < self.config.pinch_threshold;

        Ok(HandPose::new(position, closed))
    }

    /// Reduce every hand of a frame, dropping the ones that fail
    pub fn reduce_all(&self, hands: &[HandLandmarks]) -> Vec<HandPose> {
        hands
            .iter()
            .enumerate()
            .filter_map(|(i, hand)| match self.reduce(hand) {
                Ok(pose) => Some(pose),
                Err(e) => {
                    warn!("Skipping hand {}: {}", i, e);
                    None
                }
            })
            .collect()
    }
}
