//! Hand landmark data as reported by the detector

use serde::{Deserialize, Serialize};

/// Hand landmark indices (MediaPipe hand landmark model)
pub mod index {
    pub const WRIST: usize = 0;
    pub const THUMB_CMC: usize = 1;
    pub const THUMB_MCP: usize = 2;
    pub const THUMB_IP: usize = 3;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_MCP: usize = 5;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_MCP: usize = 9;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_MCP: usize = 13;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_MCP: usize = 17;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;

    pub const COUNT: usize = 21;
}

/// Normalized landmark: x and y in [0, 1] of the frame, z relative depth
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Squared planar distance, the metric the pinch heuristic thresholds
    pub fn distance_sq(&self, other: &Landmark) -> f32 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

fn full_score() -> f32 {
    1.0
}

/// One detected hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    pub landmarks: Vec<Landmark>,
    /// "Left" or "Right" as reported by the detector
    #[serde(default)]
    pub handedness: Option<String>,
    #[serde(default = "full_score")]
    pub score: f32,
}

impl HandLandmarks {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self {
            landmarks,
            handedness: None,
            score: full_score(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index)
    }
}

/// All hands detected in one frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectorOutput {
    #[serde(default)]
    pub hands: Vec<HandLandmarks>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;

    #[test]
    fn test_parse_detector_output() -> Result<()> {
        let output: DetectorOutput = serde_json::from_str(
            r#"{"hands":[{"landmarks":[{"x":0.5,"y":0.25},{"x":0.1,"y":0.2,"z":-0.03}],"handedness":"Right"}]}"#,
        )?;

        assert_eq!(output.hands.len(), 1);
        let hand = &output.hands[0];
        assert_eq!(hand.handedness.as_deref(), Some("Right"));
        assert_eq!(hand.score, 1.0);
        assert_eq!(hand.get(1), Some(&Landmark { x: 0.1, y: 0.2, z: -0.03 }));
        assert_eq!(hand.get(index::WRIST).map(|l| l.z), Some(0.0));
        Ok(())
    }

    #[test]
    fn test_empty_frame() -> Result<()> {
        let output: DetectorOutput = serde_json::from_str("{}")?;
        assert!(output.hands.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_output_is_error() {
        let result: serde_json::Result<DetectorOutput> =
            serde_json::from_str(r#"{"hands":[{"landmarks":"nope"}]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_distance_sq() {
        let a = Landmark::new(0.0, 0.0);
        let b = Landmark::new(0.3, 0.4);
        assert!((a.distance_sq(&b) - 0.25).abs() < 1e-6);
    }
}
