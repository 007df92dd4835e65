use thiserror::Error;

/// Reasons a single hand detection cannot be reduced to a pose
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisionError {
    #[error("hand has {found} landmarks, expected {expected}")]
    LandmarkCount { found: usize, expected: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("hand score {score:.2} below minimum {min:.2}")]
    LowScore { score: f32, min: f32 },
}
