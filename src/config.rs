//! Game configuration file

use anyhow::{Context, Result};
use elements_core::EngineConfig;
use elements_vision::PoseConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub frame: FrameConfig,
    pub engine: EngineConfig,
    pub pose: PoseConfig,
    pub sounds: SoundConfig,
}

/// Dimensions of the frames the detector ran on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Directory the element and completion sounds are resolved against
    pub dir: PathBuf,
    pub completion: String,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            dir: "assets/sounds".into(),
            completion: "Eureka.wav".to_string(),
        }
    }
}

impl GameConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Failed to parse config: {:?}", path))
    }
}
