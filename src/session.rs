//! One game: engine, pose reduction and sound board wired together

use crate::config::GameConfig;
use anyhow::{Context, Result};
use elements_core::{
    AudioSink, ElementTable, FrameOutcome, HandPose, InteractionEngine, Layout, Rgb, SoundBoard,
};
use elements_vision::{HandLandmarks, PoseReducer};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Per-frame response, shaped like the browser variant's JSON
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    pub hands: Vec<HandPose>,
    #[serde(flatten)]
    pub outcome: FrameOutcome,
    pub tint_color: Option<Rgb>,
}

pub struct Session<S: AudioSink> {
    engine: InteractionEngine,
    reducer: PoseReducer,
    sounds: SoundBoard<S>,
}

impl<S: AudioSink> Session<S> {
    pub fn new(config: &GameConfig, table: &ElementTable, sink: S) -> Result<Self> {
        let layout = Layout::new(config.frame.width, config.frame.height)
            .context("Invalid frame dimensions")?;

        info!(
            "Board {}x{}, square size {}, target at {:?}",
            layout.width(),
            layout.height(),
            layout.square_size(),
            layout.target()
        );

        let reducer = PoseReducer::new(config.pose.clone(), &layout);
        let engine =
            InteractionEngine::new(layout, config.engine.clone()).with_colors(table.colors());
        let sounds = SoundBoard::new(table, &config.sounds.dir, &config.sounds.completion, sink);

        Ok(Self {
            engine,
            reducer,
            sounds,
        })
    }

    /// Run one frame of detections through the game
    pub fn process(&mut self, hands: &[HandLandmarks], now: Duration) -> FrameReport {
        let poses = self.reducer.reduce_all(hands);
        let outcome = self.engine.update(&poses, now);
        self.sounds.dispatch(&outcome.events);

        FrameReport {
            hands: poses,
            outcome,
            tint_color: self.engine.tint_color(),
        }
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.sounds.silence();
    }

    /// Flip segmentation tinting, returning the new state
    pub fn toggle_tinting(&mut self) -> bool {
        let enabled = !self.engine.tinting();
        self.engine.set_tinting(enabled);
        info!("Tinting {}", if enabled { "on" } else { "off" });
        enabled
    }

    /// Stop anything still playing
    pub fn shutdown(&mut self) {
        self.sounds.silence();
    }

    pub fn engine(&self) -> &InteractionEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        self.sounds.sink()
    }
}
