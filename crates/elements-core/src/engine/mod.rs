//! Grab-and-deposit interaction engine

pub mod config;
pub mod event;
pub mod interaction;

pub use config::{EngineConfig, FireDepositPolicy};
pub use event::GameEvent;
pub use interaction::{FrameOutcome, GrabState, HandPose, InteractionEngine};
