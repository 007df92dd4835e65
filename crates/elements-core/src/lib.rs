//! Four Elements core library
//!
//! Board geometry, the element table and the grab-and-deposit interaction
//! engine. Everything here is synchronous and free of I/O apart from the
//! element table loader.

pub mod audio;
pub mod board;
pub mod elements;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use audio::{AudioSink, SoundBoard, SoundCue};
pub use board::{Layout, Point, Region};
pub use elements::{Element, ElementTable, PerElement, Rgb, GOLD};
pub use engine::{
    EngineConfig, FireDepositPolicy, FrameOutcome, GameEvent, GrabState, HandPose,
    InteractionEngine,
};
pub use error::LayoutError;
