//! Four Elements replay: session wiring, configuration and trace driver

pub mod config;
pub mod session;
pub mod sink;
pub mod trace;

// Re-export commonly used types
pub use config::GameConfig;
pub use session::{FrameReport, Session};
pub use sink::LogSink;
pub use trace::{Command, ReplayStats, TraceEntry};
