//! Replay of recorded detector output
//!
//! A trace is JSON lines. Each line is either a frame,
//! `{"t": 1.25, "hands": [...]}`, or a command such as
//! `{"command": "reset"}`. Blank lines and `#` comments are ignored.

use crate::session::Session;
use anyhow::{Context, Result, anyhow};
use elements_core::{AudioSink, GameEvent};
use elements_vision::{DetectorOutput, HandLandmarks};
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    Reset,
    ToggleTinting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TraceEntry {
    Command(Command),
    Frame {
        at: Duration,
        hands: Vec<HandLandmarks>,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Command {
        command: Command,
    },
    Frame {
        t: f64,
        #[serde(flatten)]
        detections: DetectorOutput,
    },
}

/// Parse one trace line; `None` for blank and comment lines
pub fn parse_line(line: &str) -> Result<Option<TraceEntry>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let raw: RawEntry = serde_json::from_str(line).context("Failed to parse trace entry")?;
    let entry = match raw {
        RawEntry::Command { command } => TraceEntry::Command(command),
        RawEntry::Frame { t, detections } => TraceEntry::Frame {
            at: Duration::try_from_secs_f64(t).map_err(|e| anyhow!("Invalid timestamp {}: {}", t, e))?,
            hands: detections.hands,
        },
    };
    Ok(Some(entry))
}

/// Totals of one replay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub frames: usize,
    pub commands: usize,
    pub failures: usize,
    /// Completion was reached at some point
    pub completed: bool,
}

/// Feed every entry of `reader` into `session`.
///
/// Malformed lines are logged and counted, never fatal. When `report` is
/// given, each frame's report is written to it as one JSON line.
pub fn replay<S: AudioSink>(
    session: &mut Session<S>,
    reader: impl BufRead,
    mut report: Option<&mut dyn Write>,
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read trace line {}", line_num + 1))?;

        let entry = match parse_line(&line) {
            Ok(Some(entry)) => entry,
            Ok(None) => continue,
            Err(e) => {
                warn!("Skipping trace line {}: {:#}", line_num + 1, e);
                stats.failures += 1;
                continue;
            }
        };

        match entry {
            TraceEntry::Command(Command::Reset) => {
                session.reset();
                stats.commands += 1;
            }
            TraceEntry::Command(Command::ToggleTinting) => {
                session.toggle_tinting();
                stats.commands += 1;
            }
            TraceEntry::Frame { at, hands } => {
                let frame = session.process(&hands, at);
                stats.frames += 1;
                if frame.outcome.events.contains(&GameEvent::Completed) {
                    stats.completed = true;
                    info!("Completed at {:.2}s", at.as_secs_f64());
                }
                if let Some(out) = report.as_mut() {
                    let json = serde_json::to_string(&frame).context("Failed to serialize frame report")?;
                    writeln!(out, "{}", json).context("Failed to write frame report")?;
                }
            }
        }
    }

    Ok(stats)
}
