use crate::elements::Element;
use serde::{Serialize, Serializer};
use std::fmt;

/// Declarative side effects emitted by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// Hand entered an element's home region
    Touched(Element),
    /// Element released inside the target region
    Deposited(Element),
    /// All four elements lie in the target region
    Completed,
    /// The Fire ambience should stop
    StopAmbience,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Touched(element) => write!(f, "touch:{}", element),
            GameEvent::Deposited(element) => write!(f, "deposit:{}", element),
            GameEvent::Completed => f.write_str("completed"),
            GameEvent::StopAmbience => f.write_str("stop-ambience"),
        }
    }
}

/// Serialized as its string identifier
impl Serialize for GameEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
