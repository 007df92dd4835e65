//! Mapping of engine events onto sound cues
//!
//! The engine only names what happened. `SoundBoard` decides which resource
//! to play and keeps track of the looping Fire ambience, while the actual
//! playback belongs to an `AudioSink`.

use crate::elements::{Element, ElementTable, PerElement};
use crate::engine::GameEvent;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A sound resource to start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundCue {
    pub resource: PathBuf,
    /// Keep playing until `stop_loop`
    pub looping: bool,
}

/// Playback backend
#[cfg_attr(test, mockall::automock)]
pub trait AudioSink {
    fn play(&mut self, cue: &SoundCue);
    fn stop_loop(&mut self);
}

pub struct SoundBoard<S: AudioSink> {
    sounds: PerElement<PathBuf>,
    completion: PathBuf,
    sink: S,
    looping: bool,
}

impl<S: AudioSink> SoundBoard<S> {
    /// Resolve every resource of `table` (and the completion sound) under `dir`
    pub fn new(table: &ElementTable, dir: &Path, completion: &str, sink: S) -> Self {
        Self {
            sounds: PerElement::from_fn(|element| dir.join(&table.get(element).sound)),
            completion: dir.join(completion),
            sink,
            looping: false,
        }
    }

    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for event in events {
            self.handle(event);
        }
    }

    pub fn handle(&mut self, event: &GameEvent) {
        match *event {
            // Fire's resource is ambience only; touching it stays silent.
            GameEvent::Touched(Element::Fire) => {}
            GameEvent::Touched(element) => {
                let resource = self.sounds[element].clone();
                self.start(resource, false);
            }
            GameEvent::Deposited(Element::Fire) => {
                let resource = self.sounds[Element::Fire].clone();
                self.start(resource, true);
            }
            GameEvent::Deposited(_) => {}
            GameEvent::Completed => {
                let resource = self.completion.clone();
                self.start(resource, false);
            }
            GameEvent::StopAmbience => self.silence(),
        }
    }

    fn start(&mut self, resource: PathBuf, looping: bool) {
        // A new cue always replaces a running loop.
        self.silence();
        debug!("Playing {:?} (looping: {})", resource, looping);
        self.sink.play(&SoundCue { resource, looping });
        self.looping = looping;
    }

    /// Stop the ambience loop if one is running
    pub fn silence(&mut self) {
        if self.looping {
            self.sink.stop_loop();
            self.looping = false;
        }
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
