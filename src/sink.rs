use elements_core::{AudioSink, SoundCue};
use tracing::{info, warn};

/// Audio sink that only reports what would be played
#[derive(Debug, Default)]
pub struct LogSink {
    pub played: usize,
    pub missing: usize,
}

impl AudioSink for LogSink {
    fn play(&mut self, cue: &SoundCue) {
        if !cue.resource.exists() {
            warn!("Sound file not found: {:?}", cue.resource);
            self.missing += 1;
            return;
        }
        if cue.looping {
            info!("Looping sound: {:?}", cue.resource);
        } else {
            info!("Played sound: {:?}", cue.resource);
        }
        self.played += 1;
    }

    fn stop_loop(&mut self) {
        info!("Stopped looping sound");
    }
}
