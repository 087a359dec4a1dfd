//! Audio
//!
//! The simulation only names a sound category. Each category maps to a fixed
//! procedural tone sweep; actually producing the tone is left to whatever
//! [`ToneGenerator`] the host plugs in.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Sound effect categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundEvent {
    /// Ball hits paddle
    Paddle,
    /// Ball hits top or bottom edge
    Wall,
    /// A point was scored
    Score,
    /// Ball bounces off a centipede segment
    Centipede,
}

/// Oscillator sweep and gain envelope for one sound
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneProfile {
    pub start_hz: f32,
    /// Exponential ramp target, reached after `ramp_secs`
    pub ramp_to_hz: Option<f32>,
    pub ramp_secs: f32,
    pub duration_secs: f32,
    pub gain_start: f32,
    pub gain_end: f32,
}

const GAIN_START: f32 = 0.1;
const GAIN_END: f32 = 0.01;

impl SoundEvent {
    pub fn tone(self) -> ToneProfile {
        let (start_hz, ramp_to_hz, ramp_secs, duration_secs) = match self {
            SoundEvent::Paddle => (440.0, Some(220.0), 0.1, 0.15),
            SoundEvent::Wall => (220.0, None, 0.0, 0.15),
            SoundEvent::Score => (880.0, Some(440.0), 0.3, 0.3),
            SoundEvent::Centipede => (320.0, Some(160.0), 0.15, 0.15),
        };
        ToneProfile {
            start_hz,
            ramp_to_hz,
            ramp_secs,
            duration_secs,
            gain_start: GAIN_START,
            gain_end: GAIN_END,
        }
    }
}

/// Receives sound events from the frame driver
pub trait AudioSink {
    fn play(&mut self, event: SoundEvent);
}

impl<T: AudioSink + ?Sized> AudioSink for Box<T> {
    fn play(&mut self, event: SoundEvent) {
        (**self).play(event);
    }
}

/// Produces a tone on the host's audio device
pub trait ToneGenerator {
    /// `volume` scales the profile's gain envelope
    fn play_tone(&mut self, tone: &ToneProfile, volume: f32);
}

/// Audio manager for the game
///
/// Tolerates a missing device: without a generator every sound is dropped.
/// Every event received is counted, audible or not.
pub struct AudioManager {
    generator: Option<Box<dyn ToneGenerator>>,
    master_volume: f32,
    muted: bool,
    played: HashMap<SoundEvent, usize>,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(None)
    }
}

impl AudioManager {
    pub fn new(generator: Option<Box<dyn ToneGenerator>>) -> Self {
        if generator.is_none() {
            log::warn!("No tone generator available - audio disabled");
        }
        Self {
            generator,
            master_volume: 1.0,
            muted: false,
            played: HashMap::new(),
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_some()
    }

    /// Number of times `event` has been received
    pub fn count(&self, event: SoundEvent) -> usize {
        self.played.get(&event).copied().unwrap_or(0)
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }
}

impl AudioSink for AudioManager {
    fn play(&mut self, event: SoundEvent) {
        *self.played.entry(event).or_default() += 1;
        log::trace!("sound: {:?}", event);

        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(generator) = self.generator.as_mut() else {
            return;
        };
        generator.play_tone(&event.tone(), vol);
    }
}
