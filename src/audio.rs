//! Synthesized music tracks and sound cues.
//!
//! Playback is fire-and-forget: when the audio device cannot be opened the
//! whole subsystem stays disabled and every call is a no-op, so audio can
//! never block a screen transition.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

/// Background track selected by the state machine on screen entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    Game,
    Settings,
    GameOver,
}

impl MusicTrack {
    /// (base frequency, note length ms, loops). Game-over plays once.
    fn tone(self) -> (f32, u64, bool) {
        match self {
            Self::Menu => (220.0, 600, true),
            Self::Game => (330.0, 400, true),
            Self::Settings => (262.0, 700, true),
            Self::GameOver => (147.0, 1200, false),
        }
    }
}

/// Short effect triggered by simulation and UI events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Click,
    Eat,
    Bonus,
    Penalty,
}

impl SoundCue {
    /// (frequency, duration ms, amplitude).
    fn tone(self) -> (f32, u64, f32) {
        match self {
            Self::Click => (880.0, 40, 0.10),
            Self::Eat => (660.0, 90, 0.15),
            Self::Bonus => (988.0, 180, 0.15),
            Self::Penalty => (196.0, 250, 0.20),
        }
    }
}

const CUE_CHANNELS: usize = 8;
const MUSIC_VOLUME: f32 = 0.06;

struct AudioInner {
    // The stream must stay alive for its sinks to keep playing
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Sink,
    current_track: Option<MusicTrack>,
    cue_pool: Vec<Sink>,
}

pub struct AudioOutput {
    inner: Option<AudioInner>,
}

impl AudioOutput {
    /// Opens the default output device. On failure the subsystem is disabled
    /// silently; music and effects are a non-essential feature.
    pub fn new() -> Self {
        let inner = match OutputStream::try_default() {
            Ok((stream, handle)) => match Sink::try_new(&handle) {
                Ok(music) => {
                    let cue_pool = (0..CUE_CHANNELS)
                        .filter_map(|_| Sink::try_new(&handle).ok())
                        .collect();
                    Some(AudioInner {
                        _stream: stream,
                        handle,
                        music,
                        current_track: None,
                        cue_pool,
                    })
                }
                Err(_) => None,
            },
            Err(_) => None,
        };
        Self { inner }
    }

    /// A permanently silent output, used by tests and headless runs.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Switch the background track. Re-requesting the track already playing
    /// is a no-op; `enabled` mirrors the music toggle in settings.
    pub fn play_music(&mut self, track: MusicTrack, enabled: bool) {
        let Some(inner) = &mut self.inner else {
            return;
        };
        if !enabled {
            return;
        }
        if inner.current_track == Some(track) && !inner.music.empty() {
            return;
        }

        // Replace the sink rather than reuse a stopped one
        inner.music.stop();
        let Ok(sink) = Sink::try_new(&inner.handle) else {
            return;
        };

        let (freq, note_ms, looping) = track.tone();
        let note = SineWave::new(freq)
            .take_duration(Duration::from_millis(note_ms))
            .amplify(MUSIC_VOLUME);
        if looping {
            sink.append(note.repeat_infinite());
        } else {
            sink.append(note);
        }
        inner.music = sink;
        inner.current_track = Some(track);
    }

    pub fn stop_music(&mut self) {
        if let Some(inner) = &mut self.inner {
            inner.music.stop();
            inner.current_track = None;
        }
    }

    /// Play a cue on a free channel from the fixed pool. When every channel
    /// is busy the cue is dropped; `enabled` mirrors the effects toggle.
    pub fn play_cue(&mut self, cue: SoundCue, enabled: bool) {
        let Some(inner) = &mut self.inner else {
            return;
        };
        if !enabled {
            return;
        }
        let (freq, dur_ms, amp) = cue.tone();
        if let Some(sink) = inner.cue_pool.iter().find(|s| s.empty()) {
            sink.append(
                SineWave::new(freq)
                    .take_duration(Duration::from_millis(dur_ms))
                    .amplify(amp),
            );
        }
    }
}

impl Default for AudioOutput {
    fn default() -> Self {
        Self::new()
    }
}
