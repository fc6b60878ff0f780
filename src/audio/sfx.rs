//! Sound board on the default output device

use rodio::mixer::Mixer;
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamBuilder, Sink, Source};

use super::cues::{Cue, SPIN_HUM, Tone};

/// Plays desk cues and the draw hum
///
/// The output stream must outlive every source queued on its mixer, so it is
/// owned here for the lifetime of the board.
pub struct SoundBoard {
    _stream: OutputStream,
    mixer: Mixer,
    hum: Option<Sink>,
    muted: bool,
}

impl std::fmt::Debug for SoundBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoundBoard")
            .field("hum", &self.hum.is_some())
            .field("muted", &self.muted)
            .finish()
    }
}

impl SoundBoard {
    /// Open the default output device
    pub fn new(muted: bool) -> Result<Self, String> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to create audio output: {}", e))?;
        stream.log_on_drop(false);
        let mixer = stream.mixer().clone();
        tracing::info!("Sound board ready (muted: {})", muted);
        Ok(Self {
            _stream: stream,
            mixer,
            hum: None,
            muted,
        })
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Mute or unmute; a running hum is paused rather than dropped
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(hum) = &self.hum {
            if muted {
                hum.pause();
            } else {
                hum.play();
            }
        }
    }

    pub fn play(&self, cue: Cue) {
        if self.muted {
            return;
        }
        tracing::debug!("Playing cue {:?}", cue);
        for tone in cue.tones() {
            self.play_tone(tone);
        }
    }

    fn play_tone(&self, tone: Tone) {
        let source = SineWave::new(tone.freq)
            .take_duration(tone.duration)
            .amplify(tone.volume)
            .delay(tone.delay);
        self.mixer.add(source);
    }

    /// Start the looping hum; no-op when already humming
    pub fn start_spin(&mut self) {
        if self.hum.is_some() {
            return;
        }
        let sink = Sink::connect_new(&self.mixer);
        let [low, high] = SPIN_HUM;
        sink.append(
            SineWave::new(low.freq)
                .amplify(low.volume)
                .mix(SineWave::new(high.freq).amplify(high.volume)),
        );
        if self.muted {
            sink.pause();
        }
        self.hum = Some(sink);
    }

    pub fn stop_spin(&mut self) {
        if let Some(hum) = self.hum.take() {
            hum.stop();
        }
    }
}

impl Drop for SoundBoard {
    fn drop(&mut self) {
        self.stop_spin();
    }
}
