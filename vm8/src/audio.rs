use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};

use chip8::constants::TIMER_INTERVAL;

const TONE_HZ: f32 = 440.0;
const VOLUME: f32 = 0.05;

/// A square wave that plays for a fixed number of samples and then
/// goes quiet
struct Pulse {
    phase: f32,
    phase_inc: f32,
    remaining: usize,
}

impl AudioCallback for Pulse {
    type Channel = f32;

    fn callback(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = if self.remaining > 0 {
                self.remaining -= 1;
                self.phase = (self.phase + self.phase_inc) % 1.0;
                if self.phase < 0.5 {
                    VOLUME
                } else {
                    -VOLUME
                }
            } else {
                0.0
            };
        }
    }
}

/// # Audio
/// The Chip-8 buzzer plays a single tone while the sound timer is
/// running.
///
/// Each sound timer decrement extends the tone by one timer interval's
/// worth of samples, so a steadily decrementing timer sounds
/// continuous and the tone dies out when the timer hits 0.
pub struct Audio {
    device: AudioDevice<Pulse>,
    samples_per_tone: usize,
}

impl Audio {
    /// Opens a mono playback device bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context to play through
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let audio_subsystem = sdl.audio()?;
        let desired = AudioSpecDesired {
            freq: Some(44_100),
            channels: Some(1),
            samples: None,
        };
        let device = audio_subsystem.open_playback(None, &desired, |spec| Pulse {
            phase: 0.0,
            phase_inc: TONE_HZ / spec.freq as f32,
            remaining: 0,
        })?;
        device.resume();
        let samples_per_tone =
            (f64::from(device.spec().freq) * TIMER_INTERVAL.as_secs_f64()) as usize;
        Ok(Audio {
            device,
            samples_per_tone,
        })
    }

    /// Extends the tone by one timer interval
    pub fn tone(&mut self) {
        let mut pulse = self.device.lock();
        pulse.remaining = self.samples_per_tone;
    }
}
