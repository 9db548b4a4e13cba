use anyhow::{Result, anyhow};
use macroquad::audio::{self, PlaySoundParams, Sound, load_sound_from_bytes};

use crate::screen::Cue;

const SAMPLE_RATE: u32 = 44_100;

/// Builds a PCM16 mono WAV file holding a sine tone.
pub fn wav_sine(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let num_samples = (duration_seconds.max(0.0) * SAMPLE_RATE as f32) as u32;
    let block_align: u16 = 2;
    let byte_rate = SAMPLE_RATE * block_align as u32;
    let data_size = num_samples * 2;

    let mut data = Vec::with_capacity(44 + data_size as usize);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");

    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());

    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7 * i16::MAX as f32;
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin()) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

pub struct Sounds {
    eat: Sound,
    die: Sound,
}

impl Sounds {
    pub async fn load() -> Result<Self> {
        let eat = load_sound_from_bytes(&wav_sine(880.0, 0.08, 0.6))
            .await
            .map_err(|err| anyhow!("failed to load eat sound: {err:?}"))?;
        let die = load_sound_from_bytes(&wav_sine(110.0, 0.25, 0.7))
            .await
            .map_err(|err| anyhow!("failed to load game over sound: {err:?}"))?;
        Ok(Self { eat, die })
    }

    pub fn play(&self, cue: Cue) {
        let (sound, volume) = match cue {
            Cue::Eat => (&self.eat, 0.35),
            Cue::Die => (&self.die, 0.6),
        };
        audio::play_sound(sound, PlaySoundParams { looped: false, volume });
    }
}
