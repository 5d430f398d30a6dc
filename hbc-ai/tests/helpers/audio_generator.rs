//! Audio Test Fixture Generator
//!
//! Synthesizes short heartbeat-like WAV files for tests

use std::io::Cursor;
use std::path::Path;

/// Configuration for generated audio
#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub duration_seconds: f64,
    pub sample_rate: u32,
    pub channels: u16,
    /// Beats per minute of the thump train
    pub heart_rate_bpm: f64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 1.0,
            sample_rate: 4000,
            channels: 1,
            heart_rate_bpm: 72.0,
        }
    }
}

/// Generate WAV bytes in memory
///
/// Each beat is a short decaying 50 Hz burst; silence in between.
pub fn generate_wav_bytes(config: &AudioConfig) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: config.channels,
        sample_rate: config.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        let total_frames = (config.duration_seconds * config.sample_rate as f64) as usize;
        let beat_period = 60.0 / config.heart_rate_bpm;

        for i in 0..total_frames {
            let t = i as f64 / config.sample_rate as f64;
            let since_beat = t % beat_period;
            let sample = if since_beat < 0.1 {
                let envelope = (-since_beat * 40.0).exp();
                (0.5 * envelope * (2.0 * std::f64::consts::PI * 50.0 * t).sin() * i16::MAX as f64)
                    as i16
            } else {
                0
            };

            for _ in 0..config.channels {
                writer.write_sample(sample).unwrap();
            }
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

/// Write a generated WAV file to disk
pub fn generate_test_wav(path: &Path, config: &AudioConfig) {
    std::fs::write(path, generate_wav_bytes(config)).unwrap();
}
