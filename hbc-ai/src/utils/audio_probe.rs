//! Audio probing for uploads
//!
//! Confirms that uploaded bytes decode as audio before they are sent to
//! the classifier, and reports basic stream facts for the UI.
//!
//! Uses symphonia for format-agnostic probing (WAV, MP3, ...). Works on an
//! in-memory cursor, so nothing is written to disk.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use std::io::Cursor;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::services::AudioFormat;

/// Stream facts for one audio input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AudioInfo {
    /// Container format name ("wav", "mp3")
    pub format: String,
    pub sample_rate: u32,
    pub channels: usize,
    pub frames: u64,
    pub duration_seconds: f64,
}

/// Probe an in-memory audio file
///
/// **Algorithm:**
/// 1. Probe the container (the declared format is a hint only)
/// 2. Find the default audio track
/// 3. Take the frame count from the track header when present
/// 4. Otherwise decode every packet and count frames
///
/// # Errors
/// * Empty input
/// * Unrecognized container or no audio track
/// * Corrupt audio data
pub fn probe_audio<B>(bytes: B, declared: AudioFormat) -> Result<AudioInfo>
where
    B: AsRef<[u8]> + Send + Sync + 'static,
{
    if bytes.as_ref().is_empty() {
        bail!("Audio file is empty");
    }

    let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

    let mut hint = Hint::new();
    hint.with_extension(declared.extension());

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &FormatOptions::default(), &MetadataOptions::default())
        .context("Unrecognized audio format")?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .context("No audio track found in file")?;

    let track_id = track.id;
    let codec_params = track.codec_params.clone();
    let sample_rate = codec_params.sample_rate.context("Sample rate unknown")?;
    let channels = codec_params.channels.map(|c| c.count()).unwrap_or(0);

    let frames = match codec_params.n_frames {
        Some(n) => n,
        None => {
            let mut decoder = symphonia::default::get_codecs()
                .make(&codec_params, &DecoderOptions::default())
                .context("Failed to create decoder")?;

            let mut counted: u64 = 0;
            loop {
                let packet = match format.next_packet() {
                    Ok(packet) => packet,
                    Err(SymphoniaError::IoError(e))
                        if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                    {
                        break;
                    }
                    Err(e) => bail!("Error reading packet: {}", e),
                };

                if packet.track_id() != track_id {
                    continue;
                }

                match decoder.decode(&packet) {
                    Ok(decoded) => counted += decoded.frames() as u64,
                    // Recoverable corruption in a single packet
                    Err(SymphoniaError::DecodeError(e)) => {
                        tracing::debug!(error = %e, "Skipping undecodable packet");
                    }
                    Err(e) => bail!("Failed to decode audio: {}", e),
                }
            }
            counted
        }
    };

    let duration_seconds = frames as f64 / sample_rate as f64;

    tracing::debug!(
        format = declared.extension(),
        sample_rate,
        channels,
        frames,
        duration_seconds = format!("{:.2}", duration_seconds),
        "Audio probe complete"
    );

    Ok(AudioInfo {
        format: declared.extension().to_string(),
        sample_rate,
        channels,
        frames,
        duration_seconds,
    })
}
