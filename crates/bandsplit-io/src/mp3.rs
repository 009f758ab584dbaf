//! MP3 decoding.
//!
//! Decodes an entire MP3 file into an interleaved f32 buffer. The decoder's
//! reported frame format (sample rate, channel count) is authoritative;
//! streams that change either mid-file are rejected rather than misread.

use crate::wav::AudioSpec;
use crate::{Error, Result};
use minimp3::{Decoder, Frame};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Normalization factor for the decoder's 16-bit output.
const I16_SCALE: f32 = 32768.0;

/// Read an MP3 file and return samples as f32 along with the spec.
///
/// Frames are decoded in sequence and accumulated interleaved, each sample
/// normalized to [-1, 1]. The returned spec reports 16 bits per sample (the
/// decoder's native depth), so re-encoding to WAV defaults to 16-bit PCM.
///
/// # Errors
///
/// Fails on unreadable files, corrupt frames, streams whose sample rate or
/// channel count changes mid-file, and files containing no audio frames.
pub fn read_mp3<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, AudioSpec)> {
    let file = File::open(&path)?;
    let mut decoder = Decoder::new(BufReader::new(file));

    let mut samples: Vec<f32> = Vec::new();
    let mut spec: Option<AudioSpec> = None;

    loop {
        match decoder.next_frame() {
            Ok(Frame {
                data,
                sample_rate,
                channels,
                ..
            }) => {
                let frame_spec = AudioSpec {
                    channels: channels as u16,
                    sample_rate: sample_rate as u32,
                    bits_per_sample: 16,
                };

                match spec {
                    None => spec = Some(frame_spec),
                    Some(first) => {
                        if first.sample_rate != frame_spec.sample_rate
                            || first.channels != frame_spec.channels
                        {
                            return Err(Error::UnsupportedFormat(format!(
                                "MP3 stream changes format mid-file: \
                                 {} Hz/{} ch then {} Hz/{} ch",
                                first.sample_rate,
                                first.channels,
                                frame_spec.sample_rate,
                                frame_spec.channels
                            )));
                        }
                    }
                }

                samples.extend(data.iter().map(|&s| f32::from(s) / I16_SCALE));
            }
            // Garbage between frames (ID3 tags, padding) is skipped, not fatal
            Err(minimp3::Error::SkippedData) => continue,
            Err(minimp3::Error::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    let spec = spec.ok_or_else(|| {
        Error::UnsupportedFormat(format!(
            "no audio frames in {}",
            path.as_ref().display()
        ))
    })?;

    tracing::debug!(
        path = %path.as_ref().display(),
        samples = samples.len(),
        channels = spec.channels,
        sample_rate = spec.sample_rate,
        "decoded MP3 file"
    );

    Ok((samples, spec))
}
