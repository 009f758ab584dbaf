//! Audio file I/O layer for the bandsplit crossover tool.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for loading/saving audio
//! - **MP3 decoding**: [`read_mp3`] for compressed input
//! - **Format dispatch**: [`read_audio`] selecting a decoder by file extension
//!
//! All readers return the sample buffer exactly as stored in the container:
//! interleaved across channels, normalized to [-1, 1]. Channel structure is
//! carried in the returned [`AudioSpec`] but the buffer itself is flat — the
//! crossover filters treat it as a single stream, which is the tool's
//! documented (channel-agnostic) behavior.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bandsplit_io::{read_audio, write_wav};
//!
//! let (samples, spec) = read_audio("input.mp3")?;
//! write_wav("output.wav", &samples, spec)?;
//! ```

mod decode;
mod mp3;
mod wav;

pub use decode::read_audio;
pub use mp3::read_mp3;
pub use wav::{AudioSpec, read_wav, write_wav};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// MP3 decode error.
    #[error("MP3 decode error: {0}")]
    Mp3(#[from] minimp3::Error),

    /// The input format is not supported (unknown extension, or stream
    /// properties the tool cannot handle).
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
