//! Extension-based decoder dispatch.

use crate::wav::AudioSpec;
use crate::{Error, Result, read_mp3, read_wav};
use std::path::Path;

/// Read an audio file, selecting the decoder by file extension.
///
/// Supports `wav` (via hound) and `mp3` (via minimp3), matched
/// case-insensitively. Everything else is [`Error::UnsupportedFormat`].
///
/// The returned buffer is interleaved across channels and normalized to
/// [-1, 1]; the spec carries channel count, sample rate, and bit depth.
pub fn read_audio<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, AudioSpec)> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("wav") => read_wav(path),
        Some("mp3") => read_mp3(path),
        _ => Err(Error::UnsupportedFormat(path.display().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_extension() {
        let err = read_audio("music.ogg").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn rejects_missing_extension() {
        let err = read_audio("music").unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        // Dispatches to the WAV reader, which then fails on the missing file
        let err = read_audio("/nonexistent/MUSIC.WAV").unwrap_err();
        assert!(matches!(err, Error::Wav(_)));
    }
}
