//! Integration tests for the bandsplit binary.
//!
//! Covers the CLI contract end to end: invocation shape, exit codes, output
//! file naming, and the audible effect of the split on known signals.

use bandsplit_io::{AudioSpec, read_wav, write_wav};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Helper to get the path to the `bandsplit` binary built by cargo.
fn bandsplit_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bandsplit"))
}

fn rms(samples: &[f32]) -> f32 {
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

/// Write a mono 16-bit test tone and return its path.
fn write_tone(dir: &Path, name: &str, freq: f32, sample_rate: u32) -> std::path::PathBuf {
    let path = dir.join(name);
    let samples: Vec<f32> = (0..sample_rate)
        .map(|i| (core::f32::consts::TAU * freq * i as f32 / sample_rate as f32).sin() * 0.8)
        .collect();
    let spec = AudioSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
    };
    write_wav(&path, &samples, spec).unwrap();
    path
}

// ---------------------------------------------------------------------------
// CLI contract -- argument handling and exit codes
// ---------------------------------------------------------------------------

#[test]
fn cli_help_works() {
    let output = bandsplit_bin()
        .arg("--help")
        .output()
        .expect("failed to run bandsplit --help");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Two-way crossover"));
    assert!(stdout.contains("CUTOFF_HZ"));
    assert!(stdout.contains("OUTPUT_PREFIX"));
}

#[test]
fn cli_no_args_exits_one() {
    let output = bandsplit_bin().output().expect("failed to run bandsplit");

    assert_eq!(output.status.code(), Some(1), "wrong argument count must exit 1");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage") || stderr.contains("usage"));
}

#[test]
fn cli_missing_prefix_exits_one() {
    let output = bandsplit_bin()
        .args(["input.wav", "1000"])
        .output()
        .expect("failed to run bandsplit");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_non_numeric_cutoff_exits_one() {
    let output = bandsplit_bin()
        .args(["input.wav", "loud", "out"])
        .output()
        .expect("failed to run bandsplit");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_negative_cutoff_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "tone.wav", 440.0, 48000);
    let prefix = dir.path().join("out").to_string_lossy().into_owned();

    let output = bandsplit_bin()
        .args([input.to_str().unwrap(), "-10", &prefix])
        .output()
        .expect("failed to run bandsplit");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_missing_input_exits_one() {
    let output = bandsplit_bin()
        .args(["/nonexistent/missing.wav", "1000", "/tmp/bandsplit_missing_out"])
        .output()
        .expect("failed to run bandsplit");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"), "stderr should report the failure: {stderr}");
}

#[test]
fn cli_unsupported_extension_exits_one() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("clip.ogg");
    std::fs::write(&input, b"not audio").unwrap();
    let prefix = dir.path().join("out").to_string_lossy().into_owned();

    let output = bandsplit_bin()
        .args([input.to_str().unwrap(), "1000", &prefix])
        .output()
        .expect("failed to run bandsplit");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unsupported audio format"),
        "stderr should name the format error: {stderr}"
    );
}

// ---------------------------------------------------------------------------
// End-to-end splitting
// ---------------------------------------------------------------------------

#[test]
fn cli_split_writes_both_bands() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "tone.wav", 440.0, 48000);
    let prefix = dir.path().join("out").to_string_lossy().into_owned();

    let output = bandsplit_bin()
        .args([input.to_str().unwrap(), "1000", &prefix])
        .output()
        .expect("failed to run bandsplit");

    assert!(
        output.status.success(),
        "split failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Filtering complete!"));
    assert!(stdout.contains("_low.wav"));
    assert!(stdout.contains("_high.wav"));

    let low_path = format!("{prefix}_low.wav");
    let high_path = format!("{prefix}_high.wav");

    let (input_samples, _) = read_wav(&input).unwrap();
    let (low, low_spec) = read_wav(&low_path).unwrap();
    let (high, high_spec) = read_wav(&high_path).unwrap();

    // Both bands preserve length, sample rate, and the input's start
    assert_eq!(low.len(), input_samples.len());
    assert_eq!(high.len(), input_samples.len());
    assert_eq!(low_spec.sample_rate, 48000);
    assert_eq!(high_spec.sample_rate, 48000);
    assert_eq!(low_spec.bits_per_sample, 16, "default output is 16-bit PCM");
    assert!((low[0] - input_samples[0]).abs() < 0.001);
    assert!((high[0] - input_samples[0]).abs() < 0.001);
}

#[test]
fn cli_split_separates_energy_by_band() {
    let dir = TempDir::new().unwrap();
    // 8 kHz tone, split at 500 Hz: energy should land in the high band
    let input = write_tone(dir.path(), "hiss.wav", 8000.0, 48000);
    let prefix = dir.path().join("out").to_string_lossy().into_owned();

    let status = bandsplit_bin()
        .args([input.to_str().unwrap(), "500", &prefix])
        .status()
        .expect("failed to run bandsplit");
    assert!(status.success());

    let (low, _) = read_wav(format!("{prefix}_low.wav")).unwrap();
    let (high, _) = read_wav(format!("{prefix}_high.wav")).unwrap();

    let settled = low.len() / 2;
    let low_rms = rms(&low[settled..]);
    let high_rms = rms(&high[settled..]);

    assert!(
        high_rms > 10.0 * low_rms,
        "8 kHz tone split at 500 Hz: high band {high_rms} should dwarf low band {low_rms}"
    );
}

#[test]
fn cli_bit_depth_flag_writes_float_wav() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "tone.wav", 440.0, 48000);
    let prefix = dir.path().join("out").to_string_lossy().into_owned();

    let status = bandsplit_bin()
        .args([input.to_str().unwrap(), "1000", &prefix, "--bit-depth", "32"])
        .status()
        .expect("failed to run bandsplit");
    assert!(status.success());

    let (_, spec) = read_wav(format!("{prefix}_low.wav")).unwrap();
    assert_eq!(spec.bits_per_sample, 32);
}

#[test]
fn cli_block_size_does_not_change_output() {
    let dir = TempDir::new().unwrap();
    let input = write_tone(dir.path(), "tone.wav", 1000.0, 48000);
    let prefix_a = dir.path().join("a").to_string_lossy().into_owned();
    let prefix_b = dir.path().join("b").to_string_lossy().into_owned();

    for (prefix, block) in [(&prefix_a, "512"), (&prefix_b, "37")] {
        let status = bandsplit_bin()
            .args([
                input.to_str().unwrap(),
                "1000",
                prefix,
                "--block-size",
                block,
            ])
            .status()
            .expect("failed to run bandsplit");
        assert!(status.success());
    }

    let (a, _) = read_wav(format!("{prefix_a}_low.wav")).unwrap();
    let (b, _) = read_wav(format!("{prefix_b}_low.wav")).unwrap();
    assert_eq!(a, b, "block size is a chunking detail, not a semantic one");
}
