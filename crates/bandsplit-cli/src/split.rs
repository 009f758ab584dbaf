//! The band-splitting pipeline: decode, filter both bands, encode.

use bandsplit_core::{Effect, RcHighpass, RcLowpass, linear_to_db};
use bandsplit_io::{AudioSpec, read_audio, write_wav};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

/// Arguments for the crossover run.
#[derive(Args)]
pub struct SplitArgs {
    /// Input audio file (.wav or .mp3)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Crossover cutoff frequency in Hz
    #[arg(value_name = "CUTOFF_HZ", allow_negative_numbers = true)]
    cutoff_hz: f32,

    /// Output prefix; writes <prefix>_low.wav and <prefix>_high.wav
    #[arg(value_name = "OUTPUT_PREFIX")]
    output_prefix: String,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "16")]
    bit_depth: u16,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,
}

/// Run the crossover: read the input, filter the low and high bands, write
/// `<prefix>_low.wav` and `<prefix>_high.wav`.
pub fn run(args: SplitArgs) -> anyhow::Result<()> {
    if args.cutoff_hz <= 0.0 {
        anyhow::bail!("Cutoff frequency must be positive, got {}", args.cutoff_hz);
    }
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("Unsupported bit depth {} (use 16, 24, or 32)", args.bit_depth);
    }

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_audio(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} samples, {} Hz, {} channel(s), {:.2}s",
        samples.len(),
        spec.sample_rate,
        spec.channels,
        samples.len() as f32 / (sample_rate * f32::from(spec.channels))
    );

    if args.cutoff_hz >= sample_rate / 2.0 {
        tracing::warn!(
            cutoff_hz = args.cutoff_hz,
            sample_rate = spec.sample_rate,
            "cutoff at or above Nyquist; results will not be meaningful"
        );
    }
    if spec.channels > 1 {
        // Interleaved channels are filtered as one flat stream, so filter
        // state carries across channel boundaries
        tracing::warn!(
            channels = spec.channels,
            "filtering interleaved channels as a single stream"
        );
    }

    println!("Splitting at {} Hz...", args.cutoff_hz);

    let mut lowpass = RcLowpass::new(sample_rate, args.cutoff_hz);
    let mut highpass = RcHighpass::new(sample_rate, args.cutoff_hz);

    // Process with progress bar
    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut low = vec![0.0; samples.len()];
    let mut high = vec![0.0; samples.len()];
    let block_size = args.block_size.max(1);

    for (i, ((in_chunk, low_chunk), high_chunk)) in samples
        .chunks(block_size)
        .zip(low.chunks_mut(block_size))
        .zip(high.chunks_mut(block_size))
        .enumerate()
    {
        let len = in_chunk.len();
        lowpass.process_block(in_chunk, &mut low_chunk[..len]);
        highpass.process_block(in_chunk, &mut high_chunk[..len]);
        pb.set_position(((i + 1) * block_size).min(samples.len()) as u64);
    }

    pb.finish_with_message("done");

    println!("\nStats:");
    println!(
        "  Input:     RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&samples)),
        linear_to_db(peak(&samples))
    );
    println!(
        "  Low band:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&low)),
        linear_to_db(peak(&low))
    );
    println!(
        "  High band: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(rms(&high)),
        linear_to_db(peak(&high))
    );

    let out_spec = AudioSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.bit_depth,
    };

    let low_path = format!("{}_low.wav", args.output_prefix);
    let high_path = format!("{}_high.wav", args.output_prefix);

    println!("\nWriting {low_path} and {high_path}...");
    write_bands(&low_path, &low, &high_path, &high, out_spec)?;

    println!("Filtering complete! Check {low_path} and {high_path} for the results.");

    Ok(())
}

/// Write both band files, removing whatever was written if either fails so
/// no half-finished pair is left behind.
fn write_bands(
    low_path: &str,
    low: &[f32],
    high_path: &str,
    high: &[f32],
    spec: AudioSpec,
) -> anyhow::Result<()> {
    let result = write_wav(low_path, low, spec).and_then(|()| write_wav(high_path, high, spec));

    if let Err(err) = result {
        let _ = std::fs::remove_file(low_path);
        let _ = std::fs::remove_file(high_path);
        return Err(anyhow::Error::new(err).context("failed to write output files"));
    }

    Ok(())
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum: f32 = samples.iter().map(|s| s * s).sum();
    (sum / samples.len() as f32).sqrt()
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}
