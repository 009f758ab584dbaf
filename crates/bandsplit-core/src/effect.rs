//! Core Effect trait.
//!
//! The [`Effect`] trait is the processing interface shared by the crossover
//! filters, providing single-sample and block-based processing.
//!
//! ## Design Decisions
//!
//! - **Mono stream processing**: Single `f32` input/output. The caller decides
//!   what the stream is; an interleaved multi-channel buffer fed through one
//!   filter instance is treated as a single flat stream.
//!
//! - **Object-safe**: The trait allows `dyn Effect` for runtime dispatch,
//!   though static dispatch is preferred where possible.
//!
//! - **No allocations**: All methods are designed to be called in real-time
//!   audio contexts with zero heap allocations.

/// Processing trait for stateful sample processors.
///
/// # Example
///
/// ```rust
/// use bandsplit_core::Effect;
///
/// struct Gain {
///     gain: f32,
/// }
///
/// impl Effect for Gain {
///     fn process(&mut self, input: f32) -> f32 {
///         input * self.gain
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {
///         // Gain doesn't depend on sample rate
///     }
///
///     fn reset(&mut self) {
///         // Gain has no internal state to reset
///     }
/// }
/// ```
pub trait Effect {
    /// Process a single sample.
    ///
    /// For stateful processors (filters), this advances the internal state
    /// by one sample.
    ///
    /// # Arguments
    /// * `input` - Input sample, typically in range [-1.0, 1.0]
    ///
    /// # Returns
    /// Processed output sample
    fn process(&mut self, input: f32) -> f32;

    /// Process a block of samples.
    ///
    /// Default implementation calls `process()` for each sample.
    ///
    /// # Arguments
    /// * `input` - Input sample buffer
    /// * `output` - Output sample buffer (must be same length as input)
    ///
    /// # Panics
    /// Default implementation panics in debug builds if
    /// `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert_eq!(
            input.len(),
            output.len(),
            "Input and output buffers must have same length"
        );
        for (inp, out) in input.iter().zip(output.iter_mut()) {
            *out = self.process(*inp);
        }
    }

    /// Process a block of samples in-place.
    ///
    /// Convenience method for when input and output are the same buffer.
    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    /// Update the sample rate.
    ///
    /// Called when the sample rate changes. Processors should recalculate
    /// any sample-rate-dependent coefficients.
    ///
    /// # Arguments
    /// * `sample_rate` - New sample rate in Hz (e.g., 44100.0, 48000.0)
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state.
    ///
    /// Clears all internal state (filter history) without changing
    /// parameters.
    fn reset(&mut self);
}
