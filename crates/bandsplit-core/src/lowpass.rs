//! One-pole RC lowpass filter — the low band of the crossover.
//!
//! The discretized form of a continuous RC lowpass with the difference
//! equation:
//!
//! ```text
//! y[0] = x[0]
//! y[n] = y[n-1] + alpha * (x[n] - y[n-1])
//! ```
//!
//! where `alpha = dt / (RC + dt)`, `dt = 1 / sample_rate`, and
//! `RC = 1 / (2π * cutoff_hz)`.
//!
//! This is an exponential moving average: 6 dB/octave rolloff, zero latency,
//! one multiply per sample. `alpha` lies in (0, 1) for positive cutoff and
//! sample rate; smaller `alpha` means stronger smoothing.
//!
//! # Usage
//!
//! ```rust
//! use bandsplit_core::{Effect, RcLowpass};
//!
//! let mut lp = RcLowpass::new(48000.0, 1000.0);
//! let first = lp.process(1.0);
//! assert_eq!(first, 1.0); // first sample passes through
//! assert!(lp.process(0.0) < 1.0);
//! ```
//!
//! # Reference
//!
//! Julius O. Smith III, "Introduction to Digital Filters with Audio
//! Applications", Section: One-Pole Filter.

use crate::effect::Effect;
use crate::math::flush_denormal;

/// One-pole (6 dB/oct) RC lowpass filter.
///
/// # Parameters
///
/// - `cutoff_hz`: Cutoff frequency in Hz (−3 dB point)
/// - `sample_rate`: Sample rate in Hz
///
/// # Contract
///
/// `sample_rate` and `cutoff_hz` must be positive; the cutoff is only
/// meaningful below `sample_rate / 2`. Neither is checked here — validation
/// belongs to the caller.
///
/// # Invariants
///
/// - `alpha` is in (0, 1) for positive cutoff and sample rate
/// - The first sample after construction or [`reset`](RcLowpass::reset)
///   passes through unchanged
/// - `state` is flushed to zero when below 1e-20 (denormal protection)
#[derive(Debug, Clone)]
pub struct RcLowpass {
    alpha: f32,
    state: f32,
    primed: bool,
    sample_rate: f32,
    cutoff_hz: f32,
}

impl RcLowpass {
    /// Create a new RC lowpass filter.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz
    /// * `cutoff_hz` - Cutoff frequency in Hz
    pub fn new(sample_rate: f32, cutoff_hz: f32) -> Self {
        let mut filter = Self {
            alpha: 0.0,
            state: 0.0,
            primed: false,
            sample_rate,
            cutoff_hz,
        };
        filter.recalculate_alpha();
        filter
    }

    /// Set the cutoff frequency and recalculate the smoothing factor.
    ///
    /// Does not disturb filter state, so the cutoff can change between
    /// blocks of one stream.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.cutoff_hz = cutoff_hz;
        self.recalculate_alpha();
    }

    /// The smoothing factor `alpha = dt / (RC + dt)`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Recalculate `alpha` from cutoff and sample rate.
    ///
    /// `RC = 1 / (2π * cutoff)`, `dt = 1 / sample_rate`,
    /// `alpha = dt / (RC + dt)`. Lower cutoff → smaller alpha → stronger
    /// smoothing.
    fn recalculate_alpha(&mut self) {
        let dt = 1.0 / self.sample_rate;
        let rc = 1.0 / (core::f32::consts::TAU * self.cutoff_hz);
        self.alpha = dt / (rc + dt);
    }
}

impl Effect for RcLowpass {
    /// Process one sample through the lowpass filter.
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        if !self.primed {
            self.primed = true;
            self.state = input;
            return input;
        }
        // y[n] = y[n-1] + alpha * (x[n] - y[n-1])
        self.state = flush_denormal(self.state + self.alpha * (input - self.state));
        self.state
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_alpha();
    }

    /// Reset filter state. The next sample processed passes through
    /// unchanged, as if freshly constructed.
    fn reset(&mut self) {
        self.state = 0.0;
        self.primed = false;
    }
}
