//! One-pole RC highpass filter — the high band of the crossover.
//!
//! First-order highpass with the difference equation:
//!
//! ```text
//! y[0] = x[0]
//! y[n] = alpha * (y[n-1] + x[n] - x[n-1])
//! ```
//!
//! where `alpha = RC / (RC + dt)`, `dt = 1 / sample_rate`, and
//! `RC = 1 / (2π * cutoff_hz)` — the complementary pole to [`RcLowpass`].
//! Slowly varying (DC and low-frequency) content is removed; rapid changes
//! pass through.
//!
//! [`RcLowpass`]: crate::RcLowpass
//!
//! # Reference
//!
//! Julius O. Smith III, "Introduction to Digital Filters with Audio
//! Applications", Chapter on the DC Blocker (same recurrence shape with the
//! pole parameterized by cutoff instead of fixed near 1).

use crate::effect::Effect;

/// One-pole (6 dB/oct) RC highpass filter.
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
/// - The first sample after construction or [`reset`](RcHighpass::reset)
///   passes through unchanged
#[derive(Debug, Clone)]
pub struct RcHighpass {
    alpha: f32,
    /// Previous input sample x[n-1]
    x_prev: f32,
    /// Previous output sample y[n-1]
    y_prev: f32,
    primed: bool,
    sample_rate: f32,
    cutoff_hz: f32,
}

impl RcHighpass {
    /// Create a new RC highpass filter.
    ///
    /// # Arguments
    ///
    /// * `sample_rate` - Sample rate in Hz
    /// * `cutoff_hz` - Cutoff frequency in Hz
    pub fn new(sample_rate: f32, cutoff_hz: f32) -> Self {
        let mut filter = Self {
            alpha: 0.0,
            x_prev: 0.0,
            y_prev: 0.0,
            primed: false,
            sample_rate,
            cutoff_hz,
        };
        filter.recalculate_alpha();
        filter
    }

    /// Set the cutoff frequency and recalculate the pole coefficient.
    pub fn set_cutoff(&mut self, cutoff_hz: f32) {
        self.cutoff_hz = cutoff_hz;
        self.recalculate_alpha();
    }

    /// The pole coefficient `alpha = RC / (RC + dt)`.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Recalculate `alpha` from cutoff and sample rate.
    ///
    /// `RC = 1 / (2π * cutoff)`, `dt = 1 / sample_rate`,
    /// `alpha = RC / (RC + dt)`. Higher cutoff → smaller alpha → more
    /// low-frequency content removed.
    fn recalculate_alpha(&mut self) {
        let dt = 1.0 / self.sample_rate;
        let rc = 1.0 / (core::f32::consts::TAU * self.cutoff_hz);
        self.alpha = rc / (rc + dt);
    }
}

impl Effect for RcHighpass {
    /// Process one sample through the highpass filter.
    #[inline]
    fn process(&mut self, input: f32) -> f32 {
        if !self.primed {
            self.primed = true;
            self.x_prev = input;
            self.y_prev = input;
            return input;
        }
        // y[n] = alpha * (y[n-1] + x[n] - x[n-1])
        let output = self.alpha * (self.y_prev + input - self.x_prev);
        self.x_prev = input;
        self.y_prev = output;
        output
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.recalculate_alpha();
    }

    /// Reset filter state. The next sample processed passes through
    /// unchanged, as if freshly constructed.
    fn reset(&mut self) {
        self.x_prev = 0.0;
        self.y_prev = 0.0;
        self.primed = false;
    }
}
