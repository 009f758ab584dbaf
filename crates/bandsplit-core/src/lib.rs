//! Bandsplit Core - first-order crossover filter primitives
//!
//! This crate provides the DSP building blocks for splitting a signal into
//! complementary low and high bands with single-pole recursive filters.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for sample and block processing
//!
//! ## Filters
//!
//! - [`RcLowpass`] - Discrete RC lowpass (exponential moving average)
//! - [`RcHighpass`] - Complementary RC highpass
//!
//! Both filters share the same pole position for a given cutoff, so the two
//! outputs form a crossover pair. The split is lossy: summing the lowpass and
//! highpass outputs does *not* reconstruct the input.
//!
//! ## Utilities
//!
//! - Math functions: [`db_to_linear`], [`linear_to_db`], [`flush_denormal`]
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! bandsplit-core = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bandsplit_core::{Effect, RcLowpass, RcHighpass};
//!
//! let input = [0.0, 0.5, 1.0, 0.5, 0.0];
//! let mut low = vec![0.0; input.len()];
//! let mut high = vec![0.0; input.len()];
//!
//! RcLowpass::new(48000.0, 1000.0).process_block(&input, &mut low);
//! RcHighpass::new(48000.0, 1000.0).process_block(&input, &mut high);
//!
//! assert_eq!(low[0], input[0]);
//! assert_eq!(high[0], input[0]);
//! ```
//!
//! # Design Principles
//!
//! - **Real-time safe**: No allocations in audio processing paths
//! - **No dependencies on std**: Pure `no_std` with `libm` for math
//! - **Object-safe traits**: Dynamic dispatch when needed

#![cfg_attr(not(feature = "std"), no_std)]

pub mod effect;
pub mod highpass;
pub mod lowpass;
pub mod math;

// Re-export main types at crate root
pub use effect::Effect;
pub use highpass::RcHighpass;
pub use lowpass::RcLowpass;
pub use math::{db_to_linear, flush_denormal, linear_to_db};
