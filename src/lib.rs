#![doc = include_str!("../README.md")]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;
pub mod oscillator;
pub mod resources;
pub mod utils;

/// Default audio sample rate in Hz.
pub const SAMPLE_RATE: f32 = 48000.0;

/// Sample rate context for building rate-dependent tables.
#[derive(Debug, Clone, Copy)]
pub struct SampleRate {
    /// Sample rate in Hz
    pub sample_rate_hz: f32,
}

impl SampleRate {
    /// Create a new sample rate context.
    pub fn new(sample_rate_hz: f32) -> Self {
        Self { sample_rate_hz }
    }
}

impl Default for SampleRate {
    fn default() -> Self {
        Self::new(SAMPLE_RATE)
    }
}
