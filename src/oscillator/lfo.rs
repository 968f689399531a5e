//! Sawtooth LFO driving the phase distortion depth.
//!
//! The rate comes from an exponential table indexed by the shift-shape
//! parameter. Index 0 doubles as "LFO off", see
//! [`ModulationRouting`](super::modulation::ModulationRouting).

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use crate::resources::lfo::{LUT_LFO_DELTA, LUT_LFO_DELTA_SIZE};
use crate::utils::fixed::{Phase, Q15_16, Q3_12};

use super::saw::saw;

pub const LFO_RATE_INDEX_MAX: usize = LUT_LFO_DELTA_SIZE - 1;

/// Scales a normalized parameter to a rate index, rounding to nearest and
/// clamping to `[0, LFO_RATE_INDEX_MAX]`.
#[inline]
pub fn lfo_rate_index(shift_shape: f32) -> usize {
    let index = (shift_shape * LFO_RATE_INDEX_MAX as f32 + 0.5) as i32;
    index.clamp(0, LFO_RATE_INDEX_MAX as i32) as usize
}

/// Phase increment for a rate index, clamped to the table.
#[inline]
pub fn lfo_increment(rate_index: usize) -> u32 {
    LUT_LFO_DELTA[rate_index.min(LFO_RATE_INDEX_MAX)]
}

#[derive(Debug, Default, Clone)]
pub struct Lfo {
    phase: Phase,
    increment: u32,
}

impl Lfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn init(&mut self) {
        self.phase = Phase::ZERO;
        self.increment = 0;
    }

    /// Selects the rate for the coming block.
    #[inline]
    pub fn set_rate(&mut self, rate_index: usize) {
        self.increment = lfo_increment(rate_index);
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn increment(&self) -> u32 {
        self.increment
    }

    /// Returns the current sample scaled by `depth`, then advances the phase.
    #[inline]
    pub fn next(&mut self, depth: Q15_16) -> Q15_16 {
        let value = scale(saw(self.phase), depth);
        self.phase = self.phase.advance(self.increment);
        value
    }
}

// Q3.12 * Q15.16 -> Q15.16
#[inline]
fn scale(sample: Q3_12, depth: Q15_16) -> Q15_16 {
    Q15_16(((sample.widen() as i64 * depth.0 as i64) >> Q3_12::FRAC_BITS) as i32)
}
