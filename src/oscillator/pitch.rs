//! Pitch handling.
//!
//! Host pitch arrives as a 16-bit note number (integer note in the high byte,
//! 1/256 semitone in the low byte). It is re-centered on A4 and rescaled to
//! octaves in Q7.24, then turned into a phase increment by a [`PitchConverter`].

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use core::fmt::Debug;

use dyn_clone::DynClone;
#[allow(unused_imports)]
use num_traits::float::Float;

use crate::utils::fixed::{Q15_16, Q7_24, PHASE_BITS, PHASE_MAX};
use crate::SampleRate;

/// MIDI note number of the reference pitch.
pub const NOTE_A4: i32 = 69;

/// Frequency of the reference pitch in Hz.
pub const A4_FREQUENCY: f32 = 440.0;

/// Largest increment a converter returns, half a cycle per sample.
pub const MAX_PHASE_INCREMENT: u32 = 1 << (PHASE_BITS - 1);

const LUT_PITCH_BITS: u32 = 10;
const LUT_PITCH_SIZE: usize = 1 << LUT_PITCH_BITS;
const LUT_FRAC_BITS: u32 = Q15_16::FRAC_BITS - LUT_PITCH_BITS;
const LUT_FRAC_MASK: u32 = (1 << LUT_FRAC_BITS) - 1;

/// Maps a pitch in octaves relative to A4 to a phase increment.
///
/// Implementations must be pure, monotonic in `pitch` and defined for every
/// input value.
pub trait PitchConverter: DynClone + Debug {
    fn convert(&self, pitch: Q15_16) -> u32;
}

dyn_clone::clone_trait_object!(PitchConverter);

/// Converts a host note number to octaves relative to A4.
#[inline]
pub fn note_to_pitch(note: u16) -> Q7_24 {
    // Q11.20 semitones.
    let semitones = (note as i32) << 12;
    let octaves = (semitones - (NOTE_A4 << 20)) / 12;

    Q7_24(octaves << 4)
}

/// Exponential lookup table covering one octave, shifted by the integer octave.
#[derive(Debug, Clone)]
pub struct PitchTable {
    lut: [u32; LUT_PITCH_SIZE + 1],
}

impl PitchTable {
    /// Entries saturate at `u32::MAX` when the sample rate is too low for the
    /// table range, so any rate including zero yields a usable table.
    pub fn new(sample_rate: &SampleRate) -> Self {
        let reference =
            A4_FREQUENCY as f64 / sample_rate.sample_rate_hz as f64 * PHASE_MAX as f64;

        let mut lut = [0; LUT_PITCH_SIZE + 1];
        for (i, entry) in lut.iter_mut().enumerate().take(LUT_PITCH_SIZE) {
            let ratio = 2.0f64.powf(i as f64 / LUT_PITCH_SIZE as f64);
            *entry = (reference * ratio).round() as u32;
        }
        lut[LUT_PITCH_SIZE] = lut[0].saturating_mul(2);

        log::debug!(
            "Pitch table for {} Hz, A4 increment {}",
            sample_rate.sample_rate_hz,
            lut[0]
        );

        Self { lut }
    }

    /// Increment for A4 at the table's sample rate.
    pub fn reference_increment(&self) -> u32 {
        self.lut[0]
    }
}

impl Default for PitchTable {
    fn default() -> Self {
        Self::new(&SampleRate::default())
    }
}

impl PitchConverter for PitchTable {
    #[inline]
    fn convert(&self, pitch: Q15_16) -> u32 {
        let octave = pitch.0 >> Q15_16::FRAC_BITS;
        let fraction = (pitch.0 as u32) & ((1 << Q15_16::FRAC_BITS) - 1);
        let i = (fraction >> LUT_FRAC_BITS) as usize;
        let f = fraction & LUT_FRAC_MASK;

        let a = self.lut[i];
        let b = self.lut[i + 1];
        let increment = a + (((b - a) * f) >> LUT_FRAC_BITS);

        if octave >= 0 {
            if octave as u32 >= PHASE_BITS {
                MAX_PHASE_INCREMENT
            } else {
                ((increment as u64) << octave).min(MAX_PHASE_INCREMENT as u64) as u32
            }
        } else {
            increment.checked_shr(octave.unsigned_abs()).unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_are_centered_on_a4() {
        assert_eq!(note_to_pitch((NOTE_A4 as u16) << 8), Q7_24::ZERO);
        assert_eq!(note_to_pitch(((NOTE_A4 + 12) as u16) << 8), Q7_24::ONE);
        assert_eq!(note_to_pitch(((NOTE_A4 - 24) as u16) << 8), Q7_24(-2 << 24));
    }

    #[test]
    fn fractional_notes_round_toward_zero() {
        // One semitone above A4: 2^20 / 12 in Q11.20, shifted to Q7.24.
        assert_eq!(
            note_to_pitch(((NOTE_A4 + 1) as u16) << 8),
            Q7_24(((1 << 20) / 12) << 4)
        );
    }

    #[test]
    fn reference_increment_matches_sample_rate() {
        let table = PitchTable::new(&SampleRate::new(48000.0));
        assert_eq!(table.reference_increment(), 2_460_658);
        assert_eq!(table.convert(Q15_16::ZERO), 2_460_658);
        assert_eq!(table.convert(Q15_16::ONE), 2 * 2_460_658);
        assert_eq!(table.convert(Q15_16(-Q15_16::ONE.0)), 2_460_658 / 2);
    }

    #[test]
    fn extreme_octaves_saturate() {
        let table = PitchTable::default();
        assert_eq!(table.convert(Q15_16(i32::MAX)), MAX_PHASE_INCREMENT);
        assert_eq!(table.convert(Q15_16(i32::MIN)), 0);
        assert!(table.convert(Q15_16(5 << 16)) < MAX_PHASE_INCREMENT);
        assert_eq!(table.convert(Q15_16(6 << 16)), MAX_PHASE_INCREMENT);
    }

    #[test]
    fn low_sample_rates_saturate() {
        for sample_rate_hz in [40.0, 1.0, 0.0] {
            let table = PitchTable::new(&SampleRate::new(sample_rate_hz));
            assert_eq!(table.convert(Q15_16::ZERO), MAX_PHASE_INCREMENT);
            assert_eq!(table.convert(Q15_16(Q15_16::ONE.0 - 1)), MAX_PHASE_INCREMENT);
            assert!(table.convert(Q15_16(-20 << 16)) <= MAX_PHASE_INCREMENT);
        }

        let table = PitchTable::new(&SampleRate::new(0.0));
        assert_eq!(table.reference_increment(), u32::MAX);
    }

    #[test]
    fn boxed_converters_clone() {
        let converter: Box<dyn PitchConverter> = Box::new(PitchTable::default());
        let copy = converter.clone();
        assert_eq!(copy.convert(Q15_16::ZERO), converter.convert(Q15_16::ZERO));
    }
}
