//! Default wave table set.
//!
//! Generated once per process on first use and shared read-only afterwards.
//!
//! | Index | Waveform                         |
//! |-------|----------------------------------|
//! | 0     | Sine                             |
//! | 1     | Triangle                         |
//! | 2     | Square, 8 odd harmonics          |
//! | 3     | Saw, 16 harmonics (modulator)    |

use core::f32::consts::{PI, TAU};

#[allow(unused_imports)]
use num_traits::float::Float;
use spin::Once;

use crate::oscillator::wave_table::{WaveTable, WaveTableStore, NUM_WAVE_TABLES};

static WAVE_TABLES: Once<WaveTableStore<NUM_WAVE_TABLES>> = Once::new();

// Keeps the Gibbs overshoot of the band-limited shapes below full scale.
const BAND_LIMITED_GAIN: f32 = 0.8;

/// Returns the default wave tables, generating them on the first call.
pub fn wave_tables() -> &'static WaveTableStore<NUM_WAVE_TABLES> {
    WAVE_TABLES.call_once(|| {
        log::debug!("Generating {NUM_WAVE_TABLES} default wave tables");

        WaveTableStore::new([
            WaveTable::from_fn(|phase| (phase * TAU).sin()),
            WaveTable::from_fn(triangle),
            WaveTable::from_fn(|phase| BAND_LIMITED_GAIN * square(phase, 8)),
            WaveTable::from_fn(|phase| BAND_LIMITED_GAIN * saw(phase, 16)),
        ])
    })
}

fn triangle(phase: f32) -> f32 {
    if phase < 0.25 {
        phase * 4.0
    } else if phase < 0.75 {
        2.0 - phase * 4.0
    } else {
        phase * 4.0 - 4.0
    }
}

fn square(phase: f32, num_harmonics: usize) -> f32 {
    (0..num_harmonics)
        .map(|n| (2 * n + 1) as f32)
        .map(|k| (phase * TAU * k).sin() / k)
        .sum::<f32>()
        * 4.0
        / PI
}

fn saw(phase: f32, num_harmonics: usize) -> f32 {
    (1..=num_harmonics)
        .map(|k| {
            let sign = if k % 2 == 0 { -1.0 } else { 1.0 };
            sign * (phase * TAU * k as f32).sin() / k as f32
        })
        .sum::<f32>()
        * 2.0
        / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fixed::Q3_12;

    #[test]
    fn default_tables_stay_in_range() {
        for table in wave_tables().tables() {
            for sample in table.samples() {
                assert!(*sample >= Q3_12::MINUS_ONE && *sample <= Q3_12::ONE);
            }
        }
    }

    #[test]
    fn default_tables_start_at_zero_crossing() {
        assert_eq!(wave_tables().get(0).samples()[0], Q3_12::ZERO);
        assert_eq!(wave_tables().get(1).samples()[0], Q3_12::ZERO);
        assert_eq!(wave_tables().get(2).samples()[0], Q3_12::ZERO);
        assert_eq!(wave_tables().modulator().samples()[0], Q3_12::ZERO);
    }

    #[test]
    fn generated_once() {
        assert!(core::ptr::eq(wave_tables(), wave_tables()));
    }
}
