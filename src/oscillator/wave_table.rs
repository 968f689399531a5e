//! Single-cycle wave tables and the store selecting between them.
//!
//! Tables are read with linear interpolation. The top `WAVE_TABLE_BITS` of the
//! phase select the sample, the next 8 bits are the interpolation fraction and
//! the remaining low bits are discarded. The index wraps, so the last sample
//! interpolates toward the first one.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use crate::error::TableError;
use crate::utils::fixed::{Phase, Q3_12, PHASE_BITS};

pub const WAVE_TABLE_BITS: u32 = 10;
pub const WAVE_TABLE_SIZE: usize = 1 << WAVE_TABLE_BITS;
pub const WAVE_TABLE_MASK: usize = WAVE_TABLE_SIZE - 1;

/// Number of tables in the default store. The last one is the modulator.
pub const NUM_WAVE_TABLES: usize = 4;

const INTERPOLATION_BITS: u32 = 8;
const PHASE_FRAC_BITS: u32 = PHASE_BITS - WAVE_TABLE_BITS;
const PHASE_FRAC_MASK: u32 = (1 << PHASE_FRAC_BITS) - 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveTable {
    samples: [Q3_12; WAVE_TABLE_SIZE],
}

impl WaveTable {
    pub const fn new(samples: [Q3_12; WAVE_TABLE_SIZE]) -> Self {
        Self { samples }
    }

    /// Builds a table from raw Q3.12 samples.
    pub fn from_raw(raw: &[i16]) -> Result<Self, TableError> {
        if raw.len() != WAVE_TABLE_SIZE {
            return Err(TableError::Length {
                expected: WAVE_TABLE_SIZE,
                found: raw.len(),
            });
        }

        Ok(Self::new(core::array::from_fn(|i| Q3_12(raw[i]))))
    }

    /// Samples `f` over one cycle, with `f` receiving the phase in `[0.0, 1.0)`.
    pub fn from_fn(mut f: impl FnMut(f32) -> f32) -> Self {
        Self::new(core::array::from_fn(|i| {
            Q3_12::from_f32(f(i as f32 / WAVE_TABLE_SIZE as f32))
        }))
    }

    pub fn samples(&self) -> &[Q3_12; WAVE_TABLE_SIZE] {
        &self.samples
    }

    #[inline]
    pub fn lookup(&self, phase: Phase) -> Q3_12 {
        let t = phase.raw();
        let i = (t >> PHASE_FRAC_BITS) as usize;
        let frac = ((t & PHASE_FRAC_MASK) >> (PHASE_FRAC_BITS - INTERPOLATION_BITS)) as i32;

        let a = self.samples[i & WAVE_TABLE_MASK].widen();
        let b = self.samples[(i + 1) & WAVE_TABLE_MASK].widen();

        Q3_12((a + (((b - a) * frac) >> INTERPOLATION_BITS)) as i16)
    }
}

/// Phase pointing at sample `index` plus `frac / 256` of the way to the next one.
pub fn table_phase(index: usize, frac: u8) -> Phase {
    Phase::new(
        ((index & WAVE_TABLE_MASK) as u32) << PHASE_FRAC_BITS
            | (frac as u32) << (PHASE_FRAC_BITS - INTERPOLATION_BITS),
    )
}

/// Immutable set of wave tables, shared read-only between voices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveTableStore<const N: usize> {
    tables: [WaveTable; N],
}

impl<const N: usize> WaveTableStore<N> {
    pub const fn new(tables: [WaveTable; N]) -> Self {
        const { assert!(N > 0, "a wave table store needs at least one table") };
        Self { tables }
    }

    pub fn from_raw(tables: [&[i16]; N]) -> Result<Self, TableError> {
        if let Some(raw) = tables.iter().find(|raw| raw.len() != WAVE_TABLE_SIZE) {
            return Err(TableError::Length {
                expected: WAVE_TABLE_SIZE,
                found: raw.len(),
            });
        }

        Ok(Self::new(tables.map(|raw| {
            WaveTable::new(core::array::from_fn(|i| Q3_12(raw[i])))
        })))
    }

    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        N
    }

    /// Table at `index`, clamped into the valid range.
    #[inline]
    pub fn get(&self, index: i32) -> &WaveTable {
        &self.tables[clamp_index(index, N)]
    }

    /// The table reserved for driving the phase modulation.
    #[inline]
    pub fn modulator(&self) -> &WaveTable {
        &self.tables[N - 1]
    }

    pub fn tables(&self) -> &[WaveTable; N] {
        &self.tables
    }
}

#[inline]
pub fn clamp_index(index: i32, count: usize) -> usize {
    index.clamp(0, count as i32 - 1) as usize
}
