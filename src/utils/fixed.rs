//! Signed fixed-point formats and the phase accumulator word.
//!
//! Each format wraps its raw integer in a distinct type. Precision only changes
//! through the named conversions below, never by implicit promotion.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

#[allow(unused_imports)]
use num_traits::float::Float;

/// Width of every phase accumulator in bits.
pub const PHASE_BITS: u32 = 28;

/// One full cycle of a phase accumulator.
pub const PHASE_MAX: u32 = 1 << PHASE_BITS;

/// Mask keeping a phase value inside `[0, 2^PHASE_BITS)`.
pub const PHASE_MASK: u32 = PHASE_MAX - 1;

/// Q3.12, used for wave table samples and the sawtooth LFO shape.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q3_12(pub i16);

impl Q3_12 {
    pub const FRAC_BITS: u32 = 12;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << Self::FRAC_BITS);
    pub const MINUS_ONE: Self = Self(-(1 << Self::FRAC_BITS));

    /// Rounds and saturates a float. Meant for table generation, not for the render loop.
    pub fn from_f32(x: f32) -> Self {
        let scaled = (x * Self::ONE.0 as f32).round();
        Self(scaled.clamp(i16::MIN as f32, i16::MAX as f32) as i16)
    }

    #[inline]
    pub const fn widen(self) -> i32 {
        self.0 as i32
    }

    /// Clips to `[-1.0, 1.0)` and moves the value into the Q1.31 output format.
    #[inline]
    pub fn to_q1_31(self) -> i32 {
        let one = Self::ONE.widen();
        self.widen().clamp(-one, one - 1) << (31 - Self::FRAC_BITS)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE.0 as f32
    }
}

/// Q15.16, used for all modulation math.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q15_16(pub i32);

impl Q15_16 {
    pub const FRAC_BITS: u32 = 16;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << Self::FRAC_BITS);

    /// Truncates toward zero, saturating at the integer range.
    pub fn from_f32(x: f32) -> Self {
        Self((x * Self::ONE.0 as f32) as i32)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / Self::ONE.0 as f32
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.saturating_abs())
    }
}

/// Q7.24, used for pitch (octaves) and the soft clip table data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Q7_24(pub i32);

impl Q7_24 {
    pub const FRAC_BITS: u32 = 24;
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << Self::FRAC_BITS);

    /// Drops the lowest 8 fractional bits.
    #[inline]
    pub const fn to_q15_16(self) -> Q15_16 {
        Q15_16(self.0 >> (Self::FRAC_BITS - Q15_16::FRAC_BITS))
    }
}

/// Unsigned phase accumulator value in `[0, 2^PHASE_BITS)`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phase(u32);

impl Phase {
    pub const ZERO: Self = Self(0);

    /// Wraps `raw` into the accumulator range.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw & PHASE_MASK)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn advance(self, increment: u32) -> Self {
        Self(self.0.wrapping_add(increment) & PHASE_MASK)
    }

    /// Negative increments move the phase backwards, wrapping below zero.
    #[inline]
    pub const fn advance_signed(self, increment: i32) -> Self {
        Self(self.0.wrapping_add(increment as u32) & PHASE_MASK)
    }
}
