//! Table-driven soft clipper bounding the phase modulation index.
//!
//! Odd-symmetric and monotonic. Inputs beyond the table's range saturate at
//! [`SOFT_CLIP_LIMIT`].

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use crate::resources::soft_clip::{LUT_SOFT_CLIP, LUT_SOFT_CLIP_BITS, LUT_SOFT_CLIP_SIZE};
use crate::utils::fixed::Q15_16;

// Table entries per unit of input.
const BASE_BITS: u32 = LUT_SOFT_CLIP_BITS - 1;
const FRAC_BITS: u32 = Q15_16::FRAC_BITS - BASE_BITS;
const FRAC_MASK: u32 = (1 << FRAC_BITS) - 1;
const INDEX_MAX: usize = LUT_SOFT_CLIP_SIZE - 1;

/// Output magnitude for any input at or above [`SOFT_CLIP_KNEE`].
pub const SOFT_CLIP_LIMIT: Q15_16 = LUT_SOFT_CLIP[INDEX_MAX].to_q15_16();

/// Smallest input magnitude that saturates.
pub const SOFT_CLIP_KNEE: Q15_16 = Q15_16((INDEX_MAX as i32) << FRAC_BITS);

#[inline]
pub fn soft_clip(x: Q15_16) -> Q15_16 {
    let t = x.0.unsigned_abs();
    let i = (t >> FRAC_BITS) as usize;

    let y = if i < INDEX_MAX {
        let frac = (t & FRAC_MASK) as i32;
        let a = LUT_SOFT_CLIP[i].to_q15_16().0;
        let b = LUT_SOFT_CLIP[i + 1].to_q15_16().0;
        a + (((b - a) * frac) >> FRAC_BITS)
    } else {
        SOFT_CLIP_LIMIT.0
    };

    Q15_16(if x.0 < 0 { -y } else { y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_table_entries() {
        assert_eq!(soft_clip(Q15_16::ZERO), Q15_16::ZERO);
        assert_eq!(soft_clip(Q15_16(1 << FRAC_BITS)), Q15_16(0x0FFD));
        assert_eq!(soft_clip(Q15_16(4 << FRAC_BITS)), Q15_16(0x3F5A));
        assert_eq!(soft_clip(Q15_16(-(4 << FRAC_BITS))), Q15_16(-0x3F5A));
    }

    #[test]
    fn interpolates_between_entries() {
        // Halfway between entries 0 and 1.
        assert_eq!(soft_clip(Q15_16(1 << (FRAC_BITS - 1))), Q15_16(0x0FFD / 2));
    }

    #[test]
    fn saturates_past_knee() {
        assert_eq!(SOFT_CLIP_LIMIT, Q15_16(0x14030));
        assert_eq!(soft_clip(SOFT_CLIP_KNEE), SOFT_CLIP_LIMIT);
        assert_eq!(soft_clip(Q15_16(i32::MAX)), SOFT_CLIP_LIMIT);
        assert_eq!(soft_clip(Q15_16(i32::MIN)), Q15_16(-SOFT_CLIP_LIMIT.0));
    }
}
