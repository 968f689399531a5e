//! Phase distortion math.
//!
//! The modulator table, read at the driver phase, is multiplied by either a
//! static offset or the LFO output. The product is soft clipped and then
//! scales the driver increment to give the output increment.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use crate::utils::fixed::{Q15_16, Q3_12};
use crate::utils::soft_clip::soft_clip;

/// Where the distortion amount comes from for the current block.
///
/// A shift-shape of zero (LFO rate index 0) disables the LFO and applies the
/// shape as a static offset. Any other rate routes the shape to the LFO depth.
/// The two never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulationRouting {
    Static(Q15_16),
    Lfo(Q15_16),
}

impl ModulationRouting {
    pub fn new(shape: f32, lfo_rate_index: usize) -> Self {
        let amount = Q15_16::from_f32((shape - 0.5) * 2.0);

        if lfo_rate_index == 0 {
            ModulationRouting::Static(amount)
        } else {
            ModulationRouting::Lfo(amount)
        }
    }

    #[inline]
    pub fn static_offset(&self) -> Q15_16 {
        match self {
            ModulationRouting::Static(offset) => *offset,
            ModulationRouting::Lfo(_) => Q15_16::ZERO,
        }
    }

    #[inline]
    pub fn depth(&self) -> Q15_16 {
        match self {
            ModulationRouting::Static(_) => Q15_16::ZERO,
            ModulationRouting::Lfo(depth) => *depth,
        }
    }
}

/// Unclipped modulation index: `modulator * (offset + lfo)`.
#[inline]
pub fn modulation_index(modulator: Q3_12, offset: Q15_16, lfo: Q15_16) -> Q15_16 {
    let amount = offset.0 as i64 + lfo.0 as i64;
    // Q3.12 * Q15.16 = Q28
    let product = modulator.widen() as i64 * amount;

    Q15_16((product >> Q3_12::FRAC_BITS) as i32)
}

/// Modulation index after soft clipping.
#[inline]
pub fn clipped_modulation_index(modulator: Q3_12, offset: Q15_16, lfo: Q15_16) -> Q15_16 {
    soft_clip(modulation_index(modulator, offset, lfo))
}

/// `increment * (1 + index)`. Can be negative, running the output phase backwards.
#[inline]
pub fn modulated_increment(increment: u32, index: Q15_16) -> i32 {
    let delta = (increment as i64 * index.0 as i64) >> Q15_16::FRAC_BITS;
    (increment as i64 + delta) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::soft_clip::SOFT_CLIP_LIMIT;

    #[test]
    fn routing_is_exclusive() {
        let routing = ModulationRouting::new(1.0, 0);
        assert_eq!(routing, ModulationRouting::Static(Q15_16::ONE));
        assert_eq!(routing.depth(), Q15_16::ZERO);

        let routing = ModulationRouting::new(0.0, 12);
        assert_eq!(routing, ModulationRouting::Lfo(Q15_16(-Q15_16::ONE.0)));
        assert_eq!(routing.static_offset(), Q15_16::ZERO);
    }

    #[test]
    fn centered_shape_is_neutral() {
        let routing = ModulationRouting::new(0.5, 0);
        assert_eq!(routing.static_offset(), Q15_16::ZERO);
        assert_eq!(
            modulated_increment(1000, clipped_modulation_index(Q3_12::ONE, Q15_16::ZERO, Q15_16::ZERO)),
            1000
        );
    }

    #[test]
    fn index_scales_with_modulator() {
        // 0.5 * (0.5 + 0.25)
        let index = modulation_index(Q3_12(0x0800), Q15_16(0x8000), Q15_16(0x4000));
        assert_eq!(index, Q15_16(0x6000));
    }

    #[test]
    fn increment_follows_index() {
        assert_eq!(modulated_increment(1 << 18, Q15_16(0x4000)), (1 << 18) + (1 << 16));
        assert_eq!(modulated_increment(1 << 18, Q15_16(-0x4000)), (1 << 18) - (1 << 16));
        assert_eq!(
            modulated_increment(1 << 18, Q15_16(-SOFT_CLIP_LIMIT.0)),
            (1 << 18) - ((SOFT_CLIP_LIMIT.0 as i64 * (1 << 18)) >> 16) as i32
        );
        assert!(modulated_increment(1 << 18, Q15_16(-SOFT_CLIP_LIMIT.0)) < 0);
    }
}
