//! Table-free symmetric sawtooth used as the LFO shape.
//!
//! The first half-cycle falls from +1 to -1, the second half rises back to +1,
//! so the shape is continuous across the phase wrap.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use crate::utils::fixed::{Phase, Q3_12, PHASE_BITS};

const HALF_CYCLE: u32 = 1 << (PHASE_BITS - 1);

// Slope of 4 per cycle, expressed in Q3.12 steps.
const SLOPE_SHIFT: u32 = PHASE_BITS - Q3_12::FRAC_BITS;

#[inline]
pub fn saw(phase: Phase) -> Q3_12 {
    let t = phase.raw();

    if t < HALF_CYCLE {
        Q3_12(Q3_12::ONE.0 - ((t * 4) >> SLOPE_SHIFT) as i16)
    } else {
        Q3_12(Q3_12::MINUS_ONE.0 + (((t - HALF_CYCLE) * 4) >> SLOPE_SHIFT) as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fixed::PHASE_MASK;

    #[test]
    fn corner_values() {
        assert_eq!(saw(Phase::ZERO), Q3_12::ONE);
        assert_eq!(saw(Phase::new(HALF_CYCLE / 2)), Q3_12::ZERO);
        assert_eq!(saw(Phase::new(HALF_CYCLE - 1)), Q3_12(-4095));
        assert_eq!(saw(Phase::new(HALF_CYCLE)), Q3_12::MINUS_ONE);
        assert_eq!(saw(Phase::new(HALF_CYCLE + HALF_CYCLE / 2)), Q3_12::ZERO);
        assert_eq!(saw(Phase::new(PHASE_MASK)), Q3_12(4095));
    }

    #[test]
    fn continuous_across_wrap() {
        let step = 1 << 14;
        let mut phase = Phase::ZERO;
        let mut previous = saw(Phase::new(PHASE_MASK - step + 1));

        for _ in 0..(1 << (PHASE_BITS - 14)) {
            let value = saw(phase);
            assert!((value.widen() - previous.widen()).abs() <= 1);
            previous = value;
            phase = phase.advance(step);
        }
    }
}
