//! Linear interpolation of fixed-point parameters in rendering loops.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

/// Integer ramp from a block's start value to its end value.
///
/// The per-frame step is truncated, so the ramp may stop short of the target by
/// less than one step per frame. Callers snap to the target after the block.
#[derive(Debug, Default, Copy, Clone)]
pub struct LinearSmoother {
    increment: i32,
}

impl LinearSmoother {
    pub fn new(value: i32, new_value: i32, size: usize) -> Self {
        let mut smoother = Self::default();
        smoother.init(value, new_value, size);
        smoother
    }

    pub fn init(&mut self, value: i32, new_value: i32, size: usize) {
        self.increment = if size == 0 {
            0
        } else {
            ((new_value as i64 - value as i64) / size as i64)
                .clamp(i32::MIN as i64, i32::MAX as i64) as i32
        };
    }

    #[inline]
    pub fn increment(&self) -> i32 {
        self.increment
    }

    #[inline]
    pub fn update(&self, value: &mut i32) -> i32 {
        *value = value.wrapping_add(self.increment);
        *value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramps_toward_target() {
        let smoother = LinearSmoother::new(0, 100, 4);
        let mut value = 0;
        let ramp: Vec<i32> = (0..4).map(|_| smoother.update(&mut value)).collect();
        assert_eq!(ramp, [25, 50, 75, 100]);
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(LinearSmoother::new(0, 10, 3).increment(), 3);
        assert_eq!(LinearSmoother::new(0, -10, 3).increment(), -3);
    }

    #[test]
    fn empty_block_holds_value() {
        let smoother = LinearSmoother::new(7, 1000, 0);
        let mut value = 7;
        assert_eq!(smoother.update(&mut value), 7);
    }

    #[test]
    fn full_range_saturates() {
        assert_eq!(LinearSmoother::new(i32::MIN, i32::MAX, 1).increment(), i32::MAX);
    }
}
