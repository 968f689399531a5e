//! Utility functions.
//!
//! Fixed-point formats, the soft clipper and parameter smoothing shared by the
//! oscillator code.

pub mod fixed;
pub mod parameter_interpolator;
pub mod soft_clip;

/// Clips a normalized parameter to `[0.0, 1.0]`. NaN is treated as `0.0`.
#[inline]
pub fn clip01(x: f32) -> f32 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Converts a Q1.31 output sample to a float in `[-1.0, 1.0)`.
#[inline]
pub fn q31_to_f32(x: i32) -> f32 {
    x as f32 / 2_147_483_648.0
}
