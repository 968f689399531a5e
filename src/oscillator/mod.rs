//! Phase distortion wavetable oscillator and its building blocks.

pub mod lfo;
pub mod modulation;
pub mod phase_distortion_oscillator;
pub mod pitch;
pub mod saw;
pub mod wave_table;
