//! Resources definitions.

pub mod lfo;
pub mod soft_clip;
pub mod waves;
