//! LFO phase increments, exponentially spaced from ~0.1 Hz to ~23 Hz at 48 kHz.
//!
//! Values are increments of a `PHASE_BITS` wide accumulator.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

pub const LUT_LFO_DELTA_SIZE: usize = 48;

pub const LUT_LFO_DELTA: [u32; LUT_LFO_DELTA_SIZE] = [
    0x00022F, 0x000273, 0x0002C0, 0x000316, 0x000377, 0x0003E4, 0x00045E, 0x0004E7, 0x000581,
    0x00062D, 0x0006EF, 0x0007C8, 0x0008BC, 0x0009CE, 0x000B02, 0x000C5B, 0x000DDE, 0x000F91,
    0x001179, 0x00139D, 0x001604, 0x0018B7, 0x001BBD, 0x001F23, 0x0022F3, 0x00273B, 0x002C09,
    0x00316E, 0x00377B, 0x003E47, 0x0045E7, 0x004E77, 0x005813, 0x0062DC, 0x006EF7, 0x007C8E,
    0x008BCF, 0x009CEE, 0x00B026, 0x00C5B8, 0x00DDEF, 0x00F91D, 0x01179E, 0x0139DC, 0x01604C,
    0x018B71, 0x01BBDE, 0x01F23A,
];
