//! Soft clip curve, sampled at 1/16 steps of the input magnitude.

// Based on MIT-licensed code (c) 2023-2024 by Tomoaki Itoh

use crate::utils::fixed::Q7_24;

pub const LUT_SOFT_CLIP_BITS: u32 = 5;
pub const LUT_SOFT_CLIP_SIZE: usize = 1 << LUT_SOFT_CLIP_BITS;

pub const LUT_SOFT_CLIP: [Q7_24; LUT_SOFT_CLIP_SIZE] = [
    Q7_24(0x00000000),
    Q7_24(0x000FFD63),
    Q7_24(0x001FEB28),
    Q7_24(0x002FB9EC),
    Q7_24(0x003F5AC5),
    Q7_24(0x004EBF78),
    Q7_24(0x005DDAA8),
    Q7_24(0x006CA006),
    Q7_24(0x007B0471),
    Q7_24(0x0088FE0D),
    Q7_24(0x0096845D),
    Q7_24(0x00A39046),
    Q7_24(0x00B01C11),
    Q7_24(0x00BC2368),
    Q7_24(0x00C7A345),
    Q7_24(0x00D299E2),
    Q7_24(0x00DD06A3),
    Q7_24(0x00E6E9FC),
    Q7_24(0x00F04553),
    Q7_24(0x00F91AE5),
    Q7_24(0x01016DA7),
    Q7_24(0x0109412D),
    Q7_24(0x01109989),
    Q7_24(0x01177B33),
    Q7_24(0x011DEAF2),
    Q7_24(0x0123EDC4),
    Q7_24(0x012988CD),
    Q7_24(0x012EC13F),
    Q7_24(0x01339C54),
    Q7_24(0x01381F39),
    Q7_24(0x013C4F07),
    Q7_24(0x014030BA),
];
