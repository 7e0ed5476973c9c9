use macropad::action::{EncoderAction, KeyAction};
use macropad::{a, layer};

use crate::macros::*;

pub const COL: usize = 4;
pub const ROW: usize = 4;
pub const NUM_LAYER: usize = 1;
pub const NUM_ENCODER: usize = 2;

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [ENC03, a!(No), a!(No), ENC12],
        [M00, M01, M02, M03],
        [M10, M11, M12, M13],
        [M20, M21, M22, M23]
    ]),
];

pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = [[
    EncoderAction::ccw_cw(ENC01, ENC02),
    EncoderAction::ccw_cw(ENC11, ENC12),
]];
