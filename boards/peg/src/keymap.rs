//! Keys are numbered the way the scanners are chained: 0 and 1 are the direct keys,
//! 2..14 the 3x4 matrix row by row, 14 and 15 the two directions of the volume encoder.

use macropad::action::{EncoderAction, KeyAction};
use macropad::{a, encoder, k, layer};

pub const COL: usize = 16;
pub const ROW: usize = 1;
pub const NUM_LAYER: usize = 8;
pub const NUM_ENCODER: usize = 1;

const EMPTY_LAYER: [[KeyAction; COL]; ROW] = [[a!(No); COL]; ROW];

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [
            k!(AudioMute), k!(RgbTog),
            k!(Kp7), k!(Kp8), k!(Kp9), k!(KpAsterisk),
            k!(Kp4), k!(Kp5), k!(Kp6), k!(KpMinus),
            k!(Kp1), k!(Kp2), k!(Kp3), k!(KpPlus),
            k!(AudioVolDown), k!(AudioVolUp)
        ]
    ]),
    EMPTY_LAYER,
    EMPTY_LAYER,
    EMPTY_LAYER,
    EMPTY_LAYER,
    EMPTY_LAYER,
    EMPTY_LAYER,
    EMPTY_LAYER,
];

/// The RGB encoder, same on every layer
const RGB_ENCODER: EncoderAction = encoder!(k!(RgbHui), k!(RgbHud), k!(RgbTog));

pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = [[RGB_ENCODER; NUM_ENCODER]; NUM_LAYER];
