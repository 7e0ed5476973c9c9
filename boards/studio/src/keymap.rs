use macropad::action::{EncoderAction, KeyAction};
use macropad::{a, encoder, k, layer, midi, td};

use crate::macros::*;

pub const COL: usize = 4;
pub const ROW: usize = 3;
pub const NUM_LAYER: usize = 3;
pub const NUM_ENCODER: usize = 2;

pub const MACROS: u8 = 0;
pub const RGB_CTL: u8 = 1;
pub const MIDI: u8 = 2;

pub const TD_LYRS: KeyAction = td!(0);
pub const MIDI_OUT: KeyAction = td!(1);

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [TERMINAL, FORCE_QUIT, MUTE, TD_LYRS],
        [BROWSER, CLEAR, INSPECT, HARD_RELOAD],
        [GIT, G_STATUS, G_PULL, G_COMMIT]
    ]),
    layer!([
        [a!(No), a!(No), a!(No), a!(No)],
        [a!(No), k!(RgbModeSwirl), k!(RgbModeKnight), k!(RgbModeBreatheRainbow)],
        [a!(No), k!(RgbModePlain), k!(RgbModeBreathe), k!(RgbModeRainbow)]
    ]),
    layer!([
        [midi!(30), midi!(69), midi!(70), MIDI_OUT],
        [midi!(67), midi!(66), midi!(65), midi!(64)],
        [midi!(60), midi!(61), midi!(62), midi!(63)]
    ]),
];

#[rustfmt::skip]
pub static ENCODER_MAP: [[EncoderAction; NUM_ENCODER]; NUM_LAYER] = [
    [
        encoder!(k!(AudioVolUp), k!(AudioVolDown), k!(AudioMute)),
        encoder!(k!(RgbVai), k!(RgbVad), k!(RgbTog)),
    ],
    [
        encoder!(k!(RgbSpi), k!(RgbSpd), a!(No)),
        encoder!(k!(RgbHui), k!(RgbHud), a!(Transparent)),
    ],
    [
        encoder!(k!(AudioVolUp), k!(AudioVolDown), k!(AudioMute)),
        encoder!(k!(RgbVai), k!(RgbVad), k!(RgbTog)),
    ],
];
