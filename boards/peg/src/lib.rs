//! The Peg pad.
//!
//! A number pad with a mute and an RGB toggle key, a volume encoder scanned as two keys
//! and an RGB encoder which sets the underglow hue, see [`hue`].

#![cfg_attr(not(test), no_std)]

pub mod hue;
pub mod keymap;

use macropad::config::{BehaviorConfig, KeyboardConfig, MatrixConfig, UsbConfig};
use macropad::keymap::KeyMap;

pub use crate::keymap::{ENCODER_MAP, KEYMAP};
use crate::keymap::{COL, NUM_ENCODER, NUM_LAYER, ROW};

pub static KEYBOARD_CONFIG: KeyboardConfig<'static> = KeyboardConfig {
    usb: UsbConfig {
        product: "Peg",
        ..UsbConfig::const_default()
    },
    matrix: MatrixConfig { rows: ROW, cols: COL },
    encoder_count: NUM_ENCODER,
    dip_switch_count: 0,
    behavior: BehaviorConfig::const_default(),
};

pub fn create_keymap() -> KeyMap<'static, ROW, COL, NUM_LAYER, NUM_ENCODER> {
    KeyMap::new(&KEYMAP, Some(&ENCODER_MAP))
}
