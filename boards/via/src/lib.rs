//! The QMK/VIA macro pad.
//!
//! The top row holds the two encoder push switches, the 3x4 block below it holds
//! the macro keys. Both dip switches mute the audio.

#![cfg_attr(not(test), no_std)]

pub mod keymap;
pub mod macros;

use macropad::config::{BehaviorConfig, KeyboardConfig, MatrixConfig, UsbConfig};
use macropad::dip_switch::{DipSwitchConfig, DipSwitchHandler};
use macropad::injector::KeyInjector;
use macropad::keymap::KeyMap;

pub use crate::keymap::{ENCODER_MAP, KEYMAP};
use crate::keymap::{COL, NUM_ENCODER, NUM_LAYER, ROW};
use crate::macros::{ENC03, ENC12};

pub const NUM_DIP_SWITCH: usize = 2;

pub static KEYBOARD_CONFIG: KeyboardConfig<'static> = KeyboardConfig {
    usb: UsbConfig {
        vid: 0xFEED,
        pid: 0x0000,
        manufacturer: "danibcorr",
        product: "Macro pad",
        serial_number: "0",
    },
    matrix: MatrixConfig { rows: ROW, cols: COL },
    encoder_count: NUM_ENCODER,
    dip_switch_count: NUM_DIP_SWITCH,
    behavior: BehaviorConfig::const_default(),
};

static DIP_SWITCH: DipSwitchHandler<NUM_DIP_SWITCH> =
    DipSwitchHandler::new(DipSwitchConfig::new([ENC03.keycode(), ENC12.keycode()]));

/// Create the keymap the runtime resolves key and encoder events against
pub fn create_keymap() -> KeyMap<'static, ROW, COL, NUM_LAYER, NUM_ENCODER> {
    KeyMap::new(&KEYMAP, Some(&ENCODER_MAP))
}

/// Called by the runtime on every dip switch transition.
///
/// Switch 0 taps `ENC03` and switch 1 taps `ENC12` when they become active.
/// Always returns `true`.
pub fn dip_switch_update_user<I: KeyInjector>(index: u8, active: bool, injector: &mut I) -> bool {
    DIP_SWITCH.update(index, active, injector)
}
