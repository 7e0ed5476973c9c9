//! The studio layout of the macro pad.
//!
//! Three layers on a 3x4 matrix: shell and browser macros, RGB control and MIDI notes.
//! The top right key is a tap dance which switches between them.

#![cfg_attr(not(test), no_std)]

pub mod keymap;
pub mod macros;

use macropad::config::{BehaviorConfig, KeyboardConfig, MatrixConfig, MidiConfig, UsbConfig};
use macropad::keymap::KeyMap;
use macropad::midi::MidiHook;
use macropad::tap_dance::TapDance;

pub use crate::keymap::{ENCODER_MAP, KEYMAP};
use crate::keymap::{COL, NUM_ENCODER, NUM_LAYER, ROW};
pub use crate::macros::MACRO_SEQUENCES;
use crate::macros::{MIDI_OUT_ACTIONS, TD_LYRS_ACTIONS};

const TAPPING_TERM_MS: u16 = 250;

const BEHAVIOR: BehaviorConfig = BehaviorConfig {
    tapping_term_ms: TAPPING_TERM_MS,
    midi: MidiConfig::const_default(),
};

pub static KEYBOARD_CONFIG: KeyboardConfig<'static> = KeyboardConfig {
    usb: UsbConfig {
        product: "Studio macro pad",
        ..UsbConfig::const_default()
    },
    matrix: MatrixConfig { rows: ROW, cols: COL },
    encoder_count: NUM_ENCODER,
    dip_switch_count: 0,
    behavior: BEHAVIOR,
};

/// Indexed by `KeyAction::TapDance`
pub static TAP_DANCES: [TapDance; 2] = [
    TapDance::new(TD_LYRS_ACTIONS, TAPPING_TERM_MS),
    TapDance::new(MIDI_OUT_ACTIONS, TAPPING_TERM_MS),
];

pub static MIDI_HOOK: MidiHook = MidiHook::new(BEHAVIOR.midi);

pub fn create_keymap() -> KeyMap<'static, ROW, COL, NUM_LAYER, NUM_ENCODER> {
    KeyMap::new(&KEYMAP, Some(&ENCODER_MAP))
}
