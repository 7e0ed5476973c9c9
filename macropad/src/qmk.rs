//! Conversion between key actions and QMK's 16-bit keycodes.
//!
//! QMK keeps `keymaps[][MATRIX_ROWS][MATRIX_COLS]` and
//! `encoder_map[][NUM_ENCODERS][NUM_DIRECTIONS]` as `uint16_t` tables in flash.
//!
//! Layer, tap dance and macro keycodes are emitted in the VIA protocol v2 (Vial) ranges,
//! e.g. `MO(n) = 0x5100 | n`. Current QMK uses other values inside `keymaps[]`
//! (`MO(n) = 0x5220 | n`). Basic keycodes and modded keys are the same in both.

use log::warn;

use crate::action::{Action, EncoderAction, KeyAction};
use crate::event::Direction;
use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// Number of directions of an encoder in QMK's encoder map
pub const NUM_DIRECTIONS: usize = 2;

const VIA_TO: u16 = 0x5010;
const VIA_MO: u16 = 0x5100;
const VIA_TOGGLE_LAYER: u16 = 0x5300;
const VIA_TD: u16 = 0x5700;
const VIA_MACRO: u16 = 0x5F12;
const MAX_MACRO: u8 = 16;

/// Convert a key action to a 16-bit VIA keycode.
/// Actions which QMK can't represent become `KC_NO`.
pub fn to_qmk_keycode(key_action: KeyAction) -> u16 {
    match key_action {
        KeyAction::No => 0x0000,
        KeyAction::Transparent => 0x0001,
        KeyAction::Single(a) => match a {
            Action::No => 0x0000,
            Action::Transparent => 0x0001,
            Action::Key(k) if k.is_basic() => k as u16,
            Action::KeyWithModifier(k, m) if k.is_basic() => ((m.into_bits() as u16 & 0x1F) << 8) | k as u16,
            Action::LayerOn(l) if l < 16 => VIA_MO | l as u16,
            Action::LayerToggle(l) if l < 16 => VIA_TOGGLE_LAYER | l as u16,
            Action::LayerToggleOnly(l) if l < 16 => VIA_TO | l as u16,
            Action::TriggerMacro(n) if n < MAX_MACRO => VIA_MACRO + n as u16,
            _ => {
                warn!("{:?} has no QMK keycode", a);
                0x0000
            }
        },
        KeyAction::Tap(_) => {
            warn!("Tap action is not supported by QMK keymaps");
            0x0000
        }
        KeyAction::TapDance(n) => VIA_TD | n as u16,
    }
}

/// Convert a 16-bit VIA keycode to KeyAction.
pub fn from_qmk_keycode(qmk_keycode: u16) -> KeyAction {
    match qmk_keycode {
        0x0000 => KeyAction::No,
        0x0001 => KeyAction::Transparent,
        0x0002..=0x00FF => match KeyCode::from_repr(qmk_keycode) {
            Some(k) => KeyAction::Single(Action::Key(k)),
            None => {
                warn!("Keycode {:#X} is not supported", qmk_keycode);
                KeyAction::No
            }
        },
        0x0100..=0x1FFF => {
            // Modded key, e.g. `LGUI(KC_ESC)`
            let modifier = ModifierCombination::from_bits((qmk_keycode >> 8) as u8);
            match KeyCode::from_repr(qmk_keycode & 0x00FF) {
                Some(k) => KeyAction::Single(Action::KeyWithModifier(k, modifier)),
                None => {
                    warn!("Keycode {:#X} is not supported", qmk_keycode);
                    KeyAction::No
                }
            }
        }
        0x5010..=0x501F => KeyAction::Single(Action::LayerToggleOnly(qmk_keycode as u8 & 0x0F)),
        0x5100..=0x510F => KeyAction::Single(Action::LayerOn(qmk_keycode as u8 & 0x0F)),
        0x5300..=0x530F => KeyAction::Single(Action::LayerToggle(qmk_keycode as u8 & 0x0F)),
        0x5700..=0x57FF => KeyAction::TapDance(qmk_keycode as u8),
        0x5F12..=0x5F21 => KeyAction::Single(Action::TriggerMacro((qmk_keycode - VIA_MACRO) as u8)),
        _ => {
            warn!("QMK keycode {:#X} is not processed", qmk_keycode);
            KeyAction::No
        }
    }
}

/// Convert the keymap into QMK's `keymaps[][MATRIX_ROWS][MATRIX_COLS]` table
pub fn keymap_to_qmk<const ROW: usize, const COL: usize, const NUM_LAYER: usize>(
    layers: &[[[KeyAction; COL]; ROW]; NUM_LAYER],
) -> [[[u16; COL]; ROW]; NUM_LAYER] {
    let mut table = [[[0u16; COL]; ROW]; NUM_LAYER];
    for (layer, qmk_layer) in layers.iter().zip(table.iter_mut()) {
        for (row, qmk_row) in layer.iter().zip(qmk_layer.iter_mut()) {
            for (action, qmk_keycode) in row.iter().zip(qmk_row.iter_mut()) {
                *qmk_keycode = to_qmk_keycode(*action);
            }
        }
    }
    table
}

/// Convert the encoder map into QMK's `encoder_map[][NUM_ENCODERS][NUM_DIRECTIONS]` table.
///
/// Direction 0 is counter-clockwise and 1 is clockwise, the order of `ENCODER_CCW_CW`.
/// QMK has no encoder push action in the encoder map, the push switch lives in the matrix.
pub fn encoder_map_to_qmk<const NUM_ENCODER: usize, const NUM_LAYER: usize>(
    encoders: &[[EncoderAction; NUM_ENCODER]; NUM_LAYER],
) -> [[[u16; NUM_DIRECTIONS]; NUM_ENCODER]; NUM_LAYER] {
    let mut table = [[[0u16; NUM_DIRECTIONS]; NUM_ENCODER]; NUM_LAYER];
    for (layer, qmk_layer) in encoders.iter().zip(table.iter_mut()) {
        for (encoder, qmk_encoder) in layer.iter().zip(qmk_layer.iter_mut()) {
            qmk_encoder[Direction::CounterClockwise.qmk_index()] = to_qmk_keycode(encoder.counter_clockwise());
            qmk_encoder[Direction::Clockwise.qmk_index()] = to_qmk_keycode(encoder.clockwise());
        }
    }
    table
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modifier::{ALT, CTRL, GUI, RIGHT, SHIFT};
    use crate::{a, encoder, k, mc, midi, mo, td, tg, to, wm};

    #[test]
    fn test_convert_qmk_keycode_to_key_action() {
        // A
        assert_eq!(k!(A), from_qmk_keycode(0x04));
        // Right shift
        assert_eq!(k!(RShift), from_qmk_keycode(0xE5));
        // Mute
        assert_eq!(k!(AudioMute), from_qmk_keycode(0xA8));
        // MO(3)
        assert_eq!(mo!(3), from_qmk_keycode(0x5103));
        // TG(2)
        assert_eq!(tg!(2), from_qmk_keycode(0x5302));
        // TO(1)
        assert_eq!(to!(1), from_qmk_keycode(0x5011));
        // TD(1)
        assert_eq!(td!(1), from_qmk_keycode(0x5701));
        // MACRO2
        assert_eq!(mc!(2), from_qmk_keycode(0x5F14));
        // LGUI(KC_ESC)
        assert_eq!(wm!(Escape, GUI), from_qmk_keycode(0x0829));
        // LCTL(KC_MINUS)
        assert_eq!(wm!(Minus, CTRL), from_qmk_keycode(0x012D));
        // RCtrl(A)
        assert_eq!(wm!(A, RIGHT | CTRL), from_qmk_keycode(0x1104));
        // Meh(A)
        assert_eq!(wm!(A, CTRL | SHIFT | ALT), from_qmk_keycode(0x0704));
        // Unknown
        assert_eq!(a!(No), from_qmk_keycode(0x7C00));
        assert_eq!(a!(No), from_qmk_keycode(0x0032));
        assert_eq!(a!(Transparent), from_qmk_keycode(0x0001));
    }

    #[test]
    fn test_convert_key_action_to_qmk_keycode() {
        assert_eq!(0x0000, to_qmk_keycode(a!(No)));
        assert_eq!(0x0001, to_qmk_keycode(a!(Transparent)));
        assert_eq!(0x04, to_qmk_keycode(k!(A)));
        assert_eq!(0xAE, to_qmk_keycode(k!(MediaPlayPause)));
        assert_eq!(0x0829, to_qmk_keycode(wm!(Escape, GUI)));
        assert_eq!(0x012E, to_qmk_keycode(wm!(Equal, CTRL)));
        assert_eq!(0x1104, to_qmk_keycode(wm!(A, RIGHT | CTRL)));
        assert_eq!(0x5103, to_qmk_keycode(mo!(3)));
        assert_eq!(0x5302, to_qmk_keycode(tg!(2)));
        assert_eq!(0x5012, to_qmk_keycode(to!(2)));
        assert_eq!(0x5700, to_qmk_keycode(td!(0)));
        assert_eq!(0x5F12, to_qmk_keycode(mc!(0)));
    }

    #[test]
    fn test_layer_keycodes_are_via_v2() {
        assert_eq!(to_qmk_keycode(mo!(0)), 0x5100);
        assert_eq!(to_qmk_keycode(to!(15)), 0x501F);
        assert_eq!(to_qmk_keycode(mc!(15)), 0x5F21);
        // QMK's own `MO(0)`
        assert_eq!(from_qmk_keycode(0x5220), a!(No));
    }

    #[test]
    fn test_unrepresentable_actions() {
        assert_eq!(0x0000, to_qmk_keycode(k!(RgbTog)));
        assert_eq!(0x0000, to_qmk_keycode(midi!(60)));
        assert_eq!(0x0000, to_qmk_keycode(KeyAction::Tap(Action::Key(KeyCode::A))));
        assert_eq!(0x0000, to_qmk_keycode(mc!(16)));
    }

    #[test]
    fn test_tables() {
        let layers = [[[k!(AudioMute), a!(No)], [wm!(Escape, GUI), a!(Transparent)]]];
        assert_eq!(keymap_to_qmk(&layers), [[[0xA8, 0x0000], [0x0829, 0x0001]]]);

        let encoders = [[
            encoder!(k!(AudioVolDown), k!(AudioVolUp)),
            encoder!(k!(AudioMute), wm!(Minus, CTRL), k!(A)),
        ]];
        assert_eq!(encoder_map_to_qmk(&encoders), [[[0xA9, 0xAA], [0x012D, 0xA8]]]);
    }
}
