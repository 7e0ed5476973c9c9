pub mod common;

use macropad::event::{Direction, EncoderEvent};
use macropad::qmk::{encoder_map_to_qmk, keymap_to_qmk};
use macropad::{a, k};
use macropad_peg::hue::{HueControl, HueStore};
use macropad_peg::keymap::NUM_LAYER;
use macropad_peg::{ENCODER_MAP, KEYBOARD_CONFIG, KEYMAP, create_keymap};

#[test]
fn test_keymap_qmk_table() {
    let table = keymap_to_qmk(&KEYMAP);
    #[rustfmt::skip]
    let expected: [u16; 16] = [
        0x00A8, 0x0000, // mute, RGB toggle has no QMK keycode
        0x005F, 0x0060, 0x0061, 0x0055,
        0x005C, 0x005D, 0x005E, 0x0056,
        0x0059, 0x005A, 0x005B, 0x0057,
        0x00AA, 0x00A9,
    ];
    assert_eq!(table[0][0], expected);
    for layer in &table[1..] {
        assert_eq!(*layer, [[0u16; 16]]);
    }
}

#[test]
fn test_key_positions() {
    let keymap = create_keymap();
    assert_eq!(keymap.get_action(0, 1), Ok(k!(RgbTog)));
    assert_eq!(keymap.get_action(0, 5), Ok(k!(KpAsterisk)));
    assert_eq!(keymap.get_action(0, 13), Ok(k!(KpPlus)));
    assert_eq!(keymap.get_action(0, 15), Ok(k!(AudioVolUp)));
    assert_eq!(keymap.get_action_at(0, 0, 7), Ok(a!(No)));
    assert!(keymap.get_action(1, 0).is_err());
}

#[test]
fn test_rgb_encoder() {
    let mut keymap = create_keymap();
    // Unused in the VIA table
    assert_eq!(encoder_map_to_qmk(&ENCODER_MAP), [[[0, 0]]; NUM_LAYER]);

    for layer in [0, 5] {
        keymap.toggle_only(layer);
        let step = |direction| keymap.get_encoder_key_action(EncoderEvent { id: 0, direction });
        assert_eq!(step(Direction::CounterClockwise), Ok(k!(RgbHud)));
        assert_eq!(step(Direction::Clockwise), Ok(k!(RgbHui)));
        assert_eq!(keymap.get_encoder_action(0, layer as usize).map(|e| e.press()), Ok(k!(RgbTog)));
    }
}

struct Nvm([u8; 1]);

impl HueStore for Nvm {
    fn load(&self) -> u8 {
        self.0[0]
    }

    fn save(&mut self, hue: u8) {
        self.0[0] = hue;
    }
}

#[test]
fn test_hue_survives_restart() {
    let mut control = HueControl::new(Nvm([100]));
    control.on_step(Direction::Clockwise);
    control.on_step(Direction::Clockwise);
    control.on_step(Direction::CounterClockwise);
    let nvm = control.into_store();
    assert_eq!(nvm.0, [101]);

    let restarted = HueControl::new(nvm);
    assert_eq!(restarted.hue(), 101);
}

#[test]
fn test_config() {
    assert!(KEYBOARD_CONFIG.matches(create_keymap().dimensions()));
    assert_eq!(KEYBOARD_CONFIG.usb.product, "Peg");
}
