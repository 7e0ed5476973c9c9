use core::ops::BitOr;

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
///
/// The layout is the same as the high byte of QMK's modded keycodes, so
/// `LGUI(KC_ESC)` is `(GUI.into_bits() << 8) | 0x29`.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);

impl ModifierCombination {
    /// Combine two modifier combinations in const context.
    pub const fn union(self, other: Self) -> Self {
        Self::from_bits(self.into_bits() | other.into_bits())
    }

    /// Returns true if no modifier is set. The L/R bit alone doesn't count.
    pub const fn is_empty(self) -> bool {
        self.into_bits() & 0x0F == 0
    }

    /// Convert the combination into the modifier keycodes it presses, in
    /// ctrl, shift, alt, gui order.
    /// Returns the keycodes and how many of them are valid.
    pub fn to_modifier_keycodes(self) -> ([KeyCode; 4], usize) {
        let mut keycodes = [KeyCode::No; 4];
        let mut n = 0;
        let right = self.right();
        let table = [
            (self.ctrl(), KeyCode::LCtrl, KeyCode::RCtrl),
            (self.shift(), KeyCode::LShift, KeyCode::RShift),
            (self.alt(), KeyCode::LAlt, KeyCode::RAlt),
            (self.gui(), KeyCode::LGui, KeyCode::RGui),
        ];
        for (set, left_key, right_key) in table {
            if set {
                keycodes[n] = if right { right_key } else { left_key };
                n += 1;
            }
        }
        (keycodes, n)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_modifier_bits_match_qmk() {
        assert_eq!(CTRL.into_bits(), 0x01);
        assert_eq!(SHIFT.into_bits(), 0x02);
        assert_eq!(ALT.into_bits(), 0x04);
        assert_eq!(GUI.into_bits(), 0x08);
        assert_eq!((RIGHT | CTRL).into_bits(), 0x11);
        assert_eq!(CTRL.union(SHIFT).union(ALT).into_bits(), 0x07);
    }

    #[test]
    fn test_modifier_keycodes() {
        let (keys, n) = (GUI | ALT | SHIFT).to_modifier_keycodes();
        assert_eq!(&keys[..n], &[KeyCode::LShift, KeyCode::LAlt, KeyCode::LGui]);

        let (keys, n) = (RIGHT | CTRL).to_modifier_keycodes();
        assert_eq!(&keys[..n], &[KeyCode::RCtrl]);

        let (_, n) = RIGHT.to_modifier_keycodes();
        assert_eq!(n, 0);
        assert!(RIGHT.is_empty());
    }
}
