//! Named aliases of the keys, `Mrc` is the key at row `r` and column `c` of the macro block,
//! `ENCxy` are the encoder and dip switch bindings.

use macropad::action::KeyAction;
use macropad::modifier::{CTRL, GUI};
use macropad::{a, k, wm};

// Macro block
pub const M00: KeyAction = wm!(Escape, GUI);
pub const M01: KeyAction = a!(No);
pub const M02: KeyAction = a!(No);
pub const M03: KeyAction = a!(No);

pub const M10: KeyAction = k!(Left);
pub const M11: KeyAction = k!(MediaPlayPause);
pub const M12: KeyAction = k!(Right);
pub const M13: KeyAction = a!(No);

pub const M20: KeyAction = k!(PrintScreen);
pub const M21: KeyAction = a!(No);
pub const M22: KeyAction = a!(No);
pub const M23: KeyAction = a!(No);

// Encoder 0
pub const ENC01: KeyAction = k!(AudioVolUp);
pub const ENC02: KeyAction = k!(AudioVolDown);
pub const ENC03: KeyAction = k!(AudioMute);

// Encoder 1
pub const ENC10: KeyAction = wm!(Equal, CTRL);
pub const ENC11: KeyAction = wm!(Minus, CTRL);
pub const ENC12: KeyAction = k!(AudioMute);
