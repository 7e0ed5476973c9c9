//! Building blocks of the macro pad firmware.
//!
//! The firmware runtime (matrix scanning, debouncing, encoder polling, USB HID) is
//! external. This crate holds what the runtime reads and calls back into:
//! the keymap and encoder map, the dip switch hook, macro sequences, tap dances and
//! the MIDI hook, plus the conversion of the tables into QMK's 16-bit keycode format.

#![cfg_attr(not(test), no_std)]

pub use macropad_types as types;
// Re-exported so that the layout macros resolve `$crate::action` and `$crate::keycode`
pub use macropad_types::{action, keycode, modifier};

pub mod config;
pub mod dip_switch;
pub mod error;
pub mod event;
pub mod injector;
pub mod keyboard_macros;
pub mod keymap;
pub mod layout_macro;
pub mod midi;
pub mod qmk;
pub mod tap_dance;
