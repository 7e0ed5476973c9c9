//! # Macro pad types
//!
//! Fundamental type definitions shared by the macro pad keymaps.
//!
//! ## Modules
//!
//! - [`action`] - Key actions stored in keymaps and encoder maps (keys, layer operations, macros, MIDI notes)
//! - [`keycode`] - Keycode definitions, HID keycodes plus media and RGB control keycodes
//! - [`modifier`] - Modifier key combinations
//!
//! The `macropad` crate builds keymaps and hooks on top of these types, and every
//! board crate declares its tables with them.

#![no_std]

pub mod action;
pub mod keycode;
pub mod modifier;
