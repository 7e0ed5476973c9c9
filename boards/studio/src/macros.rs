//! Macro sequences and the keys that trigger them.

use macropad::action::KeyAction;
use macropad::keyboard_macros::{MacroOperation, MacroSequence};
use macropad::keycode::KeyCode;
use macropad::modifier::{ALT, CTRL, GUI, SHIFT};
use macropad::{a, k, mc, midi, mo, to};

/// Open a new terminal tab, wait for it and clear the prompt line, then type `$text` followed by `$last`
macro_rules! in_terminal {
    ($text: literal, $last: ident) => {
        [
            MacroOperation::TapWithModifier(KeyCode::T, GUI.union(ALT).union(SHIFT)),
            MacroOperation::Delay(1000),
            MacroOperation::TapWithModifier(KeyCode::U, CTRL),
            MacroOperation::Text($text),
            MacroOperation::Tap(KeyCode::$last),
        ]
    };
}

pub static LOCK_SEQ: [MacroOperation; 3] = [
    MacroOperation::TapWithModifier(KeyCode::Q, CTRL.union(GUI)),
    MacroOperation::Delay(400),
    MacroOperation::Tap(KeyCode::Escape),
];
pub static TERMINAL_SEQ: [MacroOperation; 2] = [
    MacroOperation::TapWithModifier(KeyCode::T, GUI.union(ALT).union(SHIFT)),
    MacroOperation::TapWithModifier(KeyCode::U, CTRL),
];
pub static FORCE_QUIT_SEQ: [MacroOperation; 1] =
    [MacroOperation::TapWithModifier(KeyCode::Escape, GUI.union(ALT))];
pub static BROWSER_SEQ: [MacroOperation; 5] = in_terminal!("open https://ocrism.studio", Enter);
pub static CLEAR_SEQ: [MacroOperation; 1] =
    [MacroOperation::TapWithModifier(KeyCode::Backspace, GUI.union(SHIFT))];
pub static INSPECT_SEQ: [MacroOperation; 1] = [MacroOperation::TapWithModifier(KeyCode::I, GUI.union(ALT))];
pub static HARD_RELOAD_SEQ: [MacroOperation; 1] =
    [MacroOperation::TapWithModifier(KeyCode::R, GUI.union(SHIFT))];
pub static GIT_SEQ: [MacroOperation; 5] = in_terminal!("open https://github.com", Enter);
pub static G_STATUS_SEQ: [MacroOperation; 5] = in_terminal!("git status", Enter);
pub static G_PULL_SEQ: [MacroOperation; 5] = in_terminal!("git fetch origin", Enter);
// Leaves the cursor between the quotes
pub static G_COMMIT_SEQ: [MacroOperation; 5] = in_terminal!("git commit -m \"\"", Left);

pub const NUM_MACRO: usize = 11;

/// Indexed by `Action::TriggerMacro`
pub static MACRO_SEQUENCES: [MacroSequence; NUM_MACRO] = [
    &LOCK_SEQ,
    &TERMINAL_SEQ,
    &FORCE_QUIT_SEQ,
    &BROWSER_SEQ,
    &CLEAR_SEQ,
    &INSPECT_SEQ,
    &HARD_RELOAD_SEQ,
    &GIT_SEQ,
    &G_STATUS_SEQ,
    &G_PULL_SEQ,
    &G_COMMIT_SEQ,
];

pub const LOCK: KeyAction = mc!(0);
pub const TERMINAL: KeyAction = mc!(1);
pub const FORCE_QUIT: KeyAction = mc!(2);
pub const BROWSER: KeyAction = mc!(3);
pub const CLEAR: KeyAction = mc!(4);
pub const INSPECT: KeyAction = mc!(5);
pub const HARD_RELOAD: KeyAction = mc!(6);
pub const GIT: KeyAction = mc!(7);
pub const G_STATUS: KeyAction = mc!(8);
pub const G_PULL: KeyAction = mc!(9);
pub const G_COMMIT: KeyAction = mc!(10);

pub const MUTE: KeyAction = k!(AudioMute);

/// Tap dance actions for 1, 2, 3 and 4 taps
pub const TD_LYRS_ACTIONS: [KeyAction; 4] = [LOCK, mo!(1), a!(No), to!(2)];
pub const MIDI_OUT_ACTIONS: [KeyAction; 4] = [midi!(70), a!(No), a!(No), to!(0)];
