//! Keyboard actions.
//!
//! Actions represent what a key position or an encoder step is bound to.
//!
//! Key types:
//! - [`Action`] - Single operations that the runtime sends or executes
//! - [`KeyAction`] - What is stored at a keymap position
//! - [`EncoderAction`] - Rotary encoder actions, stored in the encoder map

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// EncoderAction is the action at a encoder position, stored in encoder_map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderAction {
    clockwise: KeyAction,
    counter_clockwise: KeyAction,
    /// Action of the encoder's push switch, `KeyAction::No` if there's none.
    press: KeyAction,
}

impl Default for EncoderAction {
    fn default() -> Self {
        Self::new(KeyAction::No, KeyAction::No)
    }
}

impl EncoderAction {
    /// Create a new encoder action.
    pub const fn new(clockwise: KeyAction, counter_clockwise: KeyAction) -> Self {
        Self {
            clockwise,
            counter_clockwise,
            press: KeyAction::No,
        }
    }

    /// Create a new encoder action, counter-clockwise first, same as QMK's `ENCODER_CCW_CW`.
    pub const fn ccw_cw(counter_clockwise: KeyAction, clockwise: KeyAction) -> Self {
        Self::new(clockwise, counter_clockwise)
    }

    /// Bind the encoder's push switch.
    pub const fn with_press(self, press: KeyAction) -> Self {
        Self { press, ..self }
    }

    /// Get the clockwise action.
    pub fn clockwise(&self) -> KeyAction {
        self.clockwise
    }

    /// Get the counter clockwise action.
    pub fn counter_clockwise(&self) -> KeyAction {
        self.counter_clockwise
    }

    /// Get the push switch action.
    pub fn press(&self) -> KeyAction {
        self.press
    }
}

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action. Serialized as 0x0000.
    No,
    /// Transparent action, next layer will be checked. Serialized as 0x0001.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer. Action is triggered when pressed and cancelled when released.
    Single(Action),
    /// Don't wait the release of the key, auto-release after a time threshold.
    Tap(Action),
    /// Tap dance, references a tap dance configuration by index.
    TapDance(u8),
}

impl KeyAction {
    /// Convert `KeyAction` to the internal `Action`.
    /// Only valid for `Single` and `Tap` variant, returns `Action::No` for other variants.
    pub const fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) | KeyAction::Tap(a) => a,
            _ => Action::No,
        }
    }

    pub const fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    /// The plain keycode of this action, if it's a single key stroke without modifiers.
    pub const fn keycode(&self) -> Option<KeyCode> {
        match self {
            KeyAction::Single(Action::Key(k)) | KeyAction::Tap(Action::Key(k)) => Some(*k),
            _ => None,
        }
    }
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including media and RGB keys.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while held
    LayerOn(u8),
    /// Toggle a layer
    LayerToggle(u8),
    /// Activate a layer and deactivate all other layers(except default layer)
    LayerToggleOnly(u8),
    /// Plays the macro sequence at the 'index'.
    TriggerMacro(u8),
    /// Sends a MIDI note on when pressed and a note off when released.
    MidiNote(u8),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modifier::GUI;

    #[test]
    fn test_encoder_action_order() {
        let up = KeyAction::Single(Action::Key(KeyCode::AudioVolUp));
        let down = KeyAction::Single(Action::Key(KeyCode::AudioVolDown));

        let e = EncoderAction::ccw_cw(up, down);
        assert_eq!(e.counter_clockwise(), up);
        assert_eq!(e.clockwise(), down);
        assert_eq!(e.press(), KeyAction::No);
        assert_eq!(e, EncoderAction::new(down, up));

        let mute = KeyAction::Single(Action::Key(KeyCode::AudioMute));
        assert_eq!(e.with_press(mute).press(), mute);
        assert_eq!(EncoderAction::default().clockwise(), KeyAction::No);
    }

    #[test]
    fn test_keycode_of_action() {
        assert_eq!(KeyAction::Single(Action::Key(KeyCode::Left)).keycode(), Some(KeyCode::Left));
        assert_eq!(KeyAction::Tap(Action::Key(KeyCode::A)).keycode(), Some(KeyCode::A));
        assert_eq!(
            KeyAction::Single(Action::KeyWithModifier(KeyCode::Escape, GUI)).keycode(),
            None
        );
        assert_eq!(KeyAction::No.keycode(), None);
        assert_eq!(KeyAction::TapDance(1).to_action(), Action::No);
    }
}
