use heapless::Vec;
use macropad::action::{Action, KeyAction};
use macropad::injector::KeyInjector;
use macropad::keyboard_macros::{MacroSequence, get_macro, play};
use macropad::keymap::KeyMap;
use macropad::midi::{MidiHook, MidiMessage, MidiSink};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

#[derive(Debug, Default)]
pub struct TestMidiSink {
    pub messages: Vec<MidiMessage, 16>,
}

impl MidiSink for TestMidiSink {
    fn send(&mut self, message: MidiMessage) {
        self.messages.push(message).unwrap();
    }
}

/// Minimal stand-in for the firmware runtime: applies a resolved action on key press.
pub fn press_action<const ROW: usize, const COL: usize, const NUM_LAYER: usize, const NUM_ENCODER: usize>(
    keymap: &mut KeyMap<'_, ROW, COL, NUM_LAYER, NUM_ENCODER>,
    action: KeyAction,
    sequences: &[MacroSequence],
    injector: &mut impl KeyInjector,
    midi: &mut TestMidiSink,
) {
    let KeyAction::Single(action) = action else {
        return;
    };
    match action {
        Action::Key(k) => injector.tap(k),
        Action::LayerOn(l) => keymap.activate_layer(l),
        Action::LayerToggle(l) => keymap.toggle_layer(l),
        Action::LayerToggleOnly(l) => keymap.toggle_only(l),
        Action::TriggerMacro(n) => play(get_macro(sequences, n).unwrap(), injector),
        Action::MidiNote(note) => MidiHook::default().on_press(note, midi),
        _ => {}
    }
}
